mod errors;

pub use errors::AuthenticatorError;

use async_trait::async_trait;

use crate::ceremony::{CeremonyResponse, ChallengeOptions};

/// The local secure-credential capability (platform- or device-provided).
///
/// Both operations suspend until the user completes or abandons the
/// interaction; either can take an arbitrarily long time or fail for reasons
/// outside the application's control. Implementations live at the platform
/// boundary; this crate consumes the trait and never inspects the artifacts
/// it produces.
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    /// Create a new credential from registration challenge options.
    async fn create_credential(
        &self,
        options: &ChallengeOptions,
    ) -> Result<CeremonyResponse, AuthenticatorError>;

    /// Produce an assertion over login challenge options with an existing
    /// credential.
    async fn get_assertion(
        &self,
        options: &ChallengeOptions,
    ) -> Result<CeremonyResponse, AuthenticatorError>;
}
