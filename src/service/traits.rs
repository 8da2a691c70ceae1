use async_trait::async_trait;

use crate::ceremony::{CeremonyKind, CeremonyResponse, ChallengeOptions};

use super::errors::ServiceError;
use super::types::FinishResponse;

/// The remote credential-verification service, seen from the client side.
///
/// One implementation talks HTTP ([`HttpVerificationService`]); tests
/// substitute doubles that return canned challenges and verdicts. The
/// service owns challenge issuance and response verification; this crate
/// only sequences the calls.
///
/// [`HttpVerificationService`]: super::HttpVerificationService
#[async_trait]
pub trait VerificationService: Send + Sync + 'static {
    /// Request a fresh challenge for `identity_label` from the start
    /// endpoint of `kind`.
    async fn start(
        &self,
        kind: CeremonyKind,
        identity_label: &str,
    ) -> Result<ChallengeOptions, ServiceError>;

    /// Submit the signed ceremony response to the finish endpoint of
    /// `kind` and return the service's parsed verdict body.
    async fn finish(
        &self,
        kind: CeremonyKind,
        response: &CeremonyResponse,
    ) -> Result<FinishResponse, ServiceError>;
}
