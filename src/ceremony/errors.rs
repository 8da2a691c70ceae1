use thiserror::Error;

use crate::authenticator::AuthenticatorError;
use crate::service::ServiceError;

/// Errors that can occur while driving a ceremony.
///
/// One variant per stage of the taxonomy: local validation, the start
/// round-trip, the authenticator interaction, and the finish round-trip.
/// Stage attribution is explicit in the orchestrator rather than via `From`
/// impls, since a [`ServiceError`] can arise at either network stage.
#[derive(Debug, Error)]
pub enum CeremonyError {
    /// Malformed local input; never reaches the network
    #[error("Validation error: {0}")]
    Validation(String),

    /// The verification service rejected or was unreachable during Start
    #[error("Start error: {0}")]
    Start(ServiceError),

    /// The local authenticator interaction failed, was cancelled, or
    /// timed out; no server round-trip occurred
    #[error("Ceremony error: {0}")]
    Ceremony(AuthenticatorError),

    /// The verification service rejected the signed response, or transport
    /// failed during Finish
    #[error("Finish error: {0}")]
    Finish(ServiceError),
}

impl CeremonyError {
    /// Log the error and return self
    ///
    /// This method logs the error with appropriate context and returns self,
    /// allowing for method chaining and explicit logging when needed.
    ///
    pub fn log(self) -> Self {
        match &self {
            Self::Validation(msg) => tracing::error!("Validation error: {}", msg),
            Self::Start(err) => tracing::error!("Start error: {}", err),
            Self::Ceremony(err) => tracing::error!("Ceremony error: {}", err),
            Self::Finish(err) => tracing::error!("Finish error: {}", err),
        }
        self
    }

    /// The message surfaced to the user in the final [`Verdict`].
    ///
    /// Collaborator-supplied wording passes through bare (the service's
    /// `error` field, the authenticator's own description); the stage
    /// classification stays internal for tests and logs.
    ///
    /// [`Verdict`]: super::Verdict
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Start(err) | Self::Finish(err) => err.message().to_string(),
            Self::Ceremony(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<CeremonyError>();
    }

    #[test]
    fn test_error_display() {
        let err = CeremonyError::Validation("Identity label must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: Identity label must not be empty"
        );

        let err = CeremonyError::Start(ServiceError::Rejected {
            status: 400,
            message: "unknown identity".to_string(),
        });
        assert_eq!(err.to_string(), "Start error: Rejected (400): unknown identity");

        let err = CeremonyError::Ceremony(AuthenticatorError::Cancelled);
        assert_eq!(
            err.to_string(),
            "Ceremony error: The operation was cancelled by the user"
        );
    }

    /// The user-facing message carries the collaborator's own wording
    #[test]
    fn test_user_message_is_bare_collaborator_text() {
        let err = CeremonyError::Start(ServiceError::Rejected {
            status: 400,
            message: "unknown identity".to_string(),
        });
        assert_eq!(err.user_message(), "unknown identity");

        let err = CeremonyError::Finish(ServiceError::Denied("signature mismatch".to_string()));
        assert_eq!(err.user_message(), "signature mismatch");
    }

    #[test]
    fn test_error_log() {
        // This test just ensures the log method returns self
        let err = CeremonyError::Validation("test error".to_string());
        let logged_err = err.log();

        if let CeremonyError::Validation(msg) = logged_err {
            assert_eq!(msg, "test error");
        } else {
            panic!("Wrong error type after logging");
        }
    }
}
