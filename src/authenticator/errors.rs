use thiserror::Error;

/// Failure modes of the local authenticator capability.
///
/// These are capability-defined: the platform reports them, this crate only
/// classifies them. None of them involve a network round-trip, which is what
/// distinguishes a ceremony failure from a verification-service failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthenticatorError {
    /// The user dismissed the platform prompt
    #[error("The operation was cancelled by the user")]
    Cancelled,

    /// The platform gave up waiting for user interaction
    #[error("The operation timed out")]
    Timeout,

    /// No compatible authenticator is available on this device
    #[error("No compatible authenticator is available")]
    Unavailable,

    /// Any other platform-reported failure
    #[error("Authenticator failure: {0}")]
    Platform(String),
}
