use thiserror::Error;

/// Errors produced by the verification service adapter.
///
/// These cover everything that can go wrong on one round-trip to the
/// service: the request not getting through, the service refusing it, the
/// service answering but withholding verification, and an answer this
/// client cannot parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status; `message` is the
    /// `error` field of the response body when one was present
    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Transport-level success but the service declined to verify
    /// (`verified: false` in the finish response)
    #[error("Not verified: {0}")]
    Denied(String),

    /// Error converting a response body between data formats using Serde
    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),
}

impl ServiceError {
    /// The bare collaborator-supplied message, without the variant prefix.
    ///
    /// Used when building the outward-facing `Verdict`, which surfaces the
    /// service's own wording (e.g. "unknown identity") rather than this
    /// crate's Display form.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(msg) | Self::Denied(msg) | Self::Serde(msg) => msg,
            Self::Rejected { message, .. } => message,
        }
    }
}
