use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Which of the two symmetric ceremonies is being run.
///
/// Registration provisions a new credential with the verification service;
/// login proves possession of an existing one. The two pipelines share the
/// same three-stage shape and differ only in endpoints and in which
/// authenticator operation they invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeremonyKind {
    Registration,
    Login,
}

impl CeremonyKind {
    /// Path of the start endpoint, relative to the route prefix.
    pub(crate) fn start_path(&self) -> &'static str {
        match self {
            Self::Registration => "/register/start",
            Self::Login => "/login/start",
        }
    }

    /// Path of the finish endpoint, relative to the route prefix.
    pub(crate) fn finish_path(&self) -> &'static str {
        match self {
            Self::Registration => "/register/finish",
            Self::Login => "/login/finish",
        }
    }
}

impl fmt::Display for CeremonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration => write!(f, "registration"),
            Self::Login => write!(f, "login"),
        }
    }
}

/// Stage of one ceremony invocation.
///
/// Each invocation owns exactly one of these, transitioning
/// `Idle -> Starting -> AwaitingAuthenticator -> Finishing` and terminating
/// in `Succeeded` or `Failed`. Failure is reachable from any of the three
/// active stages; there are no retries and no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyStage {
    Idle,
    Starting,
    AwaitingAuthenticator,
    Finishing,
    Succeeded,
    Failed,
}

impl fmt::Display for CeremonyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Starting => "starting",
            Self::AwaitingAuthenticator => "awaiting_authenticator",
            Self::Finishing => "finishing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Opaque server-issued parameters for the authenticator step.
///
/// The verification service defines the structure; this crate passes it
/// through untouched and never reuses a value across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeOptions(pub Value);

/// Opaque authenticator-produced signed artifact, submitted back to the
/// verification service's finish endpoint as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CeremonyResponse(pub Value);

/// Terminal outcome of one ceremony invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    pub(crate) fn success() -> Self {
        Self {
            verified: true,
            error: None,
        }
    }

    pub(crate) fn failure(message: String) -> Self {
        Self {
            verified: false,
            error: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_paths() {
        assert_eq!(CeremonyKind::Registration.start_path(), "/register/start");
        assert_eq!(CeremonyKind::Registration.finish_path(), "/register/finish");
        assert_eq!(CeremonyKind::Login.start_path(), "/login/start");
        assert_eq!(CeremonyKind::Login.finish_path(), "/login/finish");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CeremonyKind::Registration.to_string(), "registration");
        assert_eq!(CeremonyKind::Login.to_string(), "login");
    }

    /// Challenge options round-trip through serde without wrapping
    ///
    /// The newtype is `#[serde(transparent)]`, so the opaque server payload
    /// must serialize to exactly the JSON it was parsed from.
    #[test]
    fn test_challenge_options_are_transparent() {
        let raw = json!({"challenge": "c1", "rp": {"id": "localhost"}});
        let options: ChallengeOptions =
            serde_json::from_value(raw.clone()).expect("opaque JSON should always deserialize");
        let back = serde_json::to_value(&options).expect("serialization should not fail");
        assert_eq!(back, raw, "opaque payload must pass through unchanged");
    }

    #[test]
    fn test_verdict_success_omits_error_field() {
        let verdict = Verdict::success();
        let value = serde_json::to_value(&verdict).expect("serialization should not fail");
        assert_eq!(value, json!({"verified": true}));
    }

    #[test]
    fn test_verdict_failure_carries_message() {
        let verdict = Verdict::failure("unknown identity".to_string());
        assert!(!verdict.verified);
        assert_eq!(verdict.error.as_deref(), Some("unknown identity"));
    }
}
