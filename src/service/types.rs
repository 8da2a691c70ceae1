use serde::{Deserialize, Serialize};

/// Request body for both start endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    #[serde(rename = "identityLabel")]
    pub identity_label: String,
}

/// Response body of both finish endpoints.
///
/// A transport-success response can still carry `verified: false`; callers
/// must check the flag and never infer success from the status code alone.
/// Missing fields are treated as a negative verdict rather than a parse
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishResponse {
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
