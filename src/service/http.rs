use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use url::Url;

use crate::ceremony::{CeremonyKind, CeremonyResponse, ChallengeOptions};
use crate::config::{CEREMONY_ROUTE_PREFIX, CEREMONY_SERVER_ORIGIN};

use super::errors::ServiceError;
use super::traits::VerificationService;
use super::types::{FinishResponse, StartRequest};

/// Fallback message when a non-success response carries no usable `error`
/// field in its body.
const REJECTION_FALLBACK: &str = "verification service rejected the request";

pub(crate) fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(1)
        .build()
        .expect("Failed to create reqwest client")
}

/// [`VerificationService`] implementation over JSON/HTTP.
///
/// Endpoints are `{origin}{prefix}/register/start`, `/register/finish`,
/// `/login/start` and `/login/finish`, matching the verification service's
/// route layout.
pub struct HttpVerificationService {
    client: reqwest::Client,
    origin: Url,
    prefix: String,
}

impl HttpVerificationService {
    /// Build a service adapter against an explicit origin, with the route
    /// prefix taken from configuration.
    pub fn new(origin: Url) -> Self {
        Self {
            client: get_client(),
            origin,
            prefix: CEREMONY_ROUTE_PREFIX.clone(),
        }
    }

    /// Build a service adapter from `CEREMONY_SERVER_ORIGIN` and
    /// `CEREMONY_ROUTE_PREFIX`.
    pub fn from_env() -> Self {
        Self::new(CEREMONY_SERVER_ORIGIN.clone())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.origin
            .join(&format!("{}{}", self.prefix, path))
            .map_err(|e| ServiceError::Transport(format!("Invalid endpoint URL: {e}")))
    }

    async fn post_json(&self, url: Url, body: &Value) -> Result<(StatusCode, String), ServiceError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        tracing::debug!("Response ({}): {:#?}", status, response_body);
        Ok((status, response_body))
    }
}

/// Classify a non-success response, pulling the service's own `error` text
/// out of the body when one is present.
fn rejection(status: StatusCode, body: &str) -> ServiceError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| REJECTION_FALLBACK.to_string());

    ServiceError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl VerificationService for HttpVerificationService {
    async fn start(
        &self,
        kind: CeremonyKind,
        identity_label: &str,
    ) -> Result<ChallengeOptions, ServiceError> {
        let url = self.endpoint(kind.start_path())?;
        let request = StartRequest {
            identity_label: identity_label.to_string(),
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| ServiceError::Serde(e.to_string()))?;

        let (status, response_body) = self.post_json(url, &body).await?;
        if status != StatusCode::OK {
            return Err(rejection(status, &response_body));
        }

        let options: ChallengeOptions = serde_json::from_str(&response_body).map_err(|e| {
            ServiceError::Serde(format!("Failed to deserialize challenge options: {e}"))
        })?;
        Ok(options)
    }

    async fn finish(
        &self,
        kind: CeremonyKind,
        response: &CeremonyResponse,
    ) -> Result<FinishResponse, ServiceError> {
        let url = self.endpoint(kind.finish_path())?;

        let (status, response_body) = self.post_json(url, &response.0).await?;
        if status != StatusCode::OK {
            return Err(rejection(status, &response_body));
        }

        let verdict: FinishResponse = serde_json::from_str(&response_body).map_err(|e| {
            ServiceError::Serde(format!("Failed to deserialize finish response: {e}"))
        })?;
        Ok(verdict)
    }
}
