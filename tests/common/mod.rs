//! Scripted collaborator doubles shared by the integration tests.
//!
//! Each double returns pre-programmed results and records what it was asked,
//! so scenarios can assert both the verdict and the exact traffic that did
//! (or did not) reach each collaborator.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use passkey_ceremony::{
    Authenticator, AuthenticatorError, CeremonyKind, CeremonyResponse, ChallengeOptions,
    FinishResponse, ServiceError, VerificationService,
};

#[derive(Default)]
pub struct ServiceLog {
    pub start_labels: Vec<String>,
    pub finish_bodies: Vec<Value>,
}

pub struct ScriptedService {
    start: Result<Value, ServiceError>,
    finish: Result<FinishResponse, ServiceError>,
    pub log: Arc<Mutex<ServiceLog>>,
}

impl ScriptedService {
    pub fn new(start: Result<Value, ServiceError>, finish: Result<FinishResponse, ServiceError>) -> Self {
        Self {
            start,
            finish,
            log: Arc::new(Mutex::new(ServiceLog::default())),
        }
    }

    pub fn verifying(challenge: Value) -> Self {
        Self::new(
            Ok(challenge),
            Ok(FinishResponse {
                verified: true,
                error: None,
            }),
        )
    }
}

#[async_trait]
impl VerificationService for ScriptedService {
    async fn start(
        &self,
        _kind: CeremonyKind,
        identity_label: &str,
    ) -> Result<ChallengeOptions, ServiceError> {
        self.log
            .lock()
            .expect("test log lock")
            .start_labels
            .push(identity_label.to_string());
        self.start.clone().map(ChallengeOptions)
    }

    async fn finish(
        &self,
        _kind: CeremonyKind,
        response: &CeremonyResponse,
    ) -> Result<FinishResponse, ServiceError> {
        self.log
            .lock()
            .expect("test log lock")
            .finish_bodies
            .push(response.0.clone());
        self.finish.clone()
    }
}

#[derive(Default)]
pub struct AuthenticatorLog {
    pub created_with: Vec<Value>,
    pub asserted_with: Vec<Value>,
}

pub struct ScriptedAuthenticator {
    result: Result<Value, AuthenticatorError>,
    pub log: Arc<Mutex<AuthenticatorLog>>,
}

impl ScriptedAuthenticator {
    pub fn signing(response: Value) -> Self {
        Self {
            result: Ok(response),
            log: Arc::new(Mutex::new(AuthenticatorLog::default())),
        }
    }

    pub fn failing(err: AuthenticatorError) -> Self {
        Self {
            result: Err(err),
            log: Arc::new(Mutex::new(AuthenticatorLog::default())),
        }
    }
}

#[async_trait]
impl Authenticator for ScriptedAuthenticator {
    async fn create_credential(
        &self,
        options: &ChallengeOptions,
    ) -> Result<CeremonyResponse, AuthenticatorError> {
        self.log
            .lock()
            .expect("test log lock")
            .created_with
            .push(options.0.clone());
        self.result.clone().map(CeremonyResponse)
    }

    async fn get_assertion(
        &self,
        options: &ChallengeOptions,
    ) -> Result<CeremonyResponse, AuthenticatorError> {
        self.log
            .lock()
            .expect("test log lock")
            .asserted_with
            .push(options.0.clone());
        self.result.clone().map(CeremonyResponse)
    }
}
