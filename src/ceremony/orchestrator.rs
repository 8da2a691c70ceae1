use crate::authenticator::Authenticator;
use crate::service::{ServiceError, VerificationService};
use crate::status::StatusReporter;

use super::errors::CeremonyError;
use super::types::{CeremonyKind, CeremonyResponse, CeremonyStage, ChallengeOptions, Verdict};

/// Fallback verdict text when the service answers `verified: false` without
/// an `error` field.
const VERIFICATION_FALLBACK: &str = "verification failed";

/// Drives one ceremony (registration or login) through its three stages.
///
/// Both collaborators are injected: the verification service that issues
/// challenges and verifies responses, and the local authenticator capability
/// that signs them. Stages run strictly sequentially; a failure at any stage
/// terminates the invocation with no retry, and a fresh [`run_ceremony`]
/// call is the only recovery path. Invocations are independent, so a caller
/// may run several concurrently; this type does not serialize across them.
///
/// [`run_ceremony`]: CeremonyOrchestrator::run_ceremony
pub struct CeremonyOrchestrator<S, A> {
    service: S,
    authenticator: A,
    reporter: StatusReporter,
}

impl<S: VerificationService, A: Authenticator> CeremonyOrchestrator<S, A> {
    pub fn new(service: S, authenticator: A) -> Self {
        Self::with_reporter(service, authenticator, StatusReporter::new())
    }

    /// Wire an existing reporter, e.g. one whose read end the presentation
    /// layer already holds.
    pub fn with_reporter(service: S, authenticator: A, reporter: StatusReporter) -> Self {
        Self {
            service,
            authenticator,
            reporter,
        }
    }

    /// A read handle on this orchestrator's status channel.
    pub fn reporter(&self) -> StatusReporter {
        self.reporter.clone()
    }

    /// Run one complete ceremony and report the outcome.
    ///
    /// Never panics or propagates an error across the ceremony boundary:
    /// every failure is logged, reported through the status channel, and
    /// folded into the returned [`Verdict`].
    pub async fn run_ceremony(&self, kind: CeremonyKind, identity_label: &str) -> Verdict {
        match self.execute(kind, identity_label).await {
            Ok(()) => {
                tracing::debug!("Ceremony {} reached {}", kind, CeremonyStage::Succeeded);
                self.reporter.succeeded(kind);
                Verdict::success()
            }
            Err(err) => {
                tracing::debug!("Ceremony {} reached {}", kind, CeremonyStage::Failed);
                let err = err.log();
                self.reporter.failed(&err);
                Verdict::failure(err.user_message())
            }
        }
    }

    /// Typed driver behind [`run_ceremony`](Self::run_ceremony).
    ///
    /// Exposed so callers and tests can branch on the failure stage instead
    /// of parsing verdict prose. Does not report terminal outcomes to the
    /// status channel; `run_ceremony` owns that.
    pub async fn execute(
        &self,
        kind: CeremonyKind,
        identity_label: &str,
    ) -> Result<(), CeremonyError> {
        // Fail fast on bad input; no network call and no stage transition
        // has happened yet.
        let identity_label = validate_identity_label(identity_label)?;

        let mut stage = CeremonyStage::Idle;

        self.transition(kind, &mut stage, CeremonyStage::Starting);
        let options = self
            .service
            .start(kind, identity_label)
            .await
            .map_err(CeremonyError::Start)?;

        self.transition(kind, &mut stage, CeremonyStage::AwaitingAuthenticator);
        let response = self
            .invoke_authenticator(kind, &options)
            .await
            .map_err(CeremonyError::Ceremony)?;

        self.transition(kind, &mut stage, CeremonyStage::Finishing);
        let finish = self
            .service
            .finish(kind, &response)
            .await
            .map_err(CeremonyError::Finish)?;

        // Transport success alone proves nothing; the semantic flag decides.
        if !finish.verified {
            let message = finish
                .error
                .unwrap_or_else(|| VERIFICATION_FALLBACK.to_string());
            return Err(CeremonyError::Finish(ServiceError::Denied(message)));
        }

        Ok(())
    }

    async fn invoke_authenticator(
        &self,
        kind: CeremonyKind,
        options: &ChallengeOptions,
    ) -> Result<CeremonyResponse, crate::authenticator::AuthenticatorError> {
        match kind {
            CeremonyKind::Registration => self.authenticator.create_credential(options).await,
            CeremonyKind::Login => self.authenticator.get_assertion(options).await,
        }
    }

    fn transition(&self, kind: CeremonyKind, stage: &mut CeremonyStage, next: CeremonyStage) {
        tracing::debug!("Ceremony {} stage: {} -> {}", kind, stage, next);
        *stage = next;
        self.reporter.stage(kind, next);
    }
}

/// Check the identity label precondition, returning the trimmed label.
///
/// Surrounding whitespace is not significant (the presentation layer may
/// hand the raw input field through), so a whitespace-only label is empty.
pub(crate) fn validate_identity_label(identity_label: &str) -> Result<&str, CeremonyError> {
    let trimmed = identity_label.trim();
    if trimmed.is_empty() {
        return Err(CeremonyError::Validation(
            "Identity label must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
