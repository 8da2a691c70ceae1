//! Last-write-wins status channel between the orchestrator and a
//! presentation layer.
//!
//! Message formatting lives here; the orchestrator only emits typed stage
//! and outcome calls. The reporter never influences control flow and has no
//! failure modes.

use std::sync::{Arc, Mutex};

use crate::ceremony::{CeremonyError, CeremonyKind, CeremonyStage};

/// One reported status line, as the presentation layer should display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

/// Holds the latest human-readable ceremony status.
///
/// Cloning yields another handle on the same state, so a caller can keep one
/// end for display while the orchestrator writes to the other. With
/// concurrent invocations sharing one reporter the last writer wins; a
/// caller that needs per-invocation displays hands each orchestrator its own
/// reporter.
#[derive(Debug, Clone, Default)]
pub struct StatusReporter {
    inner: Arc<Mutex<Option<StatusLine>>>,
}

impl StatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status line, replacing whatever was there before.
    pub fn report(&self, message: impl Into<String>, is_error: bool) {
        let line = StatusLine {
            message: message.into(),
            is_error,
        };
        tracing::debug!("Status: {:?}", line);
        // A poisoned lock only means a panicking writer left a stale status
        // behind; display state is not worth propagating that.
        let mut slot = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(line);
    }

    /// The most recently reported status line, if any ceremony has run.
    pub fn last(&self) -> Option<StatusLine> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub(crate) fn stage(&self, kind: CeremonyKind, stage: CeremonyStage) {
        let message = match stage {
            CeremonyStage::Starting => format!("Starting {kind}..."),
            CeremonyStage::AwaitingAuthenticator => "Waiting for your authenticator...".to_string(),
            CeremonyStage::Finishing => format!("Finishing {kind}..."),
            // Idle and the terminal stages have no transition message of
            // their own; terminal outcomes go through succeeded/failed.
            _ => return,
        };
        self.report(message, false);
    }

    pub(crate) fn succeeded(&self, kind: CeremonyKind) {
        let message = match kind {
            CeremonyKind::Registration => "Registration succeeded",
            CeremonyKind::Login => "Login succeeded",
        };
        self.report(message, false);
    }

    pub(crate) fn failed(&self, err: &CeremonyError) {
        self.report(format!("Error: {}", err.user_message()), true);
    }
}
