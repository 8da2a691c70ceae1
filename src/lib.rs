//! passkey-ceremony - Client-side passkey ceremony orchestration
//!
//! This crate drives the two-phase challenge-response ceremonies of passkey
//! authentication (registration and login) from the client side: it requests
//! a challenge from a remote verification service, hands it to the local
//! authenticator capability, and submits the signed response for
//! verification. Both collaborators are injected behind traits; the crate
//! itself owns only the sequencing, failure classification, and status
//! reporting of the exchange.

mod authenticator;
mod ceremony;
mod config;
mod service;
mod status;

// Re-export the main ceremony components
pub use ceremony::{
    CeremonyError, CeremonyKind, CeremonyOrchestrator, CeremonyResponse, CeremonyStage,
    ChallengeOptions, Verdict,
};

pub use authenticator::{Authenticator, AuthenticatorError};

pub use service::{
    FinishResponse, HttpVerificationService, ServiceError, StartRequest, VerificationService,
};

pub use status::{StatusLine, StatusReporter};

// Re-export the configuration statics consumed by `from_env` wiring
pub use config::{CEREMONY_ROUTE_PREFIX, CEREMONY_SERVER_ORIGIN};
