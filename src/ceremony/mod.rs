mod errors;
mod orchestrator;
mod types;

pub use errors::CeremonyError;
pub use orchestrator::CeremonyOrchestrator;
pub use types::{CeremonyKind, CeremonyResponse, CeremonyStage, ChallengeOptions, Verdict};
