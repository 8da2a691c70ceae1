mod errors;
mod http;
mod traits;
mod types;

pub use errors::ServiceError;
pub use self::http::HttpVerificationService;
pub use traits::VerificationService;
pub use types::{FinishResponse, StartRequest};
