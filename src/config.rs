//! Central configuration for the passkey-ceremony crate

use std::sync::LazyLock;
use url::Url;

/// Base URL of the credential-verification service
///
/// All start/finish endpoints are resolved against this origin.
/// Default: "http://localhost:5000"
pub static CEREMONY_SERVER_ORIGIN: LazyLock<Url> = LazyLock::new(|| {
    let origin = std::env::var("CEREMONY_SERVER_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());
    Url::parse(&origin).expect("CEREMONY_SERVER_ORIGIN must be a valid URL")
});

/// Route prefix under which the verification service mounts its
/// authentication endpoints
///
/// Default: "/auth"
pub static CEREMONY_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CEREMONY_ROUTE_PREFIX").unwrap_or_else(|_| "/auth".to_string())
});
