//! Shared error type across reqgate crates.
//!
//! Note the split: `ReqGateError` is the error surface of configuration and
//! collaborators (token verifier, route compile). The gate itself never
//! returns it to callers — admission outcomes are always `Verdict` values.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ReqGateError>;

/// Unified error type used by core and engine.
#[derive(Debug, Error)]
pub enum ReqGateError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("invalid token")]
    InvalidToken,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
