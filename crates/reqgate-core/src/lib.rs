//! reqgate core: request-shape value types, the verdict taxonomy, and error types.
//!
//! This crate defines the admission contracts shared by the engine and any
//! embedding HTTP layer. It intentionally carries no runtime dependencies so
//! it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ReqGateError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod identity;
pub mod request;
pub mod verdict;

/// Shared result type.
pub use error::{ReqGateError, Result};
pub use identity::DecodedIdentity;
pub use request::{AccessSpec, FieldRequirement, HttpMethod, MethodSpec, SuppliedField};
pub use verdict::Verdict;
