//! Token verification capability.
//!
//! The gate never inspects tokens itself; it hands the opaque string to a
//! `TokenVerifier` and consumes the decoded claims. Freshness is recomputed
//! by the gate from `issued_at_epoch_secs` against its own policy, so the
//! verifier's notion of expiry is irrelevant here.

pub mod memory;

use async_trait::async_trait;

use reqgate_core::{DecodedIdentity, Result};

/// External token verification service.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify an opaque bearer token and return its decoded claims.
    ///
    /// May suspend (network round trip). Fails with
    /// [`ReqGateError::InvalidToken`](reqgate_core::ReqGateError::InvalidToken)
    /// on any malformed or unverifiable token.
    async fn verify(&self, token: &str) -> Result<DecodedIdentity>;
}

pub use memory::MemoryTokenVerifier;
