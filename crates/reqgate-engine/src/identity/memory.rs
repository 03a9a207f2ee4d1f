use async_trait::async_trait;
use dashmap::DashMap;

use reqgate_core::{DecodedIdentity, ReqGateError, Result};

use super::TokenVerifier;

/// In-memory verifier for local runs and tests: a token is valid iff it was
/// inserted, and decodes to the claims stored with it.
#[derive(Default)]
pub struct MemoryTokenVerifier {
    tokens: DashMap<String, DecodedIdentity>,
}

impl MemoryTokenVerifier {
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    pub fn insert(&self, token: impl Into<String>, identity: DecodedIdentity) {
        self.tokens.insert(token.into(), identity);
    }
}

#[async_trait]
impl TokenVerifier for MemoryTokenVerifier {
    async fn verify(&self, token: &str) -> Result<DecodedIdentity> {
        self.tokens
            .get(token)
            .map(|e| *e.value())
            .ok_or(ReqGateError::InvalidToken)
    }
}
