//! Admission verdicts (stable API).
//!
//! Every outcome of the gate is one row of a fixed taxonomy. Consumers key on
//! `(status, subcode)`; `description` is display-only text and must never be
//! pattern-matched. No `(status, subcode)` pair outside the constructors
//! below is ever produced.

use serde::Serialize;

/// Fixed tag identifying the admission gate in every verdict.
pub const GATE_CODE: &str = "reqgate";

/// Outcome of one admission evaluation.
///
/// `(status, subcode)` pairs:
///
/// | status | subcode | meaning |
/// |---|---|---|
/// | 201 | 0 | accepted |
/// | 400 | 1 | observed method != expected method |
/// | 400 | 2 | private API, token missing |
/// | 400 | 3 | token failed external verification |
/// | 400 | 4 | token stale beyond allowed age |
/// | 400 | 5 | required parameter missing/absent |
/// | 400 | 6 | required body field missing/absent |
/// | 401 | 0 | privilege level not in allowed set |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// HTTP-style status code.
    pub status: u16,
    /// Fixed gate tag (always [`GATE_CODE`]).
    pub code: &'static str,
    /// Discriminator within `status`.
    pub subcode: u8,
    /// Human-readable text. Display-only.
    pub description: String,
}

impl Verdict {
    fn new(status: u16, subcode: u8, description: String) -> Self {
        Self {
            status,
            code: GATE_CODE,
            subcode,
            description,
        }
    }

    /// (201, 0) — all applicable checks passed.
    pub fn accepted() -> Self {
        Self::new(201, 0, "accepted".into())
    }

    /// (400, 1) — observed method does not equal the expected method.
    pub fn method_mismatch(expected: &str, observed: &str) -> Self {
        Self::new(
            400,
            1,
            format!("method mismatch: expected {expected}, observed {observed}"),
        )
    }

    /// (400, 2) — private API called without a token.
    pub fn missing_token() -> Self {
        Self::new(400, 2, "missing token".into())
    }

    /// (400, 3) — the external verifier rejected the token.
    pub fn invalid_token() -> Self {
        Self::new(400, 3, "invalid token".into())
    }

    /// (400, 4) — token older than the allowed age. `over_secs` is how far
    /// past the limit the token is.
    pub fn token_expired(over_secs: i64) -> Self {
        Self::new(400, 4, format!("token expired: {over_secs} seconds over allowed age"))
    }

    /// (401, 0) — token valid and fresh, but the privilege level is not in
    /// the allowed set. The only 401 in the taxonomy.
    pub fn insufficient_level(observed: u8, allowed: &[u8]) -> Self {
        Self::new(
            401,
            0,
            format!("insufficient privilege level: {observed} not in {allowed:?}"),
        )
    }

    /// (400, 5) — a required query/path parameter is missing or null.
    pub fn unsatisfied_params() -> Self {
        Self::new(400, 5, "parameters do not satisfy API-defined parameters".into())
    }

    /// (400, 6) — a required body field is missing or null.
    pub fn unsatisfied_body() -> Self {
        Self::new(400, 6, "body does not satisfy API-defined body".into())
    }

    /// Stable machine-readable key.
    pub fn key(&self) -> (u16, u8) {
        (self.status, self.subcode)
    }

    /// Whether the call was admitted.
    pub fn is_accepted(&self) -> bool {
        self.key() == (201, 0)
    }
}
