//! Decoded identity claims produced by the external token verifier.

use serde::{Deserialize, Serialize};

/// Claim set decoded from a verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    /// When the token was issued, epoch seconds. Must come from the same
    /// time authority as the gate's clock to avoid skew-induced rejections.
    pub issued_at_epoch_secs: i64,
    /// Authorized access tier, 1..=5.
    pub privilege_level: u8,
}
