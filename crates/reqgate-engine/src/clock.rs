//! Trusted clock capability.
//!
//! Injected rather than ambient so tests can pin time. Must be the same time
//! authority that stamps `issued_at_epoch_secs` into tokens.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current server time in epoch seconds.
pub trait Clock: Send + Sync {
    fn now_epoch_secs(&self) -> i64;
}

/// Wall-clock implementation.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_secs(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            // Pre-epoch system time. Freshness math still holds with a
            // negative now.
            Err(e) => -(e.duration().as_secs() as i64),
        }
    }
}
