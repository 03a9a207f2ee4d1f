//! Verdict counters for the admission gate.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use reqgate_core::verdict::Verdict;

/// Per-verdict counters. Keys are the taxonomy's `(status, subcode)` pairs,
/// so cardinality is bounded by the taxonomy itself.
#[derive(Default)]
pub struct GateMetrics {
    verdicts: DashMap<(u16, u8), AtomicU64>,
}

impl GateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one verdict.
    pub fn record(&self, verdict: &Verdict) {
        let counter = self
            .verdicts
            .entry(verdict.key())
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Total across all verdicts for a given key.
    pub fn count(&self, status: u16, subcode: u8) -> u64 {
        self.verdicts
            .get(&(status, subcode))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut rows: Vec<((u16, u8), u64)> = self
            .verdicts
            .iter()
            .map(|r| (*r.key(), r.value().load(Ordering::Relaxed)))
            .collect();
        // Deterministic output order.
        rows.sort();

        let mut out = String::new();
        let _ = writeln!(out, "# TYPE reqgate_verdicts_total counter");
        for ((status, subcode), v) in rows {
            let _ = writeln!(
                out,
                "reqgate_verdicts_total{{status=\"{status}\",subcode=\"{subcode}\"}} {v}"
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_render() {
        let m = GateMetrics::new();
        m.record(&Verdict::accepted());
        m.record(&Verdict::accepted());
        m.record(&Verdict::missing_token());

        assert_eq!(m.count(201, 0), 2);
        assert_eq!(m.count(400, 2), 1);
        assert_eq!(m.count(400, 1), 0);

        let text = m.render();
        assert!(text.contains("reqgate_verdicts_total{status=\"201\",subcode=\"0\"} 2"));
        assert!(text.contains("reqgate_verdicts_total{status=\"400\",subcode=\"2\"} 1"));
    }
}
