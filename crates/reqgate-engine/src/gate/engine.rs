use std::sync::Arc;

use reqgate_core::request::{AccessSpec, FieldRequirement, MethodSpec};
use reqgate_core::verdict::Verdict;

use crate::clock::Clock;
use crate::identity::TokenVerifier;
use crate::obs::metrics::GateMetrics;

/// The admission gate.
///
/// One instance is shared across all in-flight calls (stateless, no locking);
/// each `evaluate` is an independent decision. Collaborators are injected so
/// tests can pin the clock and fake the verifier.
pub struct AdmissionGate {
    verifier: Arc<dyn TokenVerifier>,
    clock: Arc<dyn Clock>,
    metrics: Option<Arc<GateMetrics>>,
}

impl AdmissionGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            verifier,
            clock,
            metrics: None,
        }
    }

    /// Attach a verdict counter. Recording happens once per evaluation, at
    /// the boundary, never inside the checks.
    pub fn with_metrics(mut self, metrics: Arc<GateMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Decide whether one call is admitted.
    ///
    /// Checks run in a fixed order and short-circuit on the first rejection:
    /// method, then (private only) token presence / verification / freshness /
    /// privilege level, then required params, then required body. Every
    /// failure path is a [`Verdict`]; nothing propagates as an error. The
    /// only suspension point is the verifier call, reached only on the
    /// private path and only after token presence is confirmed.
    pub async fn evaluate(
        &self,
        method: &MethodSpec,
        access: &AccessSpec,
        params: &FieldRequirement,
        body: &FieldRequirement,
    ) -> Verdict {
        // Method first, before any identity work, so unauthenticated method
        // probing never reaches the verifier.
        if !method.matches() {
            return self.finish(Verdict::method_mismatch(
                method.expected.as_str(),
                &method.observed,
            ));
        }

        if let AccessSpec::Private {
            max_age_secs,
            allowed_levels,
            token,
        } = access
        {
            let token = match token {
                Some(t) => t.as_str(),
                None => return self.finish(Verdict::missing_token()),
            };

            // Sole point where a collaborator error is caught and translated.
            let identity = match self.verifier.verify(token).await {
                Ok(id) => id,
                Err(_) => return self.finish(Verdict::invalid_token()),
            };

            // Freshness strictly after successful decoding: an invalid token
            // must not leak expiry information. Boundary is inclusive at
            // elapsed == max_age.
            let max_age = i64::try_from(*max_age_secs).unwrap_or(i64::MAX);
            let elapsed = self.clock.now_epoch_secs() - identity.issued_at_epoch_secs;
            if elapsed > max_age {
                return self.finish(Verdict::token_expired(elapsed - max_age));
            }

            if !allowed_levels.contains(&identity.privilege_level) {
                return self.finish(Verdict::insufficient_level(
                    identity.privilege_level,
                    allowed_levels,
                ));
            }
        }

        if params.first_unsatisfied().is_some() {
            return self.finish(Verdict::unsatisfied_params());
        }
        if body.first_unsatisfied().is_some() {
            return self.finish(Verdict::unsatisfied_body());
        }

        self.finish(Verdict::accepted())
    }

    fn finish(&self, verdict: Verdict) -> Verdict {
        let (status, subcode) = verdict.key();
        tracing::debug!(status, subcode, "admission verdict");
        if let Some(m) = &self.metrics {
            m.record(&verdict);
        }
        verdict
    }
}
