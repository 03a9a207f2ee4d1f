use std::collections::HashMap;
use std::sync::Arc;

use reqgate_core::request::{AccessSpec, FieldRequirement, HttpMethod, MethodSpec, SuppliedField};
use reqgate_core::{ReqGateError, Result};

use crate::config::schema::{AccessKind, RoutesConfig};

/// Compiled access policy for one route. The per-request token is the only
/// piece missing here; it is attached by [`RouteRule::admission`].
#[derive(Debug, Clone)]
enum RouteAccess {
    Public,
    Private {
        max_age_secs: u64,
        allowed_levels: Vec<u8>,
    },
}

/// Compiled admission requirements for one route.
/// Construct once at startup via [`RouteTable::compile`], then share via Arc.
#[derive(Debug)]
pub struct RouteRule {
    pub name: String,
    pub method: HttpMethod,

    access: RouteAccess,
    required_params: Vec<String>,
    required_body: Vec<String>,
}

impl RouteRule {
    /// Assemble the four gate inputs for one observed request.
    ///
    /// Callers hand over the raw observed pieces (method string, optional
    /// bearer token, supplied fields); the rule supplies the expectations.
    pub fn admission(
        &self,
        observed_method: impl Into<String>,
        token: Option<String>,
        params: Vec<SuppliedField>,
        body: Vec<SuppliedField>,
    ) -> (MethodSpec, AccessSpec, FieldRequirement, FieldRequirement) {
        let method = MethodSpec::new(self.method, observed_method);

        let access = match &self.access {
            RouteAccess::Public => AccessSpec::Public,
            RouteAccess::Private {
                max_age_secs,
                allowed_levels,
            } => AccessSpec::Private {
                max_age_secs: *max_age_secs,
                allowed_levels: allowed_levels.clone(),
                token,
            },
        };

        (
            method,
            access,
            requirement(&self.required_params, params),
            requirement(&self.required_body, body),
        )
    }

    pub fn is_private(&self) -> bool {
        matches!(self.access, RouteAccess::Private { .. })
    }
}

fn requirement(expected: &[String], supplied: Vec<SuppliedField>) -> FieldRequirement {
    if expected.is_empty() {
        FieldRequirement::NotRequired
    } else {
        FieldRequirement::Required {
            expected: expected.to_vec(),
            supplied,
        }
    }
}

/// All compiled routes, keyed by name.
pub struct RouteTable {
    rules: HashMap<String, Arc<RouteRule>>,
}

impl RouteTable {
    /// Compile a validated config into immutable rules.
    pub fn compile(cfg: &RoutesConfig) -> Result<Self> {
        let mut rules = HashMap::with_capacity(cfg.routes.len());
        for route in &cfg.routes {
            let access = match route.access.kind {
                AccessKind::Public => RouteAccess::Public,
                AccessKind::Private => {
                    let max_age_secs = route.access.max_age_secs.ok_or_else(|| {
                        ReqGateError::BadConfig(format!(
                            "route {}: private access requires max_age_secs",
                            route.name
                        ))
                    })?;
                    let mut allowed_levels =
                        route.access.allowed_levels.clone().unwrap_or_default();
                    allowed_levels.sort_unstable();
                    allowed_levels.dedup();
                    RouteAccess::Private {
                        max_age_secs,
                        allowed_levels,
                    }
                }
            };

            let rule = Arc::new(RouteRule {
                name: route.name.clone(),
                method: route.method,
                access,
                required_params: route.required_params.clone(),
                required_body: route.required_body.clone(),
            });

            if rules.insert(route.name.clone(), rule).is_some() {
                return Err(ReqGateError::BadConfig(format!(
                    "duplicate route: {}",
                    route.name
                )));
            }
        }
        Ok(Self { rules })
    }

    pub fn get(&self, name: &str) -> Option<Arc<RouteRule>> {
        self.rules.get(name).cloned()
    }

    pub fn route_names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    const CFG: &str = r#"
version: 1
routes:
  - name: "create-order"
    method: POST
    access:
      kind: private
      max_age_secs: 600
      allowed_levels: [4, 3, 4]
    required_params: ["uid"]
    required_body: ["items"]
  - name: "health"
    method: GET
    access:
      kind: public
"#;

    #[test]
    fn compile_and_assemble_inputs() {
        let cfg = config::load_from_str(CFG).unwrap();
        let table = RouteTable::compile(&cfg).unwrap();
        assert_eq!(table.len(), 2);

        let rule = table.get("create-order").unwrap();
        assert!(rule.is_private());

        let (method, access, params, body) =
            rule.admission("POST", Some("tok".into()), vec![], vec![]);
        assert!(method.matches());
        match access {
            AccessSpec::Private {
                max_age_secs,
                allowed_levels,
                token,
            } => {
                assert_eq!(max_age_secs, 600);
                // Sorted, deduped.
                assert_eq!(allowed_levels, vec![3, 4]);
                assert_eq!(token.as_deref(), Some("tok"));
            }
            AccessSpec::Public => panic!("expected private access"),
        }
        assert!(matches!(params, FieldRequirement::Required { .. }));
        assert!(matches!(body, FieldRequirement::Required { .. }));

        let health = table.get("health").unwrap();
        let (_, access, params, body) = health.admission("GET", None, vec![], vec![]);
        assert!(matches!(access, AccessSpec::Public));
        assert!(matches!(params, FieldRequirement::NotRequired));
        assert!(matches!(body, FieldRequirement::NotRequired));
    }

    #[test]
    fn unknown_route_is_none() {
        let cfg = config::load_from_str(CFG).unwrap();
        let table = RouteTable::compile(&cfg).unwrap();
        assert!(table.get("nope").is_none());
    }
}
