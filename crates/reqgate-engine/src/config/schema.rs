use serde::Deserialize;

use reqgate_core::request::HttpMethod;
use reqgate_core::{ReqGateError, Result};

/// Privilege levels are drawn from this closed range.
pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 5;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesConfig {
    pub version: u32,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

impl RoutesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ReqGateError::UnsupportedVersion);
        }
        if self.routes.is_empty() {
            return Err(ReqGateError::BadConfig("routes must not be empty".into()));
        }

        for route in &self.routes {
            route.validate()?;
        }

        let mut names: Vec<&str> = self.routes.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.routes.len() {
            return Err(ReqGateError::BadConfig("route names must be unique".into()));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    pub name: String,
    pub method: HttpMethod,
    pub access: AccessConfig,

    #[serde(default)]
    pub required_params: Vec<String>,
    #[serde(default)]
    pub required_body: Vec<String>,
}

impl RouteConfig {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ReqGateError::BadConfig("route name must not be empty".into()));
        }
        self.access.validate(&self.name)?;

        for name in self.required_params.iter().chain(&self.required_body) {
            if name.is_empty() {
                return Err(ReqGateError::BadConfig(format!(
                    "route {}: required field names must not be empty",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Access section as written in config. Deliberately a flat struct rather
/// than a tagged enum so unknown keys stay deniable; `validate` enforces the
/// kind/field coherence and the compile step produces the real sum type.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessConfig {
    pub kind: AccessKind,

    #[serde(default)]
    pub max_age_secs: Option<u64>,
    #[serde(default)]
    pub allowed_levels: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    Public,
    Private,
}

impl AccessConfig {
    fn validate(&self, route: &str) -> Result<()> {
        match self.kind {
            AccessKind::Public => {
                if self.max_age_secs.is_some() || self.allowed_levels.is_some() {
                    return Err(ReqGateError::BadConfig(format!(
                        "route {route}: public access must not set max_age_secs or allowed_levels"
                    )));
                }
            }
            AccessKind::Private => {
                if self.max_age_secs.is_none() {
                    return Err(ReqGateError::BadConfig(format!(
                        "route {route}: private access requires max_age_secs"
                    )));
                }
                let levels = self.allowed_levels.as_deref().unwrap_or(&[]);
                if levels.is_empty() {
                    return Err(ReqGateError::BadConfig(format!(
                        "route {route}: private access requires non-empty allowed_levels"
                    )));
                }
                for &l in levels {
                    if !(LEVEL_MIN..=LEVEL_MAX).contains(&l) {
                        return Err(ReqGateError::BadConfig(format!(
                            "route {route}: allowed level {l} outside {LEVEL_MIN}..={LEVEL_MAX}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
