//! Route-policy config loader (strict parsing).

pub mod schema;

use std::fs;

use reqgate_core::{ReqGateError, Result};

pub use schema::{AccessConfig, AccessKind, RouteConfig, RoutesConfig};

pub fn load_from_file(path: &str) -> Result<RoutesConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ReqGateError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RoutesConfig> {
    let cfg: RoutesConfig = serde_yaml::from_str(s)
        .map_err(|e| ReqGateError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
