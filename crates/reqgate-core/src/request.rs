//! Request-shape value types consumed by the gate.
//!
//! Everything here is an immutable, request-scoped value object: constructed
//! fresh per call, consumed once, discarded. The access and field-requirement
//! shapes are genuine sum types so "required but fields absent" is
//! unrepresentable.

use serde::Deserialize;
use serde_json::Value;

/// HTTP methods the gate knows how to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Canonical wire form. Method comparison is exact string equality
    /// against this, case-sensitive.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Expected vs. observed method for one call.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    pub expected: HttpMethod,
    /// Raw observed method string. Not normalized: `"get"` does not match `GET`.
    pub observed: String,
}

impl MethodSpec {
    pub fn new(expected: HttpMethod, observed: impl Into<String>) -> Self {
        Self {
            expected,
            observed: observed.into(),
        }
    }

    /// Exact, case-sensitive match.
    pub fn matches(&self) -> bool {
        self.observed == self.expected.as_str()
    }
}

/// Access policy for one call.
#[derive(Debug, Clone)]
pub enum AccessSpec {
    /// No identity work at all.
    Public,
    /// Token-gated: the token must verify, be fresh, and carry an allowed level.
    Private {
        /// Maximum allowed token age in seconds. Inclusive: a token exactly
        /// this old is still fresh.
        max_age_secs: u64,
        /// Privilege levels admitted on this call, drawn from 1..=5.
        allowed_levels: Vec<u8>,
        /// Bearer token as presented, if any.
        token: Option<String>,
    },
}

/// One supplied query/path parameter or body field.
#[derive(Debug, Clone, Deserialize)]
pub struct SuppliedField {
    pub name: String,
    /// `Value::Null` counts as absent; empty string and zero count as present.
    #[serde(default)]
    pub value: Value,
}

impl SuppliedField {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Field requirement for query/path parameters or for the body.
#[derive(Debug, Clone)]
pub enum FieldRequirement {
    NotRequired,
    Required {
        /// Names that must be present, in check order. First miss wins.
        expected: Vec<String>,
        /// Fields as supplied by the caller.
        supplied: Vec<SuppliedField>,
    },
}

impl FieldRequirement {
    /// First expected name that is missing or supplied as null, in
    /// `expected` order. `None` means the requirement is satisfied.
    ///
    /// "No entry with that name" and "entry present with a null value" are
    /// deliberately the same condition.
    pub fn first_unsatisfied(&self) -> Option<&str> {
        match self {
            FieldRequirement::NotRequired => None,
            FieldRequirement::Required { expected, supplied } => {
                expected.iter().map(String::as_str).find(|name| {
                    !supplied
                        .iter()
                        .any(|f| f.name == *name && !f.value.is_null())
                })
            }
        }
    }
}
