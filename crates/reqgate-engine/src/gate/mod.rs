//! Admission gate (decision function).
//!
//! Evaluates method match, access policy, and required fields for one call
//! and returns a fixed-taxonomy verdict.

pub mod engine;

pub use engine::AdmissionGate;
