//! reqgate engine library entry.
//!
//! This crate wires the admission gate, its collaborator traits (token
//! verifier, clock), the route-policy config layer, and verdict metrics into
//! a cohesive stack. It is intended to be embedded by an HTTP-handling layer
//! and by integration tests.

pub mod clock;
pub mod config;
pub mod gate;
pub mod identity;
pub mod obs;
pub mod policy;

pub use clock::{Clock, SystemClock};
pub use gate::AdmissionGate;
pub use identity::TokenVerifier;
