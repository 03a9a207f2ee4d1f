//! Route admission policy (compiled from config).
//!
//! Compiles the declarative route config into immutable rules the gate's
//! callers use to assemble admission inputs at request time.

pub mod rules;

pub use rules::{RouteRule, RouteTable};
