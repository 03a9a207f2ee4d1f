//! Top-level facade crate for reqgate.
//!
//! Re-exports core types and the engine library so users can depend on a single crate.

pub mod core {
    pub use reqgate_core::*;
}

pub mod engine {
    pub use reqgate_engine::*;
}
