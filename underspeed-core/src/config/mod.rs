//! Configuration types
//!
//! All relay configuration is fixed at build time. The firmware's build
//! script deserializes `relay.toml` into these types (with the `serde`
//! feature), validates it and bakes the result in as a constant.

pub mod types;

pub use types::*;
