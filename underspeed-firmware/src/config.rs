//! Build-time relay configuration
//!
//! `build.rs` validates `relay.toml` and renders it into `RELAY_CONFIG`.

use underspeed_core::config::{CalibrationBounds, PulseThresholds, RelayConfig};

include!(concat!(env!("OUT_DIR"), "/relay_config.rs"));
