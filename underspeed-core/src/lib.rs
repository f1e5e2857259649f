//! Board-agnostic core logic for the underspeed relay firmware
//!
//! This crate contains all monitoring logic that does not depend on a
//! specific microcontroller:
//!
//! - Calibration curves (potentiometer sample to tick count)
//! - Startup sequencer
//! - Tick scheduler (arming countdown, hysteresis pulse tracking, timeout)
//! - Fail-stop fault reporter and optional self-checks
//! - Configuration type definitions
//!
//! Hardware access goes through the `underspeed-hal` traits.

#![no_std]
#![deny(unsafe_code)]

pub mod calibration;
pub mod config;
pub mod device;
pub mod outputs;
pub mod safety;
pub mod scheduler;
pub mod startup;

#[cfg(test)]
mod testing;

pub use config::RelayConfig;
pub use device::UnderspeedRelay;
pub use outputs::Outputs;
pub use safety::{FaultKind, FaultReporter};
pub use startup::{start, StartupFault};
