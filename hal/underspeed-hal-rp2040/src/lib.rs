//! RP2040-specific HAL for the underspeed relay firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `underspeed-hal` traits:
//!
//! - Relay and status outputs on embassy-rp GPIO
//! - Multiplexed analog inputs on the RP2040 ADC, reduced to 8 bits
//! - Tick source on an embassy-time ticker

#![no_std]

pub mod adc;
pub mod gpio;
pub mod timer;

pub use adc::RpAnalogMux;
pub use gpio::RpOutput;
pub use timer::TickerSource;

// Re-export shared traits from underspeed-hal for convenience
pub use underspeed_hal::{AnalogChannel, AnalogMux, OutputPin, TickSource};
