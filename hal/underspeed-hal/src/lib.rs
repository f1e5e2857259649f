//! Underspeed Relay Hardware Abstraction Layer
//!
//! This crate defines the peripheral-driver interface the relay logic
//! calls into. Chip-specific HALs (RP2040, ...) implement it, so the same
//! monitoring code runs on hardware and against host-side mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  underspeed-core / underspeed-firmware  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  underspeed-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ underspeed-hal-   │
//!           │      rp2040       │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Relay and status lines
//! - [`adc::AnalogMux`] - Single multiplexed 8-bit ADC
//! - [`timer::TickSource`] - Periodic tick timer

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogChannel, AnalogMux, SampleError};
pub use gpio::OutputPin;
pub use timer::TickSource;
