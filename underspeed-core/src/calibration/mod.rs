//! Calibration curves
//!
//! Converts raw 8-bit potentiometer samples into tick counts. Both curves
//! are integer-only and allocation-free, so they are cheap enough to run
//! inside the monitoring tick:
//!
//! - [`delay`] - linear arming delay, evaluated once at startup
//! - [`target`] - piecewise-linear approximation of a logarithmic underspeed
//!   timeout, evaluated every monitoring cycle

pub mod delay;
pub mod target;

pub use delay::delay_ticks_from_sample;
pub use target::target_ticks_from_sample;
