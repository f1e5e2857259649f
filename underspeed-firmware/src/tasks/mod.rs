//! Embassy async tasks
//!
//! The tick task is the only task; it owns the device record outright.

pub mod tick;

pub use tick::{diagnostics, tick_task};
