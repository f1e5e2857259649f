//! Periodic monitoring
//!
//! One [`TickScheduler::tick`] call per timer period. The scheduler first
//! counts down the arming delay, then samples the timeout and pulse inputs
//! every cycle and declares underspeed when the pulse stops recurring.

pub mod pulse;
pub mod tick;

pub use pulse::{Edge, PulseDetector};
pub use tick::{Phase, TickOutcome, TickScheduler};
