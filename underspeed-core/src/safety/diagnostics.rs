//! Internal consistency checks
//!
//! The tick scheduler and startup sequencer report intermediate values to a
//! [`Diagnostics`] observer, which may turn them into faults. Production
//! builds use [`NoDiagnostics`]; bench builds use [`SelfCheck`].

use super::fault::FaultKind;
use crate::config::CalibrationBounds;

/// Slack allowed above `max_delay_ticks` before the delay is considered wrong
pub const DELAY_TOLERANCE_TICKS: u16 = 10;

/// Observer for self-checks
///
/// All hooks default to accepting the value.
pub trait Diagnostics {
    /// Arming delay was computed at startup
    fn delay_computed(&mut self, _ticks: u16) -> Result<(), FaultKind> {
        Ok(())
    }

    /// Tick counter was incremented at the start of a monitoring cycle
    fn counter_advanced(&mut self, _tick_count: u16) -> Result<(), FaultKind> {
        Ok(())
    }

    /// Underspeed timeout was recomputed
    fn target_computed(&mut self, _ticks: u16) -> Result<(), FaultKind> {
        Ok(())
    }

    /// Monitoring cycle completed; `tick_pending` is the timer's overrun flag
    fn cycle_finished(&mut self, _tick_pending: bool) -> Result<(), FaultKind> {
        Ok(())
    }
}

/// Observer that never faults
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

/// Range and timing self-checks for bench testing
#[derive(Debug, Clone)]
pub struct SelfCheck {
    bounds: CalibrationBounds,
    /// Timeout of the previous cycle
    last_target: u16,
}

impl SelfCheck {
    pub fn new(bounds: CalibrationBounds) -> Self {
        Self {
            bounds,
            // Lets the first cycle's counter of 1 through
            last_target: 1,
        }
    }
}

impl Diagnostics for SelfCheck {
    fn delay_computed(&mut self, ticks: u16) -> Result<(), FaultKind> {
        let max = self
            .bounds
            .max_delay_ticks
            .saturating_add(DELAY_TOLERANCE_TICKS);
        if ticks < self.bounds.min_delay_ticks || ticks > max {
            return Err(FaultKind::DelayOutOfRange);
        }
        Ok(())
    }

    fn counter_advanced(&mut self, tick_count: u16) -> Result<(), FaultKind> {
        // The comparison faults at count == target, so the counter can only
        // exceed last cycle's target if that comparison was skipped
        if tick_count > self.last_target {
            return Err(FaultKind::MissedComparison);
        }
        Ok(())
    }

    fn target_computed(&mut self, ticks: u16) -> Result<(), FaultKind> {
        if ticks > self.bounds.min_target_ticks || ticks < self.bounds.max_target_ticks {
            return Err(FaultKind::TargetOutOfRange);
        }
        self.last_target = ticks;
        Ok(())
    }

    fn cycle_finished(&mut self, tick_pending: bool) -> Result<(), FaultKind> {
        if tick_pending {
            return Err(FaultKind::MissedTick);
        }
        Ok(())
    }
}
