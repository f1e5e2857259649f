//! Tick scheduler state machine
//!
//! ```text
//!   Arming(n) ──tick──> Arming(n-1) ... Arming(1) ──tick──> Monitoring
//!                                                              │  ▲
//!                                                              └──┘ tick
//!   Monitoring ──counter >= target──> Err(Underspeed)
//! ```
//!
//! There is no way back from Monitoring to Arming; the only exit is a fault.

use underspeed_hal::{AnalogChannel, AnalogMux};

use super::pulse::{Edge, PulseDetector};
use crate::config::{CalibrationBounds, RelayConfig};
use crate::safety::{Diagnostics, FaultKind};

/// Scheduler phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Underspeed detection suppressed for `remaining` more ticks (never 0)
    Arming { remaining: u16 },
    /// Sampling inputs and checking the timeout every tick
    Monitoring,
}

/// Result of a non-faulting tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Arming countdown advanced; no inputs were sampled
    Arming { remaining: u16 },
    /// Monitoring cycle completed without a fault
    Monitoring {
        tick_count: u16,
        target_ticks: u16,
        edge: Option<Edge>,
    },
}

/// Periodic underspeed monitor
#[derive(Debug, Clone)]
pub struct TickScheduler {
    calibration: CalibrationBounds,
    phase: Phase,
    /// Ticks since the last falling edge
    tick_count: u16,
    /// Current underspeed threshold
    target_ticks: u16,
    pulse: PulseDetector,
}

impl TickScheduler {
    /// Create a scheduler that arms for `delay_ticks` ticks
    pub fn new(config: &RelayConfig, delay_ticks: u16) -> Self {
        let phase = if delay_ticks == 0 {
            Phase::Monitoring
        } else {
            Phase::Arming {
                remaining: delay_ticks,
            }
        };

        Self {
            calibration: config.calibration,
            phase,
            tick_count: 0,
            target_ticks: config.calibration.min_target_ticks,
            pulse: PulseDetector::new(config.pulse),
        }
    }

    /// Run one tick
    ///
    /// While arming, only the countdown moves. While monitoring, the
    /// timeout input is sampled and the threshold recomputed, then the pulse
    /// input is sampled; a falling edge clears the counter. Returns
    /// `Err(FaultKind::Underspeed)` once the counter reaches the threshold.
    /// After any `Err` the scheduler must not be ticked again.
    pub fn tick<A, D>(&mut self, mux: &mut A, diagnostics: &mut D) -> Result<TickOutcome, FaultKind>
    where
        A: AnalogMux,
        D: Diagnostics,
    {
        if let Phase::Arming { remaining } = self.phase {
            let remaining = remaining.saturating_sub(1);
            self.phase = if remaining == 0 {
                Phase::Monitoring
            } else {
                Phase::Arming { remaining }
            };
            return Ok(TickOutcome::Arming { remaining });
        }

        self.tick_count = self.tick_count.saturating_add(1);
        diagnostics.counter_advanced(self.tick_count)?;

        // Re-read every cycle so the operator can retune live
        let sample = mux.sample(AnalogChannel::Target)?;
        self.target_ticks = self.calibration.target_ticks(sample);
        diagnostics.target_computed(self.target_ticks)?;

        let sample = mux.sample(AnalogChannel::Pulse)?;
        let edge = self.pulse.update(sample);
        if edge == Some(Edge::Falling) {
            self.tick_count = 0;
        }

        if self.tick_count >= self.target_ticks {
            return Err(FaultKind::Underspeed);
        }

        Ok(TickOutcome::Monitoring {
            tick_count: self.tick_count,
            target_ticks: self.target_ticks,
            edge,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tick_count(&self) -> u16 {
        self.tick_count
    }

    pub fn target_ticks(&self) -> u16 {
        self.target_ticks
    }

    /// Debounced pulse level
    pub fn pulse_high(&self) -> bool {
        self.pulse.is_high()
    }
}
