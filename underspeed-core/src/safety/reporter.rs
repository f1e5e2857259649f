//! Fault reporter
//!
//! Terminal state of the relay. Takes ownership of the outputs, forces
//! them off and then blinks the fault's code on the status output until an
//! external reset.

use embedded_hal::delay::DelayNs;
use underspeed_hal::OutputPin;

use super::fault::{BlinkPattern, FaultKind};
use crate::outputs::Outputs;

/// Fail-stop fault reporter
pub struct FaultReporter<R, S, D> {
    outputs: Outputs<R, S>,
    delay: D,
}

impl<R: OutputPin, S: OutputPin, D: DelayNs> FaultReporter<R, S, D> {
    pub fn new(outputs: Outputs<R, S>, delay: D) -> Self {
        Self { outputs, delay }
    }

    /// De-energize everything and report `kind` forever
    pub fn halt(mut self, kind: FaultKind) -> ! {
        self.engage();
        loop {
            self.blink_cycle(kind);
        }
    }

    /// Force the relay and status outputs off
    pub fn engage(&mut self) {
        self.outputs.de_energize();
    }

    /// Emit one cycle of the blink pattern for `kind`
    ///
    /// For [`FaultKind::Underspeed`] this is only the pause; the status
    /// output stays off.
    pub fn blink_cycle(&mut self, kind: FaultKind) {
        let pattern = BlinkPattern::for_kind(kind);
        for _ in 0..pattern.toggles() {
            self.outputs.toggle_status();
            self.delay.delay_ms(BlinkPattern::TOGGLE_INTERVAL_MS);
        }
        self.delay.delay_ms(BlinkPattern::PAUSE_MS);
    }

    pub fn outputs(&self) -> &Outputs<R, S> {
        &self.outputs
    }
}
