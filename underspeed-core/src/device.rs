//! Device state record
//!
//! [`UnderspeedRelay`] owns everything the periodic tick touches: the
//! analog mux, the outputs, the scheduler state and the diagnostic
//! observer. After startup the tick is its only writer, and `tick` takes
//! `&mut self`, so a second tick can never run while one is in progress.
//!
//! The first fault de-energizes the outputs inside `tick` and is latched;
//! the device never samples or arms again.

use embedded_hal::delay::DelayNs;
use underspeed_hal::{AnalogMux, OutputPin, TickSource};

use crate::outputs::Outputs;
use crate::safety::{Diagnostics, FaultKind, FaultReporter};
use crate::scheduler::{Phase, TickOutcome, TickScheduler};

/// Armed underspeed relay
pub struct UnderspeedRelay<A, R, S, D> {
    mux: A,
    outputs: Outputs<R, S>,
    scheduler: TickScheduler,
    diagnostics: D,
    delay_ticks: u16,
    /// First fault detected, if any
    fault: Option<FaultKind>,
}

impl<A, R, S, D> UnderspeedRelay<A, R, S, D>
where
    A: AnalogMux,
    R: OutputPin,
    S: OutputPin,
    D: Diagnostics,
{
    pub(crate) fn new(
        mux: A,
        outputs: Outputs<R, S>,
        scheduler: TickScheduler,
        diagnostics: D,
        delay_ticks: u16,
    ) -> Self {
        Self {
            mux,
            outputs,
            scheduler,
            diagnostics,
            delay_ticks,
            fault: None,
        }
    }

    /// Periodic callback, once per timer period
    ///
    /// On `Err` the relay and status outputs are already off. Every later
    /// call returns the same fault without touching the inputs. Hand the
    /// device to [`Self::into_fault_reporter`] to report it.
    pub fn tick<T: TickSource>(&mut self, timer: &T) -> Result<TickOutcome, FaultKind> {
        if let Some(kind) = self.fault {
            return Err(kind);
        }

        match self.step(timer) {
            Ok(outcome) => Ok(outcome),
            Err(kind) => {
                self.outputs.de_energize();
                self.fault = Some(kind);
                Err(kind)
            }
        }
    }

    fn step<T: TickSource>(&mut self, timer: &T) -> Result<TickOutcome, FaultKind> {
        let outcome = self.scheduler.tick(&mut self.mux, &mut self.diagnostics)?;

        if let TickOutcome::Monitoring { .. } = outcome {
            self.diagnostics.cycle_finished(timer.is_pending())?;
        }

        Ok(outcome)
    }

    /// Give up normal operation and hand the outputs to the fault reporter
    pub fn into_fault_reporter<DL: DelayNs>(self, delay: DL) -> FaultReporter<R, S, DL> {
        FaultReporter::new(self.outputs, delay)
    }

    /// Latched fault, `None` while the relay is healthy
    pub fn fault(&self) -> Option<FaultKind> {
        self.fault
    }

    pub fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    pub fn tick_count(&self) -> u16 {
        self.scheduler.tick_count()
    }

    pub fn target_ticks(&self) -> u16 {
        self.scheduler.target_ticks()
    }

    pub fn pulse_high(&self) -> bool {
        self.scheduler.pulse_high()
    }

    /// Arming delay computed at startup
    pub fn delay_ticks(&self) -> u16 {
        self.delay_ticks
    }

    pub fn outputs(&self) -> &Outputs<R, S> {
        &self.outputs
    }
}
