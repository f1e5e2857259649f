//! Startup sequencer
//!
//! Runs once at power-on, before the periodic tick is enabled:
//!
//! 1. drive both outputs to their off level
//! 2. sample the delay potentiometer and compute the arming delay
//! 3. energize the relay and status outputs
//! 4. start the tick source
//!
//! The caller then idles; all further work happens in
//! [`UnderspeedRelay::tick`].

use embedded_hal::delay::DelayNs;
use underspeed_hal::{AnalogChannel, AnalogMux, OutputPin, TickSource};

use crate::config::RelayConfig;
use crate::device::UnderspeedRelay;
use crate::outputs::Outputs;
use crate::safety::{Diagnostics, FaultKind, FaultReporter};
use crate::scheduler::TickScheduler;

/// Startup failed before the tick source was enabled
///
/// Carries the outputs back so they can be handed to the fault reporter.
pub struct StartupFault<R, S> {
    pub kind: FaultKind,
    pub outputs: Outputs<R, S>,
}

impl<R: OutputPin, S: OutputPin> StartupFault<R, S> {
    pub fn into_fault_reporter<D: DelayNs>(self, delay: D) -> FaultReporter<R, S, D> {
        FaultReporter::new(self.outputs, delay)
    }
}

/// Bring the relay up and return the armed device
pub fn start<A, R, S, T, D>(
    config: &RelayConfig,
    mut mux: A,
    mut outputs: Outputs<R, S>,
    timer: &mut T,
    mut diagnostics: D,
) -> Result<UnderspeedRelay<A, R, S, D>, StartupFault<R, S>>
where
    A: AnalogMux,
    R: OutputPin,
    S: OutputPin,
    T: TickSource,
    D: Diagnostics,
{
    outputs.de_energize();

    let delay_ticks = match compute_delay(config, &mut mux, &mut diagnostics) {
        Ok(ticks) => ticks,
        Err(kind) => return Err(StartupFault { kind, outputs }),
    };

    outputs.arm();
    timer.start();

    let scheduler = TickScheduler::new(config, delay_ticks);
    Ok(UnderspeedRelay::new(
        mux,
        outputs,
        scheduler,
        diagnostics,
        delay_ticks,
    ))
}

fn compute_delay<A: AnalogMux, D: Diagnostics>(
    config: &RelayConfig,
    mux: &mut A,
    diagnostics: &mut D,
) -> Result<u16, FaultKind> {
    let sample = mux.sample(AnalogChannel::Delay)?;
    let ticks = config.calibration.delay_ticks(sample);
    diagnostics.delay_computed(ticks)?;
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalibrationBounds;
    use crate::safety::{NoDiagnostics, SelfCheck};
    use crate::scheduler::Phase;
    use crate::testing::{MockDelay, MockPin, MockTimer, ScriptedMux};

    fn high(_: u32) -> u8 {
        0xFF
    }

    #[test]
    fn test_start_arms_outputs_and_timer() {
        let mux = ScriptedMux::new(0, 0x80, high);
        let outputs = Outputs::new(MockPin::low(), MockPin::low());
        let mut timer = MockTimer::default();

        let device = match start(&RelayConfig::DEFAULT, mux, outputs, &mut timer, NoDiagnostics) {
            Ok(device) => device,
            Err(fault) => panic!("startup failed: {:?}", fault.kind),
        };

        assert!(timer.started);
        assert!(device.outputs().is_relay_energized());
        assert!(device.outputs().is_status_on());
        assert_eq!(device.delay_ticks(), 100);
        assert_eq!(device.phase(), Phase::Arming { remaining: 100 });
    }

    #[test]
    fn test_delay_from_full_scale_pot() {
        let mux = ScriptedMux::new(0xFF, 0x80, high);
        let outputs = Outputs::new(MockPin::low(), MockPin::low());
        let mut timer = MockTimer::default();

        let device = match start(&RelayConfig::DEFAULT, mux, outputs, &mut timer, NoDiagnostics) {
            Ok(device) => device,
            Err(fault) => panic!("startup failed: {:?}", fault.kind),
        };
        assert_eq!(device.delay_ticks(), 1000);
    }

    #[test]
    fn test_sample_failure_keeps_outputs_off() {
        let mut mux = ScriptedMux::new(0, 0x80, high);
        mux.fail_on = Some(AnalogChannel::Delay);
        // Pins start high to prove startup drives them off
        let outputs = Outputs::new(MockPin::high(), MockPin::high());
        let mut timer = MockTimer::default();

        let fault = match start(&RelayConfig::DEFAULT, mux, outputs, &mut timer, NoDiagnostics) {
            Ok(_) => panic!("startup should fail"),
            Err(fault) => fault,
        };

        assert_eq!(fault.kind, FaultKind::SampleFailed);
        assert!(!timer.started);
        assert!(!fault.outputs.is_relay_energized());

        let mut reporter = fault.into_fault_reporter(MockDelay::default());
        reporter.engage();
        reporter.blink_cycle(FaultKind::SampleFailed);
        assert!(!reporter.outputs().is_relay_energized());
    }

    #[test]
    fn test_self_check_rejects_miscalculated_delay() {
        // Device computes with default bounds, checker expects at least 200
        let check = SelfCheck::new(CalibrationBounds {
            min_delay_ticks: 200,
            ..CalibrationBounds::DEFAULT
        });
        let mux = ScriptedMux::new(0, 0x80, high);
        let outputs = Outputs::new(MockPin::low(), MockPin::low());
        let mut timer = MockTimer::default();

        match start(&RelayConfig::DEFAULT, mux, outputs, &mut timer, check) {
            Ok(_) => panic!("startup should fail"),
            Err(fault) => {
                assert_eq!(fault.kind, FaultKind::DelayOutOfRange);
                assert!(!fault.outputs.is_status_on());
            }
        }
        assert!(!timer.started);
    }
}
