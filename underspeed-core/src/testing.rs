//! Host-side mocks shared by the unit tests

use embedded_hal::delay::DelayNs;
use underspeed_hal::{AnalogChannel, AnalogMux, OutputPin, SampleError, TickSource};

/// Output pin that remembers its level and counts toggles
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub toggles: u32,
}

impl MockPin {
    pub fn low() -> Self {
        Self::default()
    }

    pub fn high() -> Self {
        Self {
            high: true,
            toggles: 0,
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn toggle(&mut self) {
        self.high = !self.high;
        self.toggles += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Number of conversions remembered in order
pub const LOG_LEN: usize = 8;

/// Multiplexed ADC with fixed potentiometer levels and a scripted pulse
///
/// `pulse` receives the index of the pulse conversion (0 for the first).
pub struct ScriptedMux<F> {
    pub delay: u8,
    pub target: u8,
    pub pulse: F,
    pub pulse_reads: u32,
    pub conversions: u32,
    pub log: [Option<AnalogChannel>; LOG_LEN],
    pub fail_on: Option<AnalogChannel>,
}

impl<F: FnMut(u32) -> u8> ScriptedMux<F> {
    pub fn new(delay: u8, target: u8, pulse: F) -> Self {
        Self {
            delay,
            target,
            pulse,
            pulse_reads: 0,
            conversions: 0,
            log: [None; LOG_LEN],
            fail_on: None,
        }
    }
}

impl<F: FnMut(u32) -> u8> AnalogMux for ScriptedMux<F> {
    fn sample(&mut self, channel: AnalogChannel) -> Result<u8, SampleError> {
        if let Some(slot) = self.log.get_mut(self.conversions as usize) {
            *slot = Some(channel);
        }
        self.conversions += 1;

        if self.fail_on == Some(channel) {
            return Err(SampleError::ConversionError);
        }

        Ok(match channel {
            AnalogChannel::Delay => self.delay,
            AnalogChannel::Target => self.target,
            AnalogChannel::Pulse => {
                let index = self.pulse_reads;
                self.pulse_reads += 1;
                (self.pulse)(index)
            }
        })
    }
}

/// Tick source with a settable overrun flag
#[derive(Debug, Default)]
pub struct MockTimer {
    pub started: bool,
    pub pending: bool,
}

impl TickSource for MockTimer {
    fn start(&mut self) {
        self.started = true;
    }

    fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
        self.calls += 1;
    }
}
