//! Analog inputs
//!
//! RP2040 has a single 12-bit ADC with a round-robin mux over GPIO26-29 and
//! the internal temperature sensor. The relay uses three of the external
//! inputs; every conversion is a blocking read so its latency is bounded
//! and counted inside the tick.

use embassy_rp::adc::{Adc, Blocking, Channel};
use underspeed_hal::{AnalogChannel, AnalogMux, SampleError};

/// Bits dropped to reduce a 12-bit conversion to 8 bits
const RESOLUTION_SHIFT: u32 = 4;

/// Reduce a 12-bit conversion to the 8-bit scale the relay works in
pub const fn to_8bit(raw: u16) -> u8 {
    let value = raw >> RESOLUTION_SHIFT;
    if value > u8::MAX as u16 {
        u8::MAX
    } else {
        value as u8
    }
}

/// ADC with the three relay inputs attached
pub struct RpAnalogMux {
    adc: Adc<'static, Blocking>,
    pulse: Channel<'static>,
    delay: Channel<'static>,
    target: Channel<'static>,
}

impl RpAnalogMux {
    pub fn new(
        adc: Adc<'static, Blocking>,
        pulse: Channel<'static>,
        delay: Channel<'static>,
        target: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            pulse,
            delay,
            target,
        }
    }
}

impl AnalogMux for RpAnalogMux {
    fn sample(&mut self, channel: AnalogChannel) -> Result<u8, SampleError> {
        let input = match channel {
            AnalogChannel::Pulse => &mut self.pulse,
            AnalogChannel::Delay => &mut self.delay,
            AnalogChannel::Target => &mut self.target,
        };

        self.adc
            .blocking_read(input)
            .map(to_8bit)
            .map_err(|_| SampleError::ConversionError)
    }
}
