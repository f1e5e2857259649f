//! Analog input abstraction
//!
//! The relay reads three potentiometer/sensor inputs through one physical
//! multiplexer, so only one channel converts at a time. Conversions are
//! blocking: `sample` returns once the result is available, and its latency
//! counts against the tick budget of the caller.

/// Logical analog channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogChannel {
    /// Periodic pulse signal being supervised
    Pulse,
    /// Arming delay potentiometer (read once at startup)
    Delay,
    /// Underspeed timeout potentiometer (read every monitoring cycle)
    Target,
}

/// Errors reported by an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Converter flagged the result as invalid
    ConversionError,
}

/// Multiplexed 8-bit analog-to-digital converter
///
/// Samples are full-scale 8-bit: 0 is ground, 255 is the reference voltage.
/// Higher-resolution converters keep the eight most significant bits.
pub trait AnalogMux {
    /// Select `channel`, run one conversion and wait for the result
    fn sample(&mut self, channel: AnalogChannel) -> Result<u8, SampleError>;
}

impl<T: AnalogMux + ?Sized> AnalogMux for &mut T {
    fn sample(&mut self, channel: AnalogChannel) -> Result<u8, SampleError> {
        (**self).sample(channel)
    }
}
