//! Arming delay curve
//!
//! `ticks = min + sample * (max - min) / 255`, evaluated with a reciprocal
//! scaled by 2^16 so the runtime path is one multiply and one shift.

use crate::config::CalibrationBounds;

/// Fixed-point shift of the reciprocal scale
const SCALE_SHIFT: u32 = 16;

/// Rounding bias (0.5 in the scaled domain)
const ROUNDING: u32 = 1 << (SCALE_SHIFT - 1);

impl CalibrationBounds {
    /// Arming delay for a delay-potentiometer sample
    ///
    /// Monotonic non-decreasing, `0 -> min_delay_ticks`,
    /// `255 -> max_delay_ticks`, within half a tick of the exact line.
    pub const fn delay_ticks(&self, sample: u8) -> u16 {
        let span = (self.max_delay_ticks - self.min_delay_ticks) as u32;
        // (span << 16) / 255, folded at compile time for const bounds
        let scale = (span << SCALE_SHIFT) / u8::MAX as u32;
        let offset = (sample as u32 * scale + ROUNDING) >> SCALE_SHIFT;

        self.min_delay_ticks + offset as u16
    }
}

/// Arming delay using the factory calibration
pub const fn delay_ticks_from_sample(sample: u8) -> u16 {
    CalibrationBounds::DEFAULT.delay_ticks(sample)
}
