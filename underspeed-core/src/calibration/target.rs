//! Underspeed timeout curve
//!
//! Approximates `10^(3 - sample / 128)` scaled to the configured bounds:
//! each half of the sample range is split into nine segments at
//! non-uniform reference points, denser near the start of the half where
//! the logarithm is steepest. The lower half (`sample < 0x80`) runs from
//! `min_target_ticks` to `mid_target_ticks`, the upper half from
//! `mid_target_ticks` towards `max_target_ticks`.

use crate::config::CalibrationBounds;

/// Segment boundaries within one half of the sample range
///
/// The last entry closes the final segment and is never matched directly.
const REF_POINTS: [u8; 10] = [0, 6, 12, 20, 28, 39, 51, 67, 89, 128];

/// Number of segments per half
const SEGMENTS: usize = REF_POINTS.len() - 1;

/// Sample value splitting the two halves
pub const MIDPOINT: u8 = 0x80;

impl CalibrationBounds {
    /// Underspeed timeout for a target-potentiometer sample
    ///
    /// Monotonic non-increasing, `0 -> min_target_ticks`,
    /// `0x80 -> mid_target_ticks`, `255 -> ~max_target_ticks`.
    pub const fn target_ticks(&self, sample: u8) -> u16 {
        let (offset, start, end) = if sample >= MIDPOINT {
            (sample - MIDPOINT, self.mid_target_ticks, self.max_target_ticks)
        } else {
            (sample, self.min_target_ticks, self.mid_target_ticks)
        };
        let span = (start - end) as u32;

        // Largest reference point not above the offset; REF_POINTS[0] is 0
        let mut i = SEGMENTS - 1;
        while REF_POINTS[i] > offset {
            i -= 1;
        }

        // Whole segments passed, one ninth of the span each
        let mut decline = span * i as u32 / SEGMENTS as u32;

        let rem = (offset - REF_POINTS[i]) as u32;
        if rem != 0 {
            let gap = (REF_POINTS[i + 1] - REF_POINTS[i]) as u32;
            decline += span * rem / (SEGMENTS as u32 * gap);
        }

        start - decline as u16
    }
}

/// Underspeed timeout using the factory calibration
pub const fn target_ticks_from_sample(sample: u8) -> u16 {
    CalibrationBounds::DEFAULT.target_ticks(sample)
}
