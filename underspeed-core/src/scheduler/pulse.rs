//! Hysteresis pulse detector
//!
//! Debounces the noisy analog pulse input into a clean logical level using
//! two thresholds. A high signal must fall to `low_level` or below to read
//! as low; a low signal must rise above `high_level` to read as high.
//! Samples inside the band keep the current level.

use crate::config::PulseThresholds;

/// Confirmed level change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high
    Rising,
    /// High to low
    Falling,
}

/// Two-level hysteresis comparator
#[derive(Debug, Clone)]
pub struct PulseDetector {
    thresholds: PulseThresholds,
    high: bool,
}

impl PulseDetector {
    /// Create a detector in the high state
    ///
    /// Starting high means the first falling edge only needs the signal to
    /// drop below the low threshold, so a pulse already in progress at
    /// startup is counted.
    pub const fn new(thresholds: PulseThresholds) -> Self {
        Self {
            thresholds,
            high: true,
        }
    }

    /// Feed one sample, returning the edge it confirmed (if any)
    pub fn update(&mut self, sample: u8) -> Option<Edge> {
        if self.high {
            if sample <= self.thresholds.low_level {
                self.high = false;
                return Some(Edge::Falling);
            }
        } else if sample > self.thresholds.high_level {
            self.high = true;
            return Some(Edge::Rising);
        }

        None
    }

    /// Current debounced level
    pub fn is_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: u8 = 0x19;
    const HIGH: u8 = 0xE6;

    fn detector() -> PulseDetector {
        PulseDetector::new(PulseThresholds {
            low_level: LOW,
            high_level: HIGH,
        })
    }

    #[test]
    fn test_starts_high() {
        assert!(detector().is_high());
    }

    #[test]
    fn test_falling_edge_at_low_level() {
        let mut det = detector();
        assert_eq!(det.update(LOW + 1), None);
        assert!(det.is_high());
        assert_eq!(det.update(LOW), Some(Edge::Falling));
        assert!(!det.is_high());
    }

    #[test]
    fn test_rising_edge_above_high_level() {
        let mut det = detector();
        det.update(0);
        assert_eq!(det.update(HIGH), None);
        assert!(!det.is_high());
        assert_eq!(det.update(HIGH + 1), Some(Edge::Rising));
        assert!(det.is_high());
    }

    #[test]
    fn test_band_does_not_chatter() {
        let mut det = detector();
        det.update(0);

        // Noise around the midpoint never changes the level
        for sample in [0x70, 0x90, 0x30, 0xE0, 0x1A, 0xE6] {
            assert_eq!(det.update(sample), None);
        }
        assert!(!det.is_high());
    }

    #[test]
    fn test_single_edge_per_transition() {
        let mut det = detector();
        assert_eq!(det.update(0), Some(Edge::Falling));
        assert_eq!(det.update(0), None);
        assert_eq!(det.update(0), None);
        assert_eq!(det.update(0xFF), Some(Edge::Rising));
        assert_eq!(det.update(0xFF), None);
    }
}
