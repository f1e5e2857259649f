//! Fault kinds and blink codes

use underspeed_hal::SampleError;

/// Reasons the relay halts
///
/// The discriminant is the blink code shown on the status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FaultKind {
    /// Pulse did not recur within the target timeout (silent, no blink)
    Underspeed = 0,
    /// An analog conversion failed
    SampleFailed = 4,
    /// Computed arming delay outside its calibrated range
    DelayOutOfRange = 5,
    /// Computed underspeed timeout outside its calibrated range
    TargetOutOfRange = 6,
    /// Tick counter passed the timeout without the comparison firing
    MissedComparison = 7,
    /// A monitoring cycle overran its period and a tick was lost
    MissedTick = 8,
}

impl FaultKind {
    /// Blink code for this fault
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether this fault comes from an internal self-check
    pub const fn is_diagnostic(self) -> bool {
        matches!(
            self,
            FaultKind::DelayOutOfRange
                | FaultKind::TargetOutOfRange
                | FaultKind::MissedComparison
                | FaultKind::MissedTick
        )
    }
}

impl From<SampleError> for FaultKind {
    fn from(_: SampleError) -> Self {
        FaultKind::SampleFailed
    }
}

/// Status output pattern for a fault
///
/// One cycle is `toggles()` status toggles spaced by
/// [`BlinkPattern::TOGGLE_INTERVAL_MS`], then a
/// [`BlinkPattern::PAUSE_MS`] hold. Two toggles make one visible blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPattern {
    blinks: u8,
}

impl BlinkPattern {
    /// Delay after each toggle
    pub const TOGGLE_INTERVAL_MS: u32 = 500;

    /// Hold after the last toggle of a cycle
    pub const PAUSE_MS: u32 = 1500;

    pub const fn for_kind(kind: FaultKind) -> Self {
        Self { blinks: kind.code() }
    }

    /// Visible blinks per cycle
    pub const fn blinks(&self) -> u8 {
        self.blinks
    }

    /// Status toggles per cycle
    pub const fn toggles(&self) -> u16 {
        self.blinks as u16 * 2
    }

    /// Length of one cycle in milliseconds
    pub const fn cycle_ms(&self) -> u32 {
        self.toggles() as u32 * Self::TOGGLE_INTERVAL_MS + Self::PAUSE_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underspeed_is_silent() {
        let pattern = BlinkPattern::for_kind(FaultKind::Underspeed);
        assert_eq!(pattern.toggles(), 0);
        assert_eq!(pattern.cycle_ms(), 1500);
        assert!(!FaultKind::Underspeed.is_diagnostic());
    }

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            FaultKind::Underspeed,
            FaultKind::SampleFailed,
            FaultKind::DelayOutOfRange,
            FaultKind::TargetOutOfRange,
            FaultKind::MissedComparison,
            FaultKind::MissedTick,
        ];

        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_diagnostic_patterns() {
        assert_eq!(BlinkPattern::for_kind(FaultKind::DelayOutOfRange).toggles(), 10);
        assert_eq!(BlinkPattern::for_kind(FaultKind::MissedTick).blinks(), 8);
        assert_eq!(
            BlinkPattern::for_kind(FaultKind::MissedTick).cycle_ms(),
            16 * 500 + 1500
        );
        assert!(FaultKind::MissedTick.is_diagnostic());
        assert!(!FaultKind::SampleFailed.is_diagnostic());
    }

    #[test]
    fn test_sample_error_conversion() {
        assert_eq!(
            FaultKind::from(SampleError::ConversionError),
            FaultKind::SampleFailed
        );
    }
}
