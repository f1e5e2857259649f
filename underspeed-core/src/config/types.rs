//! Configuration type definitions
//!
//! Time quantities are expressed in ticks of the monitoring loop. Analog
//! levels are raw 8-bit samples.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tick period of the monitoring loop in microseconds
///
/// 600 kHz I/O clock / 64 prescaler / 94 counts = 10.0266 ms.
pub const DEFAULT_TICK_PERIOD_US: u32 = 10_027;

/// Upper limit for any configured tick count (~100 s at the default period)
pub const MAX_CONFIG_TICKS: u16 = 10_000;

/// Calibration curve end points, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalibrationBounds {
    /// Arming delay at sample 0
    pub min_delay_ticks: u16,
    /// Arming delay at sample 255
    pub max_delay_ticks: u16,
    /// Underspeed timeout at sample 0 (most tolerant)
    pub min_target_ticks: u16,
    /// Underspeed timeout at sample 0x80
    pub mid_target_ticks: u16,
    /// Underspeed timeout approached at sample 255 (strictest)
    pub max_target_ticks: u16,
}

impl CalibrationBounds {
    /// Factory calibration: 1 s..10 s arming, 10 s / 1 s / 10 ms timeout
    pub const DEFAULT: Self = Self {
        min_delay_ticks: 100,
        max_delay_ticks: 1000,
        min_target_ticks: 1000,
        mid_target_ticks: 100,
        max_target_ticks: 10,
    };
}

impl Default for CalibrationBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Hysteresis thresholds for the pulse input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PulseThresholds {
    /// A high pulse is considered low once the sample is at or below this
    pub low_level: u8,
    /// A low pulse is considered high once the sample is above this
    pub high_level: u8,
}

impl PulseThresholds {
    /// 0.49 V and 4.5 V on a 5 V reference
    pub const DEFAULT: Self = Self {
        low_level: 0x19,
        high_level: 0xE6,
    };
}

impl Default for PulseThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete relay configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RelayConfig {
    /// Monitoring loop period in microseconds
    pub tick_period_us: u32,
    /// Calibration curve end points
    pub calibration: CalibrationBounds,
    /// Pulse input hysteresis
    pub pulse: PulseThresholds,
}

impl RelayConfig {
    pub const DEFAULT: Self = Self {
        tick_period_us: DEFAULT_TICK_PERIOD_US,
        calibration: CalibrationBounds::DEFAULT,
        pulse: PulseThresholds::DEFAULT,
    };

    /// Check the configuration for values the curves cannot honour
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let cal = &self.calibration;

        if self.tick_period_us == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if cal.min_delay_ticks > cal.max_delay_ticks {
            return Err(ConfigError::DelayBoundsInverted);
        }
        if cal.max_delay_ticks > MAX_CONFIG_TICKS {
            return Err(ConfigError::DelayTooLong);
        }
        if cal.max_target_ticks == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        if !(cal.min_target_ticks > cal.mid_target_ticks
            && cal.mid_target_ticks > cal.max_target_ticks)
        {
            return Err(ConfigError::TargetBoundsNotDecreasing);
        }
        if cal.min_target_ticks > MAX_CONFIG_TICKS {
            return Err(ConfigError::TargetTooLong);
        }
        if self.pulse.low_level >= self.pulse.high_level {
            return Err(ConfigError::ThresholdsInverted);
        }

        Ok(())
    }

    /// Convert a tick count to milliseconds
    pub const fn ticks_to_ms(&self, ticks: u16) -> u32 {
        (ticks as u32 * self.tick_period_us) / 1000
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period is zero
    ZeroTickPeriod,
    /// `min_delay_ticks` exceeds `max_delay_ticks`
    DelayBoundsInverted,
    /// `max_delay_ticks` exceeds [`MAX_CONFIG_TICKS`]
    DelayTooLong,
    /// `max_target_ticks` is zero, which would fault on the first cycle
    ZeroTarget,
    /// Target bounds are not strictly `min > mid > max`
    TargetBoundsNotDecreasing,
    /// `min_target_ticks` exceeds [`MAX_CONFIG_TICKS`]
    TargetTooLong,
    /// Pulse low level is not below the high level
    ThresholdsInverted,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::ZeroTickPeriod => "tick_period_us must be non-zero",
            ConfigError::DelayBoundsInverted => "min_delay_ticks must not exceed max_delay_ticks",
            ConfigError::DelayTooLong => "max_delay_ticks exceeds 10000",
            ConfigError::ZeroTarget => "max_target_ticks must be non-zero",
            ConfigError::TargetBoundsNotDecreasing => {
                "target ticks must satisfy min_target_ticks > mid_target_ticks > max_target_ticks"
            }
            ConfigError::TargetTooLong => "min_target_ticks exceeds 10000",
            ConfigError::ThresholdsInverted => "pulse low_level must be below high_level",
        };
        f.write_str(msg)
    }
}
