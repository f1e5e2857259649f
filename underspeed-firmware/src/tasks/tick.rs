//! Monitoring tick task
//!
//! Waits on the tick source and runs one monitoring step per period:
//! - Arming countdown
//! - Timeout pot and pulse sampling
//! - Cycle budget tracking
//!
//! A fault hands the outputs to the fault reporter, which never returns.

use defmt::*;
use embassy_time::{Delay, Duration, Instant};

#[cfg(not(feature = "diagnostics"))]
use underspeed_core::safety::NoDiagnostics;
#[cfg(feature = "diagnostics")]
use underspeed_core::safety::SelfCheck;
use underspeed_core::scheduler::{Edge, TickOutcome};
use underspeed_core::UnderspeedRelay;
use underspeed_hal_rp2040::{RpAnalogMux, RpOutput, TickSource, TickerSource};

use crate::config::RELAY_CONFIG;

/// Self-check observer selected by the `diagnostics` feature
#[cfg(feature = "diagnostics")]
pub type ActiveDiagnostics = SelfCheck;
#[cfg(not(feature = "diagnostics"))]
pub type ActiveDiagnostics = NoDiagnostics;

/// Concrete device record driven by the tick task
pub type Device = UnderspeedRelay<RpAnalogMux, RpOutput, RpOutput, ActiveDiagnostics>;

/// Cycles slower than this fraction of the period get a warning
const BUDGET_WARN_DIVISOR: u64 = 2;

pub fn diagnostics() -> ActiveDiagnostics {
    #[cfg(feature = "diagnostics")]
    {
        info!("Self-checks enabled");
        SelfCheck::new(RELAY_CONFIG.calibration)
    }
    #[cfg(not(feature = "diagnostics"))]
    {
        NoDiagnostics
    }
}

/// Tick task - runs the monitoring callback once per period
#[embassy_executor::task]
pub async fn tick_task(mut device: Device, mut source: TickerSource) {
    info!("Tick task started");

    let budget = Duration::from_micros(RELAY_CONFIG.tick_period_us as u64 / BUDGET_WARN_DIVISOR);
    let mut monitoring = false;

    loop {
        source.wait().await;

        let started = Instant::now();
        let result = device.tick(&source);
        let elapsed = started.elapsed();

        match result {
            Ok(TickOutcome::Arming { remaining }) => {
                trace!("Arming, {} ticks left", remaining);
            }
            Ok(TickOutcome::Monitoring {
                tick_count,
                target_ticks,
                edge,
            }) => {
                if !monitoring {
                    monitoring = true;
                    info!(
                        "Monitoring started, timeout {} ticks ({} ms)",
                        target_ticks,
                        RELAY_CONFIG.ticks_to_ms(target_ticks)
                    );
                }
                if edge == Some(Edge::Falling) {
                    trace!("Pulse, timeout {} ticks", target_ticks);
                } else {
                    trace!("Tick {}/{}", tick_count, target_ticks);
                }

                if elapsed > budget {
                    warn!(
                        "Monitoring cycle took {} us of {} us",
                        elapsed.as_micros(),
                        RELAY_CONFIG.tick_period_us
                    );
                }
                if source.is_pending() {
                    // Missed ticks are dropped, not replayed
                    warn!("Tick overrun, resynchronizing");
                    source.resync();
                }
            }
            Err(kind) => {
                // Outputs are already off and the fault is latched
                error!(
                    "Fault: {:?} (blink code {}) at tick {}/{}, relay de-energized",
                    kind,
                    kind.code(),
                    device.tick_count(),
                    device.target_ticks()
                );
                device.into_fault_reporter(Delay).halt(kind);
            }
        }
    }
}
