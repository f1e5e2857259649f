//! Underspeed Relay - Pulse Watchdog Interlock
//!
//! Main firmware binary for RP2040-based boards. Energizes a protective
//! relay after an operator-set arming delay, then drops it for good if the
//! supervised pulse fails to recur within the operator-set timeout.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use underspeed_core::{start, Outputs};
use underspeed_hal_rp2040::{RpAnalogMux, RpOutput, TickerSource};

use crate::config::RELAY_CONFIG;

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Underspeed relay starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Outputs idle low until the relay is armed
    // Pin assignments are board-specific (relay driver GPIO15, on-board LED GPIO25)
    let relay = RpOutput::new(Output::new(p.PIN_15, Level::Low));
    let status = RpOutput::new(Output::new(p.PIN_25, Level::Low));
    let outputs = Outputs::new(relay, status);

    // Pulse ADC0/GPIO26, delay pot ADC1/GPIO27, timeout pot ADC2/GPIO28
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let mux = RpAnalogMux::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_28, Pull::None),
    );

    let period = Duration::from_micros(RELAY_CONFIG.tick_period_us as u64);
    let mut source = TickerSource::new(period);

    let device = match start(&RELAY_CONFIG, mux, outputs, &mut source, tasks::diagnostics()) {
        Ok(device) => device,
        Err(fault) => {
            let kind = fault.kind;
            error!("Startup fault: {:?} (blink code {})", kind, kind.code());
            fault.into_fault_reporter(Delay).halt(kind);
        }
    };

    info!(
        "Relay armed, underspeed detection in {} ticks ({} ms)",
        device.delay_ticks(),
        RELAY_CONFIG.ticks_to_ms(device.delay_ticks())
    );

    spawner.spawn(tasks::tick_task(device, source)).unwrap();

    // All monitoring happens in the tick task
    loop {
        Timer::after_secs(60).await;
        trace!("Idle heartbeat");
    }
}
