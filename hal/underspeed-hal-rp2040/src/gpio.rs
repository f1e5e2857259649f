//! GPIO outputs
//!
//! Wraps an embassy-rp [`Output`] so it implements the shared
//! [`OutputPin`] trait.

use embassy_rp::gpio::Output;
use underspeed_hal::OutputPin;

/// Push-pull output pin
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Wrap an already configured output
    ///
    /// Create the pin with `Level::Low` so the line idles off until armed.
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
