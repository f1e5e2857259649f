//! Relay and status outputs
//!
//! Both lines idle off at power-up, go on once the relay is armed, and are
//! forced off on any fault. Each line may be wired active-low (e.g. a relay
//! driver that energizes on a low pin).

use underspeed_hal::OutputPin;

/// Protective relay line plus status indicator line
pub struct Outputs<R, S> {
    relay: R,
    status: S,
    /// If true, relay energized = pin LOW
    relay_inverted: bool,
    /// If true, status on = pin LOW
    status_inverted: bool,
}

impl<R: OutputPin, S: OutputPin> Outputs<R, S> {
    /// Create outputs with both lines active-high
    pub fn new(relay: R, status: S) -> Self {
        Self::with_polarity(relay, false, status, false)
    }

    /// Create outputs with explicit polarity per line
    ///
    /// Both lines are driven to their off level immediately.
    pub fn with_polarity(relay: R, relay_inverted: bool, status: S, status_inverted: bool) -> Self {
        let mut outputs = Self {
            relay,
            status,
            relay_inverted,
            status_inverted,
        };
        outputs.de_energize();
        outputs
    }

    /// Energize the relay and light the status output
    pub fn arm(&mut self) {
        self.relay.set_state(!self.relay_inverted);
        self.status.set_state(!self.status_inverted);
    }

    /// Drop the relay and the status output to their safe level
    pub fn de_energize(&mut self) {
        self.relay.set_state(self.relay_inverted);
        self.status.set_state(self.status_inverted);
    }

    /// Flip the status output
    pub fn toggle_status(&mut self) {
        self.status.toggle();
    }

    /// Whether the relay is currently energized
    pub fn is_relay_energized(&self) -> bool {
        self.relay.is_set_high() != self.relay_inverted
    }

    /// Whether the status output is currently on
    pub fn is_status_on(&self) -> bool {
        self.status.is_set_high() != self.status_inverted
    }

    /// Give back the underlying pins
    pub fn into_pins(self) -> (R, S) {
        (self.relay, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPin;

    #[test]
    fn test_active_high_lines() {
        let mut outputs = Outputs::new(MockPin::high(), MockPin::high());

        // Forced off on construction
        assert!(!outputs.is_relay_energized());
        assert!(!outputs.is_status_on());

        outputs.arm();
        assert!(outputs.is_relay_energized());
        assert!(outputs.is_status_on());

        outputs.de_energize();
        let (relay, status) = outputs.into_pins();
        assert!(!relay.is_set_high());
        assert!(!status.is_set_high());
    }

    #[test]
    fn test_active_low_relay() {
        let mut outputs = Outputs::with_polarity(MockPin::low(), true, MockPin::low(), false);

        // Off means the relay pin sits high
        assert!(!outputs.is_relay_energized());

        outputs.arm();
        assert!(outputs.is_relay_energized());
        assert!(outputs.is_status_on());

        outputs.de_energize();
        let (relay, status) = outputs.into_pins();
        assert!(relay.is_set_high());
        assert!(!status.is_set_high());
    }

    #[test]
    fn test_toggle_status_leaves_relay() {
        let mut outputs = Outputs::new(MockPin::low(), MockPin::low());
        outputs.toggle_status();
        assert!(outputs.is_status_on());
        assert!(!outputs.is_relay_energized());
        outputs.toggle_status();
        assert!(!outputs.is_status_on());
    }
}
