//! Tick source
//!
//! Drives the monitoring callback from an embassy-time [`Ticker`]. The
//! ticker alone would replay every period it fell behind on; the firmware
//! calls [`TickerSource::resync`] after an overrun so late ticks are
//! dropped rather than queued, as a hardware compare interrupt would.

use embassy_time::{Duration, Instant, Ticker};
use underspeed_hal::TickSource;

/// Periodic tick timer
pub struct TickerSource {
    period: Duration,
    ticker: Option<Ticker>,
    /// When the tick after the current one is due
    next_due: Instant,
}

impl TickerSource {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            ticker: None,
            next_due: Instant::MAX,
        }
    }

    /// Wait for the next tick
    ///
    /// Never completes if the source has not been started.
    pub async fn wait(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.next().await;
                self.next_due += self.period;
            }
            None => core::future::pending::<()>().await,
        }
    }

    /// Drop any ticks missed during an overrun and restart the cadence now
    pub fn resync(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.reset();
            self.next_due = Instant::now() + self.period;
        }
    }
}

impl TickSource for TickerSource {
    fn start(&mut self) {
        self.ticker = Some(Ticker::every(self.period));
        self.next_due = Instant::now() + self.period;
    }

    fn is_pending(&self) -> bool {
        Instant::now() >= self.next_due
    }
}
