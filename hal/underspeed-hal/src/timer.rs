//! Periodic tick timer
//!
//! The monitoring callback runs once per timer period. The timer exposes a
//! pending flag so a callback can tell, when it finishes, whether the next
//! period already elapsed while it was running.

/// Periodic timer driving the monitoring callback
pub trait TickSource {
    /// Enable the periodic event source
    ///
    /// Called exactly once, after the outputs are armed.
    fn start(&mut self);

    /// Whether the next tick event has already fired
    ///
    /// Returns `true` if the period following the current callback has
    /// elapsed, which means the callback overran its budget and a tick was
    /// lost.
    fn is_pending(&self) -> bool;
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn start(&mut self) {
        (**self).start();
    }

    fn is_pending(&self) -> bool {
        (**self).is_pending()
    }
}
