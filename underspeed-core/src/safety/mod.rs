//! Fault handling
//!
//! Every fault is fail-stop: the first one detected de-energizes the
//! outputs and hands control to the [`FaultReporter`] for good.

pub mod diagnostics;
pub mod fault;
pub mod reporter;

pub use diagnostics::{Diagnostics, NoDiagnostics, SelfCheck};
pub use fault::{BlinkPattern, FaultKind};
pub use reporter::FaultReporter;
