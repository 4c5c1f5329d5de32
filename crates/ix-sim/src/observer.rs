//! Simulation observer trait for progress reporting and data collection.

use std::time::Duration;

use ix_core::{Movement, VehicleId};

use crate::report::SimReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as vehicles progress.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every hook runs on the thread that
/// called `run` — vehicle threads report over a channel and never touch the
/// observer, so implementations need no synchronisation.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_admit(&mut self, vehicle: VehicleId, movement: Movement, at: Duration) {
///         println!("[{at:>8.3?}] {vehicle} crossing {movement}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// A vehicle reached the intersection and called `enter`.
    fn on_request(&mut self, _vehicle: VehicleId, _movement: Movement, _at: Duration) {}

    /// A vehicle was admitted and is now occupying the intersection.
    fn on_admit(&mut self, _vehicle: VehicleId, _movement: Movement, _at: Duration) {}

    /// A vehicle finished crossing and released its permit.
    fn on_depart(&mut self, _vehicle: VehicleId, _movement: Movement, _at: Duration) {}

    /// Called once after every vehicle has been joined.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
