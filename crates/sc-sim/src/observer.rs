//! Simulation observer trait for progress reporting and data collection.

use crate::{Arrival, Shipment, Snapshot};

/// Callbacks invoked by [`Simulation`][crate::Simulation] at key points in
/// the tick pipeline.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — departure counter
///
/// ```rust,ignore
/// struct Departures(usize);
///
/// impl SimObserver for Departures {
///     fn on_departure(&mut self, _s: &Shipment) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each processed tick, after the clock advanced.
    fn on_tick_start(&mut self, _tick: u64, _elapsed_secs: f64) {}

    /// Called once per shipment leaving its source.
    fn on_departure(&mut self, _shipment: &Shipment) {}

    /// Called once per shipment reaching its destination.
    fn on_arrival(&mut self, _arrival: &Arrival) {}

    /// Called every `config.snapshot_interval_ticks` ticks, after the tick
    /// has been fully applied.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called after the simulation has been reset.
    fn on_reset(&mut self) {}

    /// Called once at the end of [`run_frames`][crate::Simulation::run_frames].
    fn on_run_end(&mut self, _snapshot: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
