//! Simulation configuration.

use crate::{SimError, SimResult};

/// Top-level simulation configuration.
///
/// Typically built in the application crate (or loaded from a TOML/JSON file
/// with the `serde` feature) and handed to [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of vehicles to simulate (one OS thread each).
    pub vehicle_count: usize,

    /// Master RNG seed.  The same seed always produces the same trips,
    /// arrival offsets, and service times.
    pub seed: u64,

    /// Shortest possible occupancy of the intersection, in milliseconds.
    pub min_service_ms: u64,

    /// Longest possible occupancy, in milliseconds.  Must be at least
    /// `min_service_ms`.
    pub max_service_ms: u64,

    /// Vehicles reach the intersection uniformly spread over
    /// `[0, max_arrival_spread_ms]`.  Zero makes everybody arrive at once
    /// (worst-case contention).
    pub max_arrival_spread_ms: u64,
}

impl SimConfig {
    /// Reject configurations the run loop cannot honour.
    pub(crate) fn validate(&self) -> SimResult<()> {
        if self.vehicle_count == 0 {
            return Err(SimError::Config("vehicle_count must be at least 1".into()));
        }
        if self.min_service_ms > self.max_service_ms {
            return Err(SimError::Config(format!(
                "min_service_ms ({}) exceeds max_service_ms ({})",
                self.min_service_ms, self.max_service_ms
            )));
        }
        Ok(())
    }
}
