//! Fluent builder for constructing a [`Sim`].

use std::time::Duration;

use ix_core::{Movement, VehicleId, VehicleRng};

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — vehicle count, seed, service-time range, arrival spread
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                                          |
/// |-------------|--------------------------------------------------|
/// | `.trips(v)` | One movement per vehicle, drawn from its RNG     |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .trips(vec![Movement::NorthSouth, Movement::SouthNorth])
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    trips:  Option<Vec<Movement>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig) -> Self {
        Self { config, trips: None }
    }

    /// Pin each vehicle's movement (must be length `vehicle_count`).
    ///
    /// If not called, every vehicle draws a movement uniformly from
    /// [`Movement::ALL`] using its own deterministic RNG.
    pub fn trips(mut self, trips: Vec<Movement>) -> Self {
        self.trips = Some(trips);
        self
    }

    /// Validate the config, draw every vehicle's trip parameters, and return
    /// a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let vehicle_count = self.config.vehicle_count;

        let pinned = match self.trips {
            Some(t) => {
                if t.len() != vehicle_count {
                    return Err(SimError::VehicleCountMismatch {
                        expected: vehicle_count,
                        got:      t.len(),
                        what:     "pinned trips",
                    });
                }
                Some(t)
            }
            None => None,
        };

        // Draw each vehicle's parameters from its own RNG so results are
        // stable as the fleet grows (see ix_core::rng).
        let mut trips     = Vec::with_capacity(vehicle_count);
        let mut arrivals  = Vec::with_capacity(vehicle_count);
        let mut services  = Vec::with_capacity(vehicle_count);
        for i in 0..vehicle_count {
            let mut rng = VehicleRng::new(self.config.seed, VehicleId(i as u32));
            let movement = match &pinned {
                Some(t) => t[i],
                None    => Movement::ALL[rng.gen_range(0..Movement::COUNT)],
            };
            trips.push(movement);
            arrivals.push(Duration::from_millis(
                rng.gen_range(0..=self.config.max_arrival_spread_ms),
            ));
            services.push(Duration::from_millis(
                rng.gen_range(self.config.min_service_ms..=self.config.max_service_ms),
            ));
        }

        Ok(Sim::assemble(self.config, trips, arrivals, services))
    }
}
