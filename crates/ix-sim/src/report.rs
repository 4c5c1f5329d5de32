//! Trip records and the end-of-run report.

use std::time::Duration;

use ix_core::{Movement, VehicleId};

/// Timestamps for one vehicle's crossing, all relative to run start.
///
/// By construction `requested_at <= admitted_at <= departed_at`:
/// the three samples are taken in order on the vehicle's own thread.
#[derive(Copy, Clone, Debug)]
pub struct TripRecord {
    pub vehicle:      VehicleId,
    pub movement:     Movement,
    /// When the vehicle asked to enter.
    pub requested_at: Duration,
    /// When the admission controller let it in.
    pub admitted_at:  Duration,
    /// When it finished its crossing, just before releasing the permit.
    pub departed_at:  Duration,
}

impl TripRecord {
    /// Time spent parked waiting for admission.
    #[inline]
    pub fn wait(&self) -> Duration {
        self.admitted_at.saturating_sub(self.requested_at)
    }

    /// Time spent occupying the intersection.
    #[inline]
    pub fn service(&self) -> Duration {
        self.departed_at.saturating_sub(self.admitted_at)
    }
}

/// Everything that happened in one run.
#[derive(Clone, Debug)]
pub struct SimReport {
    /// One record per vehicle, sorted by vehicle ID.
    pub trips: Vec<TripRecord>,

    /// Wall-clock duration of the whole run.
    pub wall_time: Duration,
}

impl SimReport {
    /// Sum of all admission waits.
    pub fn total_wait(&self) -> Duration {
        self.trips.iter().map(TripRecord::wait).sum()
    }

    /// Longest single admission wait (zero for an empty report).
    pub fn max_wait(&self) -> Duration {
        self.trips
            .iter()
            .map(TripRecord::wait)
            .max()
            .unwrap_or_default()
    }

    /// All trips that followed `movement`.
    pub fn trips_for(&self, movement: Movement) -> impl Iterator<Item = &TripRecord> {
        self.trips.iter().filter(move |t| t.movement == movement)
    }
}
