//! Progress events emitted by vehicle threads.

use std::time::Duration;

use ix_core::{Movement, VehicleId};

/// The stage a vehicle just reached.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TripPhase {
    /// Reached the intersection and asked to enter.
    Requested,
    /// Admitted by the controller; now occupying the intersection.
    Admitted,
    /// Finished crossing and released its permit.
    Departed,
}

/// One progress event.
///
/// Events from a single vehicle arrive in phase order; events from different
/// vehicles interleave arbitrarily.
#[derive(Copy, Clone, Debug)]
pub struct SimEvent {
    pub vehicle:  VehicleId,
    pub movement: Movement,
    pub phase:    TripPhase,
    /// Time since the run started.
    pub at:       Duration,
}
