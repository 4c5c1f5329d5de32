//! The `Sim` struct and its run loop.

use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::{Duration, Instant};

use ix_controller::Intersection;
use ix_core::{Movement, VehicleId};

use crate::event::{SimEvent, TripPhase};
use crate::report::{SimReport, TripRecord};
use crate::{SimConfig, SimError, SimObserver, SimResult};

/// The simulation runner.
///
/// Holds the per-vehicle trip parameters drawn at build time; each call to
/// [`run`][Sim::run] creates a fresh [`Intersection`] and drives the full
/// vehicle lifecycle against it, so a `Sim` can be re-run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration the sim was built from.
    pub config: SimConfig,

    /// Per-vehicle movement, indexed by `VehicleId`.
    trips: Vec<Movement>,

    /// Per-vehicle delay before reaching the intersection.
    arrivals: Vec<Duration>,

    /// Per-vehicle occupancy duration.
    services: Vec<Duration>,
}

impl Sim {
    pub(crate) fn assemble(
        config:   SimConfig,
        trips:    Vec<Movement>,
        arrivals: Vec<Duration>,
        services: Vec<Duration>,
    ) -> Self {
        Self { config, trips, arrivals, services }
    }

    /// The movement each vehicle will request, indexed by `VehicleId`.
    pub fn trips(&self) -> &[Movement] {
        &self.trips
    }

    /// Run the simulation to completion.
    ///
    /// Spawns one thread per vehicle, relays their progress events to
    /// `observer` (on this thread), joins everybody, shuts the controller
    /// down, and returns the assembled [`SimReport`].
    pub fn run<O: SimObserver>(&self, observer: &mut O) -> SimResult<SimReport> {
        let intersection = Intersection::new();
        let start = Instant::now();
        let (events_tx, events_rx) = mpsc::channel::<SimEvent>();

        let mut trips: Vec<TripRecord> = Vec::with_capacity(self.trips.len());
        let mut first_failure: Option<VehicleId> = None;

        thread::scope(|s| {
            let handles: Vec<_> = (0..self.trips.len())
                .map(|i| {
                    let vehicle      = VehicleId(i as u32);
                    let movement     = self.trips[i];
                    let arrival      = self.arrivals[i];
                    let service      = self.services[i];
                    let events       = events_tx.clone();
                    let intersection = &intersection;
                    let handle = s.spawn(move || {
                        drive(vehicle, movement, arrival, service, intersection, events, start)
                    });
                    (vehicle, handle)
                })
                .collect();

            // The spawn loop kept the original sender alive; drop it so the
            // event stream ends once the last vehicle finishes.
            drop(events_tx);

            // Relay events to the observer.  Vehicle threads never touch the
            // observer, so implementations need no synchronisation.
            for event in events_rx {
                match event.phase {
                    TripPhase::Requested => observer.on_request(event.vehicle, event.movement, event.at),
                    TripPhase::Admitted  => observer.on_admit(event.vehicle, event.movement, event.at),
                    TripPhase::Departed  => observer.on_depart(event.vehicle, event.movement, event.at),
                }
            }

            for (vehicle, handle) in handles {
                match handle.join() {
                    Ok(record) => trips.push(record),
                    Err(_)     => {
                        first_failure.get_or_insert(vehicle);
                    }
                }
            }
        });

        if let Some(vehicle) = first_failure {
            return Err(SimError::VehiclePanic { vehicle });
        }

        // Every vehicle has been joined, so this asserts the controller is
        // idle before tearing it down.
        intersection.shutdown();

        trips.sort_by_key(|t| t.vehicle);
        let report = SimReport { trips, wall_time: start.elapsed() };
        observer.on_sim_end(&report);
        Ok(report)
    }
}

/// One vehicle's lifecycle, run on its own thread.
fn drive(
    vehicle:      VehicleId,
    movement:     Movement,
    arrival:      Duration,
    service:      Duration,
    intersection: &Intersection,
    events:       Sender<SimEvent>,
    start:        Instant,
) -> TripRecord {
    let report = |phase: TripPhase, at: Duration| {
        events
            .send(SimEvent { vehicle, movement, phase, at })
            .expect("event channel closed before vehicles finished");
    };

    thread::sleep(arrival);

    let requested_at = start.elapsed();
    report(TripPhase::Requested, requested_at);

    intersection.enter(movement);
    let admitted_at = start.elapsed();
    report(TripPhase::Admitted, admitted_at);

    // Occupancy happens with the controller lock released — the sleep is the
    // simulated crossing, not part of the monitor's critical section.
    thread::sleep(service);

    // Sample before releasing so a vehicle admitted by this exit can never
    // carry an earlier timestamp than our departure.
    let departed_at = start.elapsed();
    intersection.exit(movement);
    report(TripPhase::Departed, departed_at);

    TripRecord { vehicle, movement, requested_at, admitted_at, departed_at }
}
