//! `ix-sim` — the vehicle-lifecycle driver for the rust_ix intersection.
//!
//! # Run loop
//!
//! ```text
//! run(observer):
//!   ① create the Intersection controller
//!   ② spawn one OS thread per vehicle; each vehicle:
//!        sleep(arrival offset) → enter(movement) → sleep(service time)
//!        → exit(movement), reporting Requested/Admitted/Departed events
//!   ③ main thread drains the event channel → observer hooks
//!      (vehicle threads never touch the observer)
//!   ④ join all vehicles, shut the controller down, assemble SimReport
//! ```
//!
//! Vehicles are real OS threads because `enter` parks the caller on a
//! condition variable until its movement is admissible — a pooled executor
//! would deadlock once every worker is parked.
//!
//! # Determinism
//!
//! Each vehicle's movement, arrival offset, and service time are drawn from
//! its own `VehicleRng`, seeded from the run's global seed.  Two runs with
//! the same config make the same trips; only the interleaving (and therefore
//! the waits) is up to the scheduler.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let sim = SimBuilder::new(config).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("max wait: {:?}", report.max_wait());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod event;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use event::{SimEvent, TripPhase};
pub use observer::{NoopObserver, SimObserver};
pub use report::{SimReport, TripRecord};
pub use sim::Sim;
