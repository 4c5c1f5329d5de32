//! `ix-controller` — the conflict-aware admission controller.
//!
//! # The monitor
//!
//! Any number of vehicles may occupy the intersection at once, as long as no
//! two of their movements conflict (see `ix_core::conflict`).  The
//! [`Intersection`] monitor enforces this with:
//!
//! - one controller-wide mutex guarding the per-movement [`ActiveCounts`]
//!   (admission for one movement reads *other* movements' counts, so
//!   per-movement locks could not give a consistent predicate), and
//! - one wait-condition per movement, indexed by `Movement::index()`, so a
//!   departing vehicle wakes exactly the movements its exit may have
//!   unblocked.
//!
//! ```text
//! enter(m):  lock; while ∃ c ∈ conflicts(m) with count[c] > 0: wait on m's
//!            condition (re-check on every wakeup); count[m] += 1; unlock
//! exit(m):   lock; count[m] -= 1; unlock; notify_all on the condition of
//!            every c ∈ conflicts(m)
//! ```
//!
//! The lock is held only for the O(conflict-set-size) predicate check and the
//! counter update — never across the occupancy itself, otherwise no two
//! movements could ever proceed concurrently.
//!
//! # Why broadcast on exit
//!
//! Several *distinct* movements may be parked waiting on an exit of `m`, and
//! more than one of them may have become admissible at once (their conflict
//! sets overlap on `m` but not on each other).  Waking a single waiter would
//! leave the rest parked even though nothing excludes them any more, so
//! `exit` broadcasts to every conflicting movement's condition and lets the
//! woken vehicles re-check under the lock.
//!
//! # Failure model
//!
//! A well-formed `enter`/`exit` pair never fails — `enter` only delays.
//! Releasing a permit that was never issued, or shutting down with vehicles
//! still inside, is a caller bug and panics rather than continuing with
//! corrupted counts.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let intersection = Intersection::new();
//! std::thread::scope(|s| {
//!     s.spawn(|| {
//!         let permit = intersection.occupy(Movement::NorthSouth);
//!         // ... cross the intersection ...
//!         drop(permit);
//!     });
//! });
//! intersection.shutdown();
//! ```

pub mod controller;
pub mod counts;
pub mod permit;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use controller::Intersection;
pub use counts::ActiveCounts;
pub use permit::IntersectionPermit;
