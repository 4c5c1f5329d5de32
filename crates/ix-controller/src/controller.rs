//! The `Intersection` monitor: one lock, twelve wait-conditions.

use std::sync::{Condvar, Mutex, MutexGuard};

use ix_core::Movement;

use crate::counts::ActiveCounts;
use crate::permit::IntersectionPermit;

/// The admission controller for a single four-way intersection.
///
/// Shared by reference among all vehicle threads.  All occupancy state lives
/// in one [`ActiveCounts`] behind one mutex; each movement additionally owns
/// a [`Condvar`] that vehicles requesting that movement park on while a
/// conflicting movement is active.
///
/// See the crate docs for the monitor protocol and the broadcast-on-exit
/// rationale.
#[derive(Debug, Default)]
pub struct Intersection {
    /// Occupancy counters, mutated only while this mutex is held.
    counts: Mutex<ActiveCounts>,

    /// One wait-condition per movement, indexed by `Movement::index()`.
    /// Indexing by movement (rather than twelve named fields) makes it
    /// impossible to wait on or wake the wrong condition.
    gates: [Condvar; Movement::COUNT],
}

impl Intersection {
    /// A fresh controller with all counts at zero and nobody waiting.
    pub fn new() -> Self {
        Self {
            counts: Mutex::new(ActiveCounts::new()),
            gates: std::array::from_fn(|_| Condvar::new()),
        }
    }

    /// Acquire the controller lock.
    ///
    /// Poisoning means a vehicle thread panicked inside the monitor and the
    /// counters can no longer be trusted; halting is the only safe response.
    fn lock(&self) -> MutexGuard<'_, ActiveCounts> {
        self.counts.lock().expect("intersection lock poisoned")
    }

    /// Block until `movement` may safely occupy the intersection, then take
    /// a permit for it.
    ///
    /// On return the caller holds a logical permit: no conflicting movement
    /// can become active until the matching [`exit`][Self::exit].  Waiting
    /// releases the lock, so other admissions and exits proceed while this
    /// vehicle sleeps.  The predicate is re-checked on every wakeup — a
    /// single signal is never trusted (condition variables may wake
    /// spuriously, and another woken vehicle may have claimed the gap first).
    pub fn enter(&self, movement: Movement) {
        let mut counts = self.lock();
        while !counts.admissible(movement) {
            counts = self.gates[movement.index()]
                .wait(counts)
                .expect("intersection lock poisoned");
        }
        counts.record_entry(movement);
    }

    /// Release a permit previously taken with [`enter`][Self::enter] for the
    /// same movement, and wake every movement this departure may have
    /// unblocked.
    ///
    /// Never blocks beyond the lock acquisition.
    ///
    /// # Panics
    /// Panics if no permit for `movement` is outstanding (double release).
    pub fn exit(&self, movement: Movement) {
        let mut counts = self.lock();
        counts.record_exit(movement);
        drop(counts);

        // Only movements that conflict with `movement` can have been waiting
        // on its occupancy; all of them must re-check, so broadcast to each.
        for blocked in movement.conflicts() {
            self.gates[blocked.index()].notify_all();
        }
    }

    /// RAII variant of [`enter`][Self::enter]: blocks until admitted, then
    /// returns a permit that calls [`exit`][Self::exit] when dropped.
    pub fn occupy(&self, movement: Movement) -> IntersectionPermit<'_> {
        self.enter(movement);
        IntersectionPermit::new(self, movement)
    }

    /// Current occupancy for one movement (consistent read under the lock).
    pub fn active(&self, movement: Movement) -> u32 {
        self.lock().get(movement)
    }

    /// Consistent copy of all twelve counters.
    pub fn snapshot(&self) -> ActiveCounts {
        *self.lock()
    }

    /// Tear the controller down.
    ///
    /// Callers must join every vehicle before shutting down.
    ///
    /// # Panics
    /// Panics if any permit is still outstanding — shutting down a live
    /// intersection is a caller bug.
    pub fn shutdown(self) {
        let counts = self.lock();
        assert!(
            counts.all_idle(),
            "intersection shut down while vehicles are still inside"
        );
    }
}
