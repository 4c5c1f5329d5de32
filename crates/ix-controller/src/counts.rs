//! Per-movement occupancy counters.

use ix_core::Movement;

/// How many vehicles currently hold a permit for each movement.
///
/// Owned exclusively by [`Intersection`][crate::Intersection] behind its
/// mutex; every mutation happens with that lock held.  A count is raised only
/// by a vehicle that has just passed the admission check for its movement and
/// lowered only when that vehicle releases the matching permit, so for every
/// movement `m`:
///
///   completed enters(m) − completed exits(m) == count(m) ≥ 0
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveCounts([u32; Movement::COUNT]);

impl ActiveCounts {
    /// All twelve counters at zero.
    pub const fn new() -> Self {
        ActiveCounts([0; Movement::COUNT])
    }

    /// Current occupancy for `movement`.
    #[inline]
    pub fn get(self, movement: Movement) -> u32 {
        self.0[movement.index()]
    }

    /// The admission predicate: `true` iff no movement conflicting with
    /// `movement` is currently occupied.
    ///
    /// Vehicles following `movement` itself do not block each other, so its
    /// own count is irrelevant here.
    pub fn admissible(self, movement: Movement) -> bool {
        movement.conflicts().iter().all(|c| self.get(*c) == 0)
    }

    /// `true` when no vehicle holds any permit.
    pub fn all_idle(self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Every movement with at least one vehicle inside.
    pub fn active_movements(self) -> Vec<Movement> {
        Movement::ALL
            .into_iter()
            .filter(|m| self.get(*m) > 0)
            .collect()
    }

    /// Record an admission.  Caller must have verified
    /// [`admissible`][Self::admissible] under the controller's lock.
    pub(crate) fn record_entry(&mut self, movement: Movement) {
        debug_assert!(self.admissible(movement));
        self.0[movement.index()] += 1;
    }

    /// Record a departure.
    ///
    /// # Panics
    /// Panics if the counter is already zero — a permit was released twice,
    /// which means the counters can no longer be trusted.
    pub(crate) fn record_exit(&mut self, movement: Movement) {
        let count = &mut self.0[movement.index()];
        assert!(*count > 0, "exit recorded for {movement} with no active entry");
        *count -= 1;
    }
}
