//! The static conflicts-with relation over movements.
//!
//! # Derivation
//!
//! Two movements conflict iff their paths would cross while both occupy the
//! intersection square.  The table below is derived once from the geometry of
//! a single-lane four-way intersection and is symmetric by construction.
//! Notable consequences of the geometry:
//!
//! - A right turn hugs its near corner and conflicts with exactly **2**
//!   movements (the two flows that merge into its destination road).
//! - A straight movement conflicts with **6** movements.
//! - A left turn sweeps across the square and conflicts with **7**.
//! - Opposing straight movements (e.g. `N->S` and `S->N`) do **not**
//!   conflict: each keeps to its own side of the square.
//!
//! The relation is exposed as [`Movement::conflicts`] (the full set, used
//! for wakeup broadcast) and [`Movement::conflicts_with`] (membership test).
//! Both are lookups indexed by [`Movement::index`] — no per-pair branching.

use crate::movement::Movement;

use Movement::*;

/// Conflict sets, indexed by `Movement::index()`.
///
/// Each entry lists every movement whose path crosses the keyed movement's
/// path.  Symmetry, irreflexivity, and the per-turn-kind cardinalities are
/// asserted by the crate tests.
const CONFLICTS: [&[Movement]; Movement::COUNT] = [
    // NorthEast (left)
    &[EastWest, EastSouth, WestEast, WestNorth, SouthWest, SouthNorth, SouthEast],
    // NorthSouth (straight)
    &[WestNorth, WestEast, WestSouth, EastWest, EastSouth, SouthWest],
    // NorthWest (right)
    &[EastWest, SouthWest],
    // EastSouth (left)
    &[SouthNorth, SouthWest, NorthSouth, NorthEast, WestNorth, WestEast, WestSouth],
    // EastWest (straight)
    &[NorthWest, NorthEast, NorthSouth, SouthWest, SouthNorth, WestNorth],
    // EastNorth (right)
    &[SouthNorth, WestNorth],
    // SouthWest (left)
    &[EastWest, EastSouth, WestNorth, WestEast, NorthEast, NorthSouth, NorthWest],
    // SouthNorth (straight)
    &[EastWest, EastNorth, EastSouth, WestEast, WestNorth, NorthEast],
    // SouthEast (right)
    &[WestEast, NorthEast],
    // WestNorth (left)
    &[NorthSouth, NorthEast, SouthNorth, SouthWest, EastSouth, EastWest, EastNorth],
    // WestEast (straight)
    &[SouthNorth, SouthEast, SouthWest, NorthEast, NorthSouth, EastSouth],
    // WestSouth (right)
    &[NorthSouth, EastSouth],
];

impl Movement {
    /// Every movement whose path crosses this one's.
    ///
    /// The slice is at most 7 elements long; iterating it is the O(conflict-
    /// set-size) work unit the admission controller performs under its lock.
    #[inline]
    pub fn conflicts(self) -> &'static [Movement] {
        CONFLICTS[self.index()]
    }

    /// `true` iff `self` and `other` cannot occupy the intersection together.
    ///
    /// A movement never conflicts with itself — any number of vehicles may
    /// follow the same flow concurrently.
    #[inline]
    pub fn conflicts_with(self, other: Movement) -> bool {
        self.conflicts().contains(&other)
    }
}
