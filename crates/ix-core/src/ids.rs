//! Strongly typed vehicle identifier.

use std::fmt;

/// Index of a vehicle in the simulation.
///
/// `Copy + Ord + Hash` so it can be used as a map key or sorted without
/// ceremony.  The inner integer is `pub` to allow direct indexing into
/// per-vehicle `Vec`s via `id.0 as usize`, but callers should prefer the
/// [`index`][VehicleId::index] helper for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle {}", self.0)
    }
}
