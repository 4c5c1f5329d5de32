//! RAII occupancy permit.

use ix_core::Movement;

use crate::controller::Intersection;

/// Proof that the holder was admitted for one movement.
///
/// Returned by [`Intersection::occupy`]; releases the occupancy (and wakes
/// conflicting movements) when dropped, which ties "exactly one exit per
/// enter" to scope instead of caller discipline.
#[must_use = "dropping the permit immediately releases the intersection"]
pub struct IntersectionPermit<'a> {
    intersection: &'a Intersection,
    movement:     Movement,
}

impl<'a> IntersectionPermit<'a> {
    pub(crate) fn new(intersection: &'a Intersection, movement: Movement) -> Self {
        Self { intersection, movement }
    }

    /// The movement this permit admits.
    pub fn movement(&self) -> Movement {
        self.movement
    }
}

impl Drop for IntersectionPermit<'_> {
    fn drop(&mut self) {
        self.intersection.exit(self.movement);
    }
}
