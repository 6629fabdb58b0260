//! Point masses: position, velocity, pin flag and mass.

use crate::float::Float;
use crate::vec::Vec2;

/// A simulated point mass.
///
/// Velocity is stored explicitly rather than derived from the previous
/// position, because drag input and fracture both assign it directly.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    /// Externally pinned; integration and collision never move it.
    pub fixed: bool,
    pub mass: F,
    /// Transient extra mass from ball loads, rebuilt every substep.
    pub load: F,
}

impl<F: Float> Point<F> {
    /// A free point at rest with unit mass.
    pub fn new(pos: Vec2<F>) -> Self {
        Point {
            pos,
            vel: Vec2::zero(),
            fixed: false,
            mass: F::one(),
            load: F::zero(),
        }
    }

    /// A pinned point with unit mass.
    pub fn fixed(pos: Vec2<F>) -> Self {
        Point { fixed: true, ..Point::new(pos) }
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2<F>) -> Self {
        self.vel = vel;
        self
    }

    /// Mass used by the force law: own mass plus any ball load.
    pub fn effective_mass(&self) -> F {
        self.mass + self.load
    }

    /// Independent copy used by fracture. Carries position, velocity, pin
    /// state and mass; the load is transient and starts empty.
    pub fn split(&self) -> Self {
        Point { load: F::zero(), ..*self }
    }
}
