//! Error types for building and configuring a simulation.

use core::fmt;

/// Errors reported while constructing a network or simulation.
///
/// Stepping a valid simulation never fails; these only come out of
/// validation at setup time.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be positive and finite.
    InvalidMass { index: usize },
    /// Substep timestep must be positive and finite.
    InvalidTimestep,
    /// Damping factor must be in (0, 1).
    InvalidDamping,
    /// A distance threshold or radius must be positive and finite.
    InvalidThreshold,
    /// Restitution and tangential keep factors must be in [0, 1].
    InvalidRestitution,
    /// A spring refers to a point that does not exist.
    PointOutOfBounds { index: usize, count: usize },
    /// A spring connects a point to itself.
    DegenerateSpring { index: usize },
    /// Two springs join the same unordered pair of points.
    DuplicateSpring { a: usize, b: usize },
    /// A network needs at least one point.
    EmptyLayout,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { index } => {
                write!(f, "point {} must have positive, finite mass", index)
            }
            SimError::InvalidTimestep => write!(f, "substep timestep must be positive"),
            SimError::InvalidDamping => write!(f, "damping must be in (0, 1)"),
            SimError::InvalidThreshold => write!(f, "thresholds and radii must be positive"),
            SimError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            SimError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            SimError::DegenerateSpring { index } => {
                write!(f, "spring connects point {} to itself", index)
            }
            SimError::DuplicateSpring { a, b } => {
                write!(f, "points {} and {} are already connected", a, b)
            }
            SimError::EmptyLayout => write!(f, "layout has no points"),
        }
    }
}

impl core::error::Error for SimError {}
