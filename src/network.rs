//! Proximity-based construction of the initial spring network.

use crate::error::SimError;
use crate::float::Float;
use crate::point::Point;
use crate::spring::{Material, Spring};
use alloc::vec::Vec as AllocVec;

/// Builds springs between every pair of points closer than a threshold.
///
/// This is the one quadratic pass in the crate; it runs once at setup.
///
/// ```
/// use trussy::{layout, NetworkBuilder, Vec2};
///
/// let points = layout::truss(Vec2::new(640.0f32, 360.0), 100.0, 100.0, 5);
/// let springs = NetworkBuilder::new(125.0).with_ground_line(360.0).build(&points).unwrap();
/// assert_eq!(springs.len(), 19);
/// ```
#[derive(Clone, Debug)]
pub struct NetworkBuilder<F: Float> {
    threshold: F,
    ground_line: Option<F>,
}

impl<F: Float> NetworkBuilder<F> {
    /// Connect pairs whose initial distance is strictly below `threshold`.
    pub fn new(threshold: F) -> Self {
        NetworkBuilder { threshold, ground_line: None }
    }

    /// Springs whose endpoints both lie below this height (larger y) are
    /// tagged `Road`; everything else is `Wood`. Without a ground line every
    /// spring is `Wood`.
    pub fn with_ground_line(mut self, y: F) -> Self {
        self.ground_line = Some(y);
        self
    }

    fn material_for(&self, a: &Point<F>, b: &Point<F>) -> Material {
        match self.ground_line {
            Some(line) if a.pos.y > line && b.pos.y > line => Material::Road,
            _ => Material::Wood,
        }
    }

    /// Create the spring set for `points`. Each unordered pair is tested
    /// once, so no pair is ever connected twice.
    pub fn build(&self, points: &[Point<F>]) -> Result<AllocVec<Spring<F>>, SimError> {
        if points.is_empty() {
            return Err(SimError::EmptyLayout);
        }
        if !(self.threshold.is_finite() && self.threshold > F::zero()) {
            return Err(SimError::InvalidThreshold);
        }
        if let Some(index) = points.iter().position(|p| !(p.mass.is_finite() && p.mass > F::zero())) {
            tracing::warn!(index, "rejecting layout with non-positive mass");
            return Err(SimError::InvalidMass { index });
        }

        let mut springs = AllocVec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let rest = points[i].pos.distance(points[j].pos);
                if rest < self.threshold {
                    let material = self.material_for(&points[i], &points[j]);
                    springs.push(Spring::new(i, j, rest, material));
                }
            }
        }

        tracing::debug!(points = points.len(), springs = springs.len(), "built spring network");
        Ok(springs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::vec::Vec2;

    #[test]
    fn rest_lengths_match_initial_distances() {
        let points = layout::grid(Vec2::new(0.0f64, 0.0), 2, 40.0);
        let springs = NetworkBuilder::new(60.0).build(&points).unwrap();
        assert!(!springs.is_empty());
        for s in &springs {
            assert_eq!(s.rest_length(), points[s.a].pos.distance(points[s.b].pos));
        }
    }

    #[test]
    fn grid_connects_orthogonal_and_diagonal_neighbours() {
        // 3x3 lattice, spacing 1: 12 orthogonal + 8 diagonal links under 1.5.
        let points = layout::grid(Vec2::new(0.0f64, 0.0), 1, 1.0);
        let springs = NetworkBuilder::new(1.5).build(&points).unwrap();
        assert_eq!(springs.len(), 20);
    }

    #[test]
    fn threshold_is_strict() {
        let points = [Point::new(Vec2::new(0.0f32, 0.0)), Point::new(Vec2::new(10.0, 0.0))];
        assert!(NetworkBuilder::new(10.0).build(&points).unwrap().is_empty());
        assert_eq!(NetworkBuilder::new(10.5).build(&points).unwrap().len(), 1);
    }

    #[test]
    fn ground_line_tags_road() {
        let points = layout::truss(Vec2::new(640.0f64, 360.0), 100.0, 100.0, 5);
        let springs = NetworkBuilder::new(125.0).with_ground_line(360.0).build(&points).unwrap();
        let road = springs.iter().filter(|s| s.material == Material::Road).count();
        // Five bottom-chord members.
        assert_eq!(road, 5);
        for s in springs.iter().filter(|s| s.material == Material::Road) {
            assert!(points[s.a].pos.y > 360.0 && points[s.b].pos.y > 360.0);
        }
    }

    #[test]
    fn invalid_inputs_rejected() {
        let empty: [Point<f32>; 0] = [];
        assert_eq!(NetworkBuilder::new(1.0).build(&empty), Err(SimError::EmptyLayout));
        let points = [Point::new(Vec2::new(0.0f32, 0.0)).with_mass(0.0)];
        assert_eq!(NetworkBuilder::new(1.0).build(&points), Err(SimError::InvalidMass { index: 0 }));
        assert_eq!(NetworkBuilder::new(-1.0).build(&points), Err(SimError::InvalidThreshold));
    }
}
