//! Floor clamping and line-segment obstacle collision.

use crate::config::SimConfig;
use crate::float::Float;
use crate::geometry::{segment_intersection, side_of_line, Segment};
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Corrects positions and velocities of points that crossed the floor or an
/// obstacle segment during the last substep.
///
/// The floor is the special case of an infinite horizontal obstacle, where
/// the crossing test collapses to a height comparison and the contact point
/// is the point's own x at floor height.
#[derive(Clone, Debug, Default)]
pub struct CollisionResolver<F: Float> {
    obstacles: AllocVec<Segment<F>>,
}

impl<F: Float> CollisionResolver<F> {
    pub fn new() -> Self {
        CollisionResolver { obstacles: AllocVec::new() }
    }

    /// Add a static obstacle. Zero-length segments are ignored.
    pub fn add_obstacle(&mut self, segment: Segment<F>) {
        if segment.length().is_near_zero(F::from_f32(1e-10)) {
            tracing::warn!("ignoring zero-length obstacle");
            return;
        }
        self.obstacles.push(segment);
    }

    pub fn obstacles(&self) -> &[Segment<F>] {
        &self.obstacles
    }

    /// Resolve every free point in `next` against the floor and obstacles,
    /// using `prev` for the position each point came from. Returns the
    /// number of contacts.
    pub fn resolve(
        &self,
        prev: &[Point<F>],
        next: &mut [Point<F>],
        config: &SimConfig<F>,
        kinematic: Option<usize>,
    ) -> usize {
        debug_assert_eq!(prev.len(), next.len());
        let mut contacts = 0;
        for (i, (before, point)) in prev.iter().zip(next.iter_mut()).enumerate() {
            if point.fixed || kinematic == Some(i) {
                continue;
            }
            for obstacle in &self.obstacles {
                if collide_segment(before.pos, point, obstacle, config) {
                    contacts += 1;
                }
            }
            if let Some(floor) = config.floor {
                if clamp_floor(point, floor, config.restitution) {
                    contacts += 1;
                }
            }
        }
        contacts
    }
}

/// Clamp a point at or past the floor onto it, reversing downward motion
/// scaled by `restitution`. Returns true on contact.
pub fn clamp_floor<F: Float>(point: &mut Point<F>, floor: F, restitution: F) -> bool {
    if point.pos.y < floor {
        return false;
    }
    point.pos.y = floor;
    if point.vel.y > F::zero() {
        point.vel.y = -point.vel.y * restitution;
    }
    true
}

/// Test whether the move from `from` to `point.pos` crossed `obstacle`, and
/// if so place the point just off the obstacle on the side it came from and
/// reflect its velocity. Returns true on contact.
///
/// Parallel motion (zero determinant) and paths that cross the line beyond
/// the segment's ends are not collisions.
pub fn collide_segment<F: Float>(
    from: Vec2<F>,
    point: &mut Point<F>,
    obstacle: &Segment<F>,
    config: &SimConfig<F>,
) -> bool {
    if side_of_line(from, obstacle, false) == side_of_line(point.pos, obstacle, false) {
        return false;
    }
    // Crossing the infinite line only counts if the path meets the segment
    // itself. This holds for any orientation, vertical walls included.
    let Some(hit) = segment_intersection(&Segment::new(from, point.pos), obstacle) else {
        return false;
    };

    let tangent = obstacle.delta().normalize();
    if tangent == Vec2::zero() {
        return false;
    }
    // Orient the normal away from where the point ended up, or toward where
    // it came from if it ended exactly on the line.
    let mut normal = tangent.perp();
    let depth = normal.dot(point.pos - hit);
    if depth > F::zero() || (depth == F::zero() && normal.dot(from - hit) < F::zero()) {
        normal = -normal;
    }

    point.pos = hit + normal.scale(config.obstacle_offset);
    let along = point.vel.dot(tangent);
    let into = point.vel.dot(normal);
    point.vel = tangent.scale(along * config.tangential_keep) - normal.scale(into * config.restitution);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_clamps_and_reflects() {
        let mut p = Point::new(Vec2::new(0.0f64, 503.0)).with_velocity(Vec2::new(1.0, 4.0));
        assert!(clamp_floor(&mut p, 500.0, 0.5));
        assert_eq!(p.pos.y, 500.0);
        assert_eq!(p.vel.y, -2.0);
        assert_eq!(p.vel.x, 1.0);
    }

    #[test]
    fn floor_ignores_points_above() {
        let mut p = Point::new(Vec2::new(0.0f64, 499.0)).with_velocity(Vec2::new(0.0, 4.0));
        assert!(!clamp_floor(&mut p, 500.0, 1.0));
        assert_eq!(p.vel.y, 4.0);
    }

    #[test]
    fn resting_on_floor_does_not_flip_upward_motion() {
        let mut p = Point::new(Vec2::new(0.0f64, 500.0)).with_velocity(Vec2::new(0.0, -3.0));
        clamp_floor(&mut p, 500.0, 1.0);
        assert_eq!(p.vel.y, -3.0);
    }

    #[test]
    fn sloped_obstacle_slides_point() {
        let config: SimConfig<f64> = SimConfig::new().with_restitution(0.5).with_tangential_keep(1.0);
        let ramp = Segment::new(Vec2::new(0.0, 100.0), Vec2::new(100.0, 200.0));
        let from = Vec2::new(50.0, 140.0);
        let mut p = Point::new(Vec2::new(50.0, 160.0)).with_velocity(Vec2::new(0.0, 20.0));
        assert!(collide_segment(from, &mut p, &ramp, &config));

        // Back on the upper side of the ramp, just off its surface.
        assert!(p.pos.y < 150.0, "pos = {:?}", p.pos);
        assert_eq!(side_of_line(p.pos, &ramp, false), side_of_line(from, &ramp, false));
        // Tangential component survives: the point slides down-slope (+x).
        assert!(p.vel.x > 0.0, "vel = {:?}", p.vel);
        let tangent = ramp.delta().normalize();
        assert!((p.vel.dot(tangent) - 20.0 * tangent.y).abs() < 1e-9);
    }

    #[test]
    fn vertical_wall_reflects() {
        let config: SimConfig<f64> = SimConfig::new();
        let wall = Segment::new(Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0));
        let mut p = Point::new(Vec2::new(104.0, 50.0)).with_velocity(Vec2::new(40.0, 0.0));
        assert!(collide_segment(Vec2::new(96.0, 50.0), &mut p, &wall, &config));
        assert_eq!(p.pos, Vec2::new(99.5, 50.0));
        assert_eq!(p.vel, Vec2::new(-40.0, 0.0));
    }

    #[test]
    fn move_outside_span_is_ignored() {
        let config: SimConfig<f64> = SimConfig::new();
        let ledge = Segment::new(Vec2::new(0.0, 100.0), Vec2::new(10.0, 100.0));
        let mut p = Point::new(Vec2::new(50.0, 110.0));
        assert!(!collide_segment(Vec2::new(50.0, 90.0), &mut p, &ledge, &config));
        assert_eq!(p.pos, Vec2::new(50.0, 110.0));
    }

    #[test]
    fn resolver_skips_fixed_points() {
        let config: SimConfig<f64> = SimConfig::new().with_floor(Some(10.0));
        let prev = [Point::fixed(Vec2::new(0.0, 20.0)), Point::new(Vec2::new(5.0, 9.0))];
        let mut next = [Point::fixed(Vec2::new(0.0, 20.0)), Point::new(Vec2::new(5.0, 12.0))];
        let resolver = CollisionResolver::new();
        assert_eq!(resolver.resolve(&prev, &mut next, &config, None), 1);
        assert_eq!(next[0].pos.y, 20.0);
        assert_eq!(next[1].pos.y, 10.0);
    }
}
