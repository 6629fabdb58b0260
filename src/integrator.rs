//! Force accumulation and position update for one substep.

use crate::config::SimConfig;
use crate::float::Float;
use crate::point::Point;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Integrates the point set one substep at a time.
///
/// Reads every position from the current buffer and writes results into a
/// separate output buffer, so the outcome does not depend on the order in
/// which points are visited.
#[derive(Clone, Debug, Default)]
pub struct Integrator<F: Float> {
    accel: AllocVec<Vec2<F>>,
}

impl<F: Float> Integrator<F> {
    pub fn new() -> Self {
        Integrator { accel: AllocVec::new() }
    }

    /// Accelerations computed by the last call to [`Integrator::step`] or
    /// [`Integrator::accumulate`], before speed scaling.
    pub fn accelerations(&self) -> &[Vec2<F>] {
        &self.accel
    }

    /// Gravity, spring and close-range repulsion accelerations for every
    /// point, from positions in `points`.
    pub fn accumulate(&mut self, points: &[Point<F>], springs: &[Spring<F>], config: &SimConfig<F>) {
        let n = points.len();
        self.accel.clear();
        self.accel.resize(n, config.gravity);

        for spring in springs {
            let (a, b) = (spring.a, spring.b);
            debug_assert!(a < n && b < n, "spring ({}, {}) outside {} points", a, b, n);
            let delta = points[a].pos - points[b].pos;
            let len = delta.length();
            if len.is_near_zero(F::from_f32(1e-10)) {
                continue;
            }
            // Unit vector from b toward a. Positive deviation (compressed)
            // pushes the endpoints apart, negative pulls them together.
            let dir = delta.scale(F::one() / len);
            let force = config.stiffness * (spring.rest_length() - len);
            self.accel[a] += dir.scale(force / points[a].effective_mass());
            self.accel[b] -= dir.scale(force / points[b].effective_mass());
        }

        let reach = config.close_range + config.close_margin;
        let reach_sq = reach * reach;
        let fade = F::one() / config.close_margin;
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = points[i].pos - points[j].pos;
                let dist_sq = delta.length_sq();
                if dist_sq >= reach_sq {
                    continue;
                }
                let dist = dist_sq.sqrt();
                if dist.is_near_zero(F::from_f32(1e-10)) {
                    continue; // coincident: no defined direction
                }
                let gap = (dist - config.close_range).max(config.repulsion_epsilon);
                let magnitude = (F::one() / gap - fade).max(F::zero()).min(config.max_repulsion);
                let push = delta.scale(magnitude / dist);
                self.accel[i] += push;
                self.accel[j] -= push;
            }
        }
    }

    /// Advance `current` by one substep into `next`.
    ///
    /// Fixed points and the `kinematic` point (if any) are copied through
    /// untouched; the caller drives the kinematic point itself.
    pub fn step(
        &mut self,
        current: &[Point<F>],
        next: &mut AllocVec<Point<F>>,
        springs: &[Spring<F>],
        config: &SimConfig<F>,
        sim_speed: F,
        kinematic: Option<usize>,
    ) {
        self.accumulate(current, springs, config);

        let half_dt_sq = F::half() * config.dt * config.dt;
        next.clear();
        next.extend(current.iter().zip(self.accel.iter()).enumerate().map(|(i, (p, &acc))| {
            if p.fixed || kinematic == Some(i) {
                return *p;
            }
            let acc = acc.scale(sim_speed);
            let vel = (p.vel + acc).scale(config.damping);
            let pos = p.pos + vel.scale(config.dt) + acc.scale(half_dt_sq);
            Point { pos, vel, ..*p }
        }));
    }
}
