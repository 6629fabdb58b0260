//! Rolling ball loads that ride on `Road` springs and weigh down the deck.

use crate::config::SimConfig;
use crate::float::Float;
use crate::point::Point;
use crate::spring::{Material, Spring};
use crate::vec::Vec2;

/// Samples taken along each road spring when looking for contact.
const ROAD_SAMPLES: usize = 10;

/// A circular body that rolls along the road deck.
///
/// Balls are not part of the spring network. Each substep they are pushed
/// out of any road spring they overlap, and they add their mass to that
/// spring's endpoints in proportion to where along the spring they sit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ball<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub mass: F,
    pub radius: F,
    /// Own constant acceleration, e.g. gravity plus a push along the road.
    pub accel: Vec2<F>,
    /// Per-sample separation applied on contact. Default: 0.3.
    pub contact_push: F,
}

impl<F: Float> Ball<F> {
    pub fn new(pos: Vec2<F>, radius: F, mass: F, accel: Vec2<F>) -> Self {
        Ball {
            pos,
            vel: Vec2::zero(),
            mass,
            radius,
            accel,
            contact_push: F::from_f32(0.3),
        }
    }

    /// Resolve contact with every road spring and write the resulting loads
    /// into `points`. Returns the acceleration for this substep.
    fn contact(&mut self, points: &mut [Point<F>], springs: &[Spring<F>]) -> Vec2<F> {
        let mut accel = self.accel;
        let samples = F::from_usize(ROAD_SAMPLES);
        for spring in springs.iter().filter(|s| s.material == Material::Road) {
            let (a, b) = (points[spring.a].pos, points[spring.b].pos);
            let mut closest: Option<(F, F)> = None;
            for k in 0..ROAD_SAMPLES {
                // Weight toward `a`; k = 0 samples `b` itself.
                let w = F::from_usize(k) / samples;
                let sample = b.lerp(a, w);
                let d = self.pos.distance(sample);
                if d >= self.radius {
                    continue;
                }
                let away = (self.pos - sample).normalize().scale(self.contact_push);
                self.pos += away;
                accel += away;
                if closest.map_or(true, |(cd, _)| d < cd) {
                    closest = Some((d, w));
                }
            }
            if let Some((_, w)) = closest {
                points[spring.a].load = points[spring.a].load + self.mass * w;
                points[spring.b].load = points[spring.b].load + self.mass * (F::one() - w);
            }
        }
        accel
    }

    fn integrate(&mut self, accel: Vec2<F>, config: &SimConfig<F>, sim_speed: F) {
        let accel = accel.scale(sim_speed);
        self.vel = (self.vel + accel).scale(config.damping);
        self.pos = self.pos + self.vel.scale(config.dt) + accel.scale(F::half() * config.dt * config.dt);
    }
}

/// Advance every ball one substep and rebuild point loads.
///
/// Runs before point integration, so the loads set here feed the spring
/// force law through [`Point::effective_mass`].
pub fn update_balls<F: Float>(
    balls: &mut [Ball<F>],
    points: &mut [Point<F>],
    springs: &[Spring<F>],
    config: &SimConfig<F>,
    sim_speed: F,
) {
    for p in points.iter_mut() {
        p.load = F::zero();
    }
    for ball in balls.iter_mut() {
        if let Some(floor) = config.floor {
            let rest = floor - ball.radius;
            if ball.pos.y >= rest {
                ball.pos.y = rest;
                if ball.vel.y > F::zero() {
                    ball.vel.y = -ball.vel.y * config.restitution;
                }
            }
        }
        let accel = ball.contact(points, springs);
        ball.integrate(accel, config, sim_speed);
    }
}
