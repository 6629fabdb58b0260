//! Tunables for the simulation.

use crate::error::SimError;
use crate::float::Float;
use crate::vec::Vec2;

/// Global simulation tunables.
///
/// Defaults are tuned for screen-space coordinates (pixels, y downward) and
/// ten substeps per rendered frame.
///
/// # Builder Pattern
/// ```
/// use trussy::config::SimConfig;
/// use trussy::vec::Vec2;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_gravity(Vec2::new(0.0, 2.0))
///     .with_stiffness(60.0)
///     .with_damping(0.998)
///     .with_substeps(10)
///     .with_floor(Some(550.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Constant acceleration applied to every free point. Default: (0, 2).
    pub gravity: Vec2<F>,
    /// Hooke coefficient shared by all springs. Default: 60.
    pub stiffness: F,
    /// Velocity multiplier applied each substep, in (0, 1). Default: 0.998.
    pub damping: F,
    /// Gap below which points repel at full strength. Default: 20.
    pub close_range: F,
    /// Extra distance past `close_range` where repulsion fades out. Default: 5.
    pub close_margin: F,
    /// Smallest gap used in the inverse-gap law. Default: 0.2.
    pub repulsion_epsilon: F,
    /// Cap on repulsive acceleration. Default: 5.
    pub max_repulsion: F,
    /// Stress above which a spring breaks. Default: 5.
    pub fracture_threshold: F,
    /// Breaks allowed per substep, either 0 (off) or 1. Default: 1.
    pub fracture_budget: usize,
    /// Stress at which the display colour is fully saturated. Default: 255/220.
    pub stress_color_span: F,
    /// Physics substeps per rendered frame. Default: 10.
    pub substeps: usize,
    /// Timestep of one substep. Default: 0.1.
    pub dt: F,
    /// Initial simulation speed scalar. Default: 0.01.
    pub sim_speed: F,
    /// Factor applied to `sim_speed` by the speed keys. Default: 1.1.
    pub speed_step: F,
    /// Pointer pick radius. Default: 8.
    pub pick_radius: F,
    /// Floor height, if any. Default: Some(550).
    pub floor: Option<F>,
    /// Fraction of normal velocity kept (and reversed) on impact. Default: 1.
    pub restitution: F,
    /// Fraction of tangential velocity kept on obstacle contact. Default: 0.9.
    pub tangential_keep: F,
    /// How far past an obstacle a colliding point is placed. Default: 0.5.
    pub obstacle_offset: F,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(2.0)),
            stiffness: F::from_f32(60.0),
            damping: F::from_f32(0.998),
            close_range: F::from_f32(20.0),
            close_margin: F::from_f32(5.0),
            repulsion_epsilon: F::from_f32(0.2),
            max_repulsion: F::from_f32(5.0),
            fracture_threshold: F::from_f32(5.0),
            fracture_budget: 1,
            stress_color_span: F::from_f32(255.0 / 220.0),
            substeps: 10,
            dt: F::from_f32(0.1),
            sim_speed: F::from_f32(0.01),
            speed_step: F::from_f32(1.1),
            pick_radius: F::from_f32(8.0),
            floor: Some(F::from_f32(550.0)),
            restitution: F::one(),
            tangential_keep: F::from_f32(0.9),
            obstacle_offset: F::from_f32(0.5),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the close-range repulsion radius and its fade-out margin.
    pub fn with_close_range(mut self, radius: F, margin: F) -> Self {
        self.close_range = radius;
        self.close_margin = margin;
        self
    }

    pub fn with_max_repulsion(mut self, max_repulsion: F) -> Self {
        self.max_repulsion = max_repulsion;
        self
    }

    pub fn with_fracture_threshold(mut self, threshold: F) -> Self {
        self.fracture_threshold = threshold;
        self
    }

    /// Set the per-substep fracture budget. Anything above 1 is clamped to 1.
    pub fn with_fracture_budget(mut self, budget: usize) -> Self {
        self.fracture_budget = budget.min(1);
        self
    }

    /// Set the number of substeps per frame. Zero makes frames no-ops.
    pub fn with_substeps(mut self, substeps: usize) -> Self {
        self.substeps = substeps;
        self
    }

    /// Set the substep timestep.
    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_sim_speed(mut self, sim_speed: F) -> Self {
        self.sim_speed = sim_speed;
        self
    }

    pub fn with_pick_radius(mut self, radius: F) -> Self {
        self.pick_radius = radius;
        self
    }

    pub fn with_floor(mut self, floor: Option<F>) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_tangential_keep(mut self, keep: F) -> Self {
        self.tangential_keep = keep;
        self
    }

    /// Check every tunable against its allowed range.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = |v: F| v.is_finite() && v > F::zero();
        let unit = |v: F| v.is_finite() && v >= F::zero() && v <= F::one();

        if !positive(self.dt) {
            return Err(SimError::InvalidTimestep);
        }
        if !(self.damping.is_finite() && self.damping > F::zero() && self.damping < F::one()) {
            return Err(SimError::InvalidDamping);
        }
        let thresholds = [
            self.close_margin,
            self.repulsion_epsilon,
            self.fracture_threshold,
            self.stress_color_span,
            self.pick_radius,
            self.sim_speed,
            self.speed_step,
        ];
        if !thresholds.iter().all(|&v| positive(v))
            || !(self.close_range.is_finite() && self.close_range >= F::zero())
            || !(self.max_repulsion.is_finite() && self.max_repulsion >= F::zero())
            || !(self.stiffness.is_finite() && self.stiffness >= F::zero())
            || !self.gravity.is_finite()
            || self.fracture_budget > 1
        {
            return Err(SimError::InvalidThreshold);
        }
        if !unit(self.restitution) || !unit(self.tangential_keep) {
            return Err(SimError::InvalidRestitution);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
