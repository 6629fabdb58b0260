//! Simulation state and the per-frame orchestrator.

use crate::collision::CollisionResolver;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::fracture::{fracture_step, stress_color, FractureEvent};
use crate::geometry::Segment;
use crate::integrator::Integrator;
use crate::interaction::{InteractionController, PointerInput};
use crate::load::{update_balls, Ball};
use crate::network::NetworkBuilder;
use crate::observer::StepObserver;
use crate::point::Point;
use crate::snapshot::{BallView, Snapshot, SpringView};
use crate::spring::Spring;
use alloc::collections::BTreeSet;
use alloc::vec::Vec as AllocVec;

/// External input for one rendered frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput<F: Float> {
    pub pointer: PointerInput<F>,
    /// Held this frame: multiply sim speed by the speed step.
    pub speed_up: bool,
    /// Held this frame: divide sim speed by the speed step.
    pub slow_down: bool,
}

impl<F: Float> FrameInput<F> {
    pub fn pointer(pointer: PointerInput<F>) -> Self {
        FrameInput { pointer, speed_up: false, slow_down: false }
    }
}

/// What happened during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub substeps: usize,
    pub fractures: usize,
    pub contacts: usize,
}

/// Supplies one [`FrameInput`] per frame; `None` stops the loop.
pub trait InputSource<F: Float> {
    fn next_frame(&mut self) -> Option<FrameInput<F>>;
}

impl<F: Float, I: Iterator<Item = FrameInput<F>>> InputSource<F> for I {
    fn next_frame(&mut self) -> Option<FrameInput<F>> {
        self.next()
    }
}

/// Receives the snapshot after every frame.
pub trait FrameSink<F: Float> {
    fn present(&mut self, snapshot: &Snapshot<F>);
}

/// The single live simulation: points, springs, loads, selection and tunables.
///
/// Points are only ever appended, so an index stays valid for the whole run.
/// Each substep reads the current point buffer and writes the next one, then
/// swaps them.
pub struct Simulation<F: Float> {
    points: AllocVec<Point<F>>,
    next: AllocVec<Point<F>>,
    springs: AllocVec<Spring<F>>,
    balls: AllocVec<Ball<F>>,
    config: SimConfig<F>,
    sim_speed: F,
    integrator: Integrator<F>,
    collisions: CollisionResolver<F>,
    interaction: InteractionController<F>,
    pointer: PointerInput<F>,
    frame: u64,
}

impl<F: Float> Simulation<F> {
    /// Validate and take ownership of a point set and spring set.
    pub fn new(
        points: AllocVec<Point<F>>,
        springs: AllocVec<Spring<F>>,
        config: SimConfig<F>,
    ) -> Result<Self, SimError> {
        config.validate()?;
        if points.is_empty() {
            return Err(SimError::EmptyLayout);
        }
        if let Some(index) = points.iter().position(|p| !(p.mass.is_finite() && p.mass > F::zero())) {
            return Err(SimError::InvalidMass { index });
        }
        validate_springs(&springs, points.len())?;

        let sim_speed = config.sim_speed;
        Ok(Simulation {
            next: AllocVec::with_capacity(points.len()),
            points,
            springs,
            balls: AllocVec::new(),
            config,
            sim_speed,
            integrator: Integrator::new(),
            collisions: CollisionResolver::new(),
            interaction: InteractionController::new(),
            pointer: PointerInput::default(),
            frame: 0,
        })
    }

    /// Connect `points` with every spring shorter than `threshold`, tagging
    /// springs fully below `ground_line` as road, and build a simulation.
    pub fn from_layout(
        points: AllocVec<Point<F>>,
        threshold: F,
        ground_line: F,
        config: SimConfig<F>,
    ) -> Result<Self, SimError> {
        let springs = NetworkBuilder::new(threshold)
            .with_ground_line(ground_line)
            .build(&points)?;
        Self::new(points, springs, config)
    }

    /// Add a static obstacle segment.
    pub fn add_obstacle(&mut self, segment: Segment<F>) {
        self.collisions.add_obstacle(segment);
    }

    /// Add a ball load.
    pub fn add_ball(&mut self, ball: Ball<F>) -> Result<usize, SimError> {
        if !(ball.mass.is_finite() && ball.mass > F::zero()) {
            return Err(SimError::InvalidMass { index: self.balls.len() });
        }
        if !(ball.radius.is_finite() && ball.radius > F::zero()) {
            return Err(SimError::InvalidThreshold);
        }
        self.balls.push(ball);
        Ok(self.balls.len() - 1)
    }

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn balls(&self) -> &[Ball<F>] { &self.balls }
    pub fn obstacles(&self) -> &[Segment<F>] { self.collisions.obstacles() }
    pub fn config(&self) -> &SimConfig<F> { &self.config }
    pub fn sim_speed(&self) -> F { self.sim_speed }
    pub fn selected(&self) -> Option<usize> { self.interaction.selected() }
    pub fn frame(&self) -> u64 { self.frame }

    /// Mutable access to a point, e.g. to give it an initial velocity.
    pub fn point_mut(&mut self, index: usize) -> &mut Point<F> {
        &mut self.points[index]
    }

    /// Run one physics substep: ball loads, integration, drag override,
    /// collision, then at most one fracture.
    ///
    /// Returns the fracture committed this substep (if any) and the number
    /// of collision contacts.
    pub fn substep(&mut self) -> (Option<FractureEvent<F>>, usize) {
        let kinematic = self.interaction.selected();

        update_balls(&mut self.balls, &mut self.points, &self.springs, &self.config, self.sim_speed);
        self.integrator.step(
            &self.points,
            &mut self.next,
            &self.springs,
            &self.config,
            self.sim_speed,
            kinematic,
        );
        self.interaction.apply(&mut self.next, &self.pointer, self.sim_speed);
        let contacts = self.collisions.resolve(&self.points, &mut self.next, &self.config, kinematic);
        core::mem::swap(&mut self.points, &mut self.next);

        let event = fracture_step(&mut self.points, &mut self.springs, &self.config);
        (event, contacts)
    }

    /// Advance one rendered frame: apply speed keys, resolve selection, then
    /// run the configured number of substeps.
    pub fn advance_frame<O: StepObserver<F>>(&mut self, input: &FrameInput<F>, observer: &mut O) -> FrameReport {
        if input.speed_up {
            self.sim_speed = self.sim_speed * self.config.speed_step;
        }
        if input.slow_down {
            self.sim_speed = self.sim_speed / self.config.speed_step;
        }
        self.pointer = input.pointer;
        self.interaction.begin_frame(&input.pointer, &self.points, self.config.pick_radius);

        let mut report = FrameReport { substeps: self.config.substeps, ..FrameReport::default() };
        for i in 0..self.config.substeps {
            let (event, contacts) = self.substep();
            report.contacts += contacts;
            if let Some(event) = event {
                report.fractures += 1;
                observer.on_fracture(&event);
            }
            observer.on_substep(i, contacts);
        }

        self.interaction.end_frame(&input.pointer);
        self.frame += 1;
        tracing::trace!(
            frame = self.frame,
            points = self.points.len(),
            springs = self.springs.len(),
            fractures = report.fractures,
            "frame complete"
        );
        observer.on_frame_complete(self.frame);
        report
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> Snapshot<F> {
        let span = self.config.stress_color_span;
        Snapshot {
            positions: self.points.iter().map(|p| p.pos).collect(),
            springs: self
                .springs
                .iter()
                .map(|s| SpringView { a: s.a, b: s.b, color: stress_color(s, &self.points, span) })
                .collect(),
            balls: self.balls.iter().map(|b| BallView { pos: b.pos, radius: b.radius }).collect(),
            selected: self.interaction.selected(),
        }
    }

    /// Pull frames from `source` until it signals stop, presenting each
    /// snapshot to `sink`. Returns the number of frames run.
    pub fn run<S, K, O>(&mut self, source: &mut S, sink: &mut K, observer: &mut O) -> u64
    where
        S: InputSource<F>,
        K: FrameSink<F>,
        O: StepObserver<F>,
    {
        let mut frames = 0;
        while let Some(input) = source.next_frame() {
            self.advance_frame(&input, observer);
            sink.present(&self.snapshot());
            frames += 1;
        }
        tracing::debug!(frames, "input source stopped");
        frames
    }
}

fn validate_springs<F: Float>(springs: &[Spring<F>], count: usize) -> Result<(), SimError> {
    let mut seen = BTreeSet::new();
    for s in springs {
        for index in [s.a, s.b] {
            if index >= count {
                return Err(SimError::PointOutOfBounds { index, count });
            }
        }
        if s.a == s.b {
            return Err(SimError::DegenerateSpring { index: s.a });
        }
        if !seen.insert((s.a.min(s.b), s.a.max(s.b))) {
            return Err(SimError::DuplicateSpring { a: s.a, b: s.b });
        }
    }
    Ok(())
}
