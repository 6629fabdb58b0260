use rand::rngs::SmallRng;
use rand::SeedableRng;
use trussy::{
    layout, Ball, FrameInput, NoOpStepObserver, PointerInput, Segment, SimConfig, SimError, Simulation, Smoother,
    Snapshot, Vec2,
};
use wasm_bindgen::prelude::*;

fn js_error(err: SimError) -> JsError {
    JsError::new(&err.to_string())
}

fn flatten(points: &[Vec2<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

fn spring_indices(snapshot: &Snapshot<f32>) -> Vec<u32> {
    let mut out = Vec::with_capacity(snapshot.springs.len() * 2);
    for s in &snapshot.springs {
        out.push(s.a as u32);
        out.push(s.b as u32);
    }
    out
}

fn spring_colors(snapshot: &Snapshot<f32>) -> Vec<u8> {
    let mut out = Vec::with_capacity(snapshot.springs.len() * 3);
    for s in &snapshot.springs {
        out.extend_from_slice(&s.color.to_rgb8());
    }
    out
}

/// Shared per-frame plumbing for every demo: input, stepping and easing.
struct Scene {
    sim: Simulation<f32>,
    smoother: Smoother<f32>,
    snapshot: Snapshot<f32>,
}

impl Scene {
    fn new(sim: Simulation<f32>) -> Self {
        let snapshot = sim.snapshot();
        let mut smoother = Smoother::default();
        smoother.update(&snapshot.positions);
        Scene { sim, smoother, snapshot }
    }

    fn update(&mut self, x: f32, y: f32, pressed: bool, speed_up: bool, slow_down: bool) -> usize {
        let input = FrameInput {
            pointer: PointerInput::new(Vec2::new(x, y), pressed),
            speed_up,
            slow_down,
        };
        let report = self.sim.advance_frame(&input, &mut NoOpStepObserver);
        self.snapshot = self.sim.snapshot();
        self.smoother.update(&self.snapshot.positions);
        report.fractures
    }
}

// ---- Bridge Demo ----

#[wasm_bindgen]
pub struct BridgeDemo {
    scene: Scene,
}

#[wasm_bindgen]
impl BridgeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(bays: usize) -> Result<BridgeDemo, JsError> {
        let points = layout::truss(Vec2::new(640.0f32, 360.0), 100.0, 100.0, bays);
        let mut sim = Simulation::from_layout(points, 125.0, 360.0, SimConfig::new()).map_err(js_error)?;
        sim.add_obstacle(Segment::new(Vec2::new(0.0, 420.0), Vec2::new(200.0, 500.0)));
        sim.add_obstacle(Segment::new(Vec2::new(1080.0, 500.0), Vec2::new(1280.0, 420.0)));
        Ok(BridgeDemo { scene: Scene::new(sim) })
    }

    /// Drop a ball onto the deck at `x`.
    pub fn drop_ball(&mut self, x: f32, radius: f32, mass: f32) -> Result<usize, JsError> {
        let ball = Ball::new(Vec2::new(x, 300.0), radius, mass, Vec2::new(0.5, 2.0));
        self.scene.sim.add_ball(ball).map_err(js_error)
    }

    /// Advance one frame. Returns the number of springs that broke.
    pub fn update(&mut self, x: f32, y: f32, pressed: bool, speed_up: bool, slow_down: bool) -> usize {
        self.scene.update(x, y, pressed, speed_up, slow_down)
    }

    /// Returns flat [x0, y0, x1, y1, ...] eased display positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.scene.smoother.positions())
    }

    /// Returns flat [a0, b0, a1, b1, ...] point indices per spring
    pub fn springs(&self) -> Vec<u32> {
        spring_indices(&self.scene.snapshot)
    }

    /// Returns flat [r0, g0, b0, r1, ...] stress colours per spring
    pub fn spring_colors(&self) -> Vec<u8> {
        spring_colors(&self.scene.snapshot)
    }

    /// Returns flat [x0, y0, r0, x1, ...] per ball
    pub fn balls(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.scene.snapshot.balls.len() * 3);
        for b in &self.scene.snapshot.balls {
            out.extend_from_slice(&[b.pos.x, b.pos.y, b.radius]);
        }
        out
    }

    /// Returns flat [x0, y0, x1, y1] per obstacle
    pub fn obstacles(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for s in self.scene.sim.obstacles() {
            out.extend_from_slice(&[s.start.x, s.start.y, s.end.x, s.end.y]);
        }
        out
    }

    /// Index of the held point, or -1.
    pub fn selected(&self) -> i32 {
        self.scene.snapshot.selected.map_or(-1, |i| i as i32)
    }

    pub fn sim_speed(&self) -> f32 {
        self.scene.sim.sim_speed()
    }
}

// ---- Lattice Demo ----

#[wasm_bindgen]
pub struct LatticeDemo {
    scene: Scene,
}

#[wasm_bindgen]
impl LatticeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: usize, spacing: f32, seed: u64) -> Result<LatticeDemo, JsError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut points = layout::grid(Vec2::new(640.0f32, 300.0), resolution, spacing);
        layout::jitter(&mut rng, &mut points, spacing * 0.1);
        let threshold = spacing * 1.5;
        let sim = Simulation::from_layout(points, threshold, f32::MAX, SimConfig::new()).map_err(js_error)?;
        Ok(LatticeDemo { scene: Scene::new(sim) })
    }

    pub fn update(&mut self, x: f32, y: f32, pressed: bool, speed_up: bool, slow_down: bool) -> usize {
        self.scene.update(x, y, pressed, speed_up, slow_down)
    }

    /// Returns flat [x0, y0, x1, y1, ...] eased display positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.scene.smoother.positions())
    }

    pub fn springs(&self) -> Vec<u32> {
        spring_indices(&self.scene.snapshot)
    }

    pub fn spring_colors(&self) -> Vec<u8> {
        spring_colors(&self.scene.snapshot)
    }

    pub fn point_count(&self) -> usize {
        self.scene.snapshot.positions.len()
    }
}
