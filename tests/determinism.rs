use rand::rngs::SmallRng;
use rand::SeedableRng;
use trussy::{layout, Ball, FrameInput, NoOpStepObserver, PointerInput, SimConfig, Simulation, Snapshot, Vec2};

fn inputs() -> Vec<FrameInput<f64>> {
    let mut frames = Vec::new();
    for i in 0..40 {
        let pos = Vec2::new(600.0 + i as f64 * 2.0, 320.0 - i as f64);
        frames.push(FrameInput::pointer(PointerInput::new(pos, i < 25)));
    }
    frames[5].speed_up = true;
    frames[30].slow_down = true;
    frames
}

fn run_grid(seed: u64) -> (Snapshot<f64>, Vec<trussy::Point<f64>>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut points = layout::grid(Vec2::new(600.0f64, 320.0), 3, 20.0);
    layout::jitter(&mut rng, &mut points, 2.0);
    let mut sim = Simulation::from_layout(points, 30.0, 1000.0, SimConfig::new()).unwrap();
    for input in inputs() {
        sim.advance_frame(&input, &mut NoOpStepObserver);
    }
    (sim.snapshot(), sim.points().to_vec())
}

#[test]
fn grid_deterministic() {
    let results: Vec<_> = (0..3).map(|_| run_grid(7)).collect();
    for r in &results[1..] {
        assert_eq!(results[0].0, r.0);
        assert_eq!(results[0].1, r.1);
    }
}

#[test]
fn seed_changes_layout() {
    let (a, _) = run_grid(1);
    let (b, _) = run_grid(2);
    assert_ne!(a.positions, b.positions);
}

#[test]
fn bridge_with_ball_deterministic() {
    let results: Vec<_> = (0..3)
        .map(|_| {
            let points = layout::truss(Vec2::new(640.0f32, 360.0), 100.0, 100.0, 5);
            let mut sim = Simulation::from_layout(points, 125.0, 360.0, SimConfig::new()).unwrap();
            sim.add_ball(Ball::new(Vec2::new(400.0, 395.0), 10.0, 5.0, Vec2::new(1.0, 2.0))).unwrap();
            let idle = FrameInput::pointer(PointerInput::new(Vec2::zero(), false));
            for _ in 0..120 {
                sim.advance_frame(&idle, &mut NoOpStepObserver);
            }
            sim.snapshot()
        })
        .collect();

    for r in &results[1..] {
        assert_eq!(results[0], *r);
    }
}
