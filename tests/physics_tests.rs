use trussy::{
    layout, FrameInput, Material, NoOpStepObserver, Point, PointerInput, SimConfig, Simulation, Spring, Vec2,
};

fn idle() -> FrameInput<f64> {
    FrameInput::pointer(PointerInput::new(Vec2::new(-1000.0, -1000.0), false))
}

#[test]
fn fixed_points_never_move() {
    let points = layout::truss(Vec2::new(640.0f64, 360.0), 100.0, 100.0, 5);
    let pinned: Vec<(usize, Vec2<f64>)> =
        points.iter().enumerate().filter(|(_, p)| p.fixed).map(|(i, p)| (i, p.pos)).collect();
    assert_eq!(pinned.len(), 2);

    let mut sim = Simulation::from_layout(points, 125.0, 360.0, SimConfig::new()).unwrap();
    for _ in 0..300 {
        sim.advance_frame(&idle(), &mut NoOpStepObserver);
        for &(i, pos) in &pinned {
            assert_eq!(sim.points()[i].pos, pos, "fixed point {} moved", i);
            assert_eq!(sim.points()[i].vel, Vec2::zero());
        }
    }
}

#[test]
fn hanging_spring_settles_at_equilibrium() {
    let points = vec![Point::fixed(Vec2::new(0.0f64, 0.0)), Point::new(Vec2::new(0.0, 110.0))];
    let springs = vec![Spring::new(0, 1, 100.0, Material::Wood)];
    let config = SimConfig::new().with_fracture_budget(0).with_floor(None);
    let expected = 100.0 + config.gravity.y / config.stiffness;

    let mut sim = Simulation::new(points, springs, config).unwrap();
    for _ in 0..1000 {
        sim.advance_frame(&idle(), &mut NoOpStepObserver);
        let p = sim.points()[1];
        assert!(p.pos.is_finite() && p.pos.y.abs() < 1000.0, "diverged: {:?}", p.pos);
    }
    let y = sim.points()[1].pos.y;
    assert!((y - expected).abs() < 1e-2, "settled at {}, expected {}", y, expected);
    assert!(sim.points()[1].pos.x.abs() < 1e-9);
}

#[test]
fn floor_impact_reflects_and_scales_velocity() {
    let config = SimConfig::new().with_floor(Some(500.0)).with_restitution(0.5);
    let points = vec![Point::new(Vec2::new(100.0f64, 480.0))];
    let mut sim = Simulation::new(points, vec![], config.clone()).unwrap();
    let speed = sim.sim_speed();

    let mut hit = false;
    for _ in 0..10_000 {
        let before = sim.points()[0];
        sim.substep();
        let after = sim.points()[0];
        if after.pos.y >= 500.0 {
            assert_eq!(after.pos.y, 500.0);
            let incoming = (before.vel.y + config.gravity.y * speed) * config.damping;
            let expected = -incoming * config.restitution;
            assert!(
                (after.vel.y - expected).abs() < 1e-12,
                "vy {} expected {}",
                after.vel.y,
                expected
            );
            hit = true;
            break;
        }
    }
    assert!(hit, "point never reached the floor");
}

#[test]
fn point_stays_above_floor() {
    let config = SimConfig::new().with_floor(Some(500.0)).with_restitution(0.5);
    let points = vec![Point::new(Vec2::new(100.0f64, 300.0))];
    let mut sim = Simulation::new(points, vec![], config).unwrap();
    for _ in 0..2000 {
        sim.advance_frame(&idle(), &mut NoOpStepObserver);
        assert!(sim.points()[0].pos.y <= 500.0);
    }
}

#[test]
fn zero_substeps_leave_state_untouched() {
    let points = layout::truss(Vec2::new(640.0f64, 360.0), 100.0, 100.0, 5);
    let mut sim =
        Simulation::from_layout(points, 125.0, 360.0, SimConfig::new().with_substeps(0)).unwrap();
    let before = sim.snapshot();
    let report = sim.advance_frame(&idle(), &mut NoOpStepObserver);
    assert_eq!(report.substeps, 0);
    assert_eq!(sim.snapshot(), before);
    assert_eq!(sim.frame(), 1);
}

#[test]
fn result_independent_of_point_order() {
    let config = SimConfig::new().with_floor(None).with_fracture_budget(0);
    let a = Vec2::new(0.0f64, 0.0);
    let b = Vec2::new(30.0, 5.0);

    let forward = vec![Point::new(a), Point::new(b)];
    let mut sim1 = Simulation::new(forward, vec![Spring::new(0, 1, 25.0, Material::Wood)], config.clone()).unwrap();
    let reversed = vec![Point::new(b), Point::new(a)];
    let mut sim2 = Simulation::new(reversed, vec![Spring::new(1, 0, 25.0, Material::Wood)], config).unwrap();

    for _ in 0..20 {
        sim1.advance_frame(&idle(), &mut NoOpStepObserver);
        sim2.advance_frame(&idle(), &mut NoOpStepObserver);
    }
    let (p1, p2) = (sim1.points(), sim2.points());
    assert!((p1[0].pos - p2[1].pos).length() < 1e-9);
    assert!((p1[1].pos - p2[0].pos).length() < 1e-9);
}
