use std::collections::BTreeSet;

use trussy::{layout, Material, NetworkBuilder, Point, SimError, Vec2};

#[test]
fn rest_length_matches_initial_distance() {
    let points = layout::grid(Vec2::new(0.0f64, 0.0), 3, 40.0);
    let springs = NetworkBuilder::new(60.0).build(&points).unwrap();
    assert!(!springs.is_empty());
    for s in &springs {
        let d = points[s.a].pos.distance(points[s.b].pos);
        assert_eq!(s.rest_length(), d, "spring {}-{}", s.a, s.b);
        assert!(d < 60.0);
    }
}

#[test]
fn no_pair_connected_twice() {
    let points = layout::grid(Vec2::new(0.0f64, 0.0), 2, 10.0);
    let springs = NetworkBuilder::new(25.0).build(&points).unwrap();
    let mut seen = BTreeSet::new();
    for s in &springs {
        assert_ne!(s.a, s.b);
        assert!(seen.insert((s.a.min(s.b), s.a.max(s.b))), "duplicate {}-{}", s.a, s.b);
    }
}

#[test]
fn every_close_pair_is_connected() {
    let points = layout::grid(Vec2::new(0.0f64, 0.0), 2, 10.0);
    let springs = NetworkBuilder::new(15.0).build(&points).unwrap();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let close = points[i].pos.distance(points[j].pos) < 15.0;
            let linked = springs.iter().any(|s| s.connects(i, j));
            assert_eq!(close, linked, "pair {}-{}", i, j);
        }
    }
}

#[test]
fn truss_road_springs_run_along_the_deck() {
    let points = layout::truss(Vec2::new(640.0f32, 360.0), 100.0, 100.0, 5);
    let springs = NetworkBuilder::new(125.0).with_ground_line(360.0).build(&points).unwrap();
    let road: Vec<_> = springs.iter().filter(|s| s.material == Material::Road).collect();
    assert_eq!(road.len(), 5);
    for s in road {
        assert!(points[s.a].pos.y > 360.0 && points[s.b].pos.y > 360.0);
    }
}

#[test]
fn single_point_has_no_springs() {
    let points = vec![Point::new(Vec2::new(1.0f64, 1.0))];
    assert!(NetworkBuilder::new(100.0).build(&points).unwrap().is_empty());
}

#[test]
fn empty_layout_rejected() {
    let points: Vec<Point<f64>> = Vec::new();
    assert_eq!(NetworkBuilder::new(10.0).build(&points).err(), Some(SimError::EmptyLayout));
}
