//! Stress monitoring and runtime spring fracture.

use crate::color::Color;
use crate::config::SimConfig;
use crate::float::Float;
use crate::point::Point;
use crate::spring::Spring;
use alloc::vec::Vec as AllocVec;

/// One committed break.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FractureEvent<F: Float> {
    /// Slot in the spring list; now holds the replacement spring.
    pub slot: usize,
    /// Endpoints of the broken spring.
    pub broken: (usize, usize),
    /// Newly created endpoints of the replacement spring.
    pub clones: (usize, usize),
    /// Stress that triggered the break.
    pub stress: F,
}

/// First spring, in list order, whose stress exceeds `threshold`. Springs
/// that are themselves the product of a fracture are skipped.
pub fn find_overstressed<F: Float>(
    points: &[Point<F>],
    springs: &[Spring<F>],
    threshold: F,
) -> Option<(usize, F)> {
    springs
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_fractured())
        .map(|(slot, s)| (slot, s.stress(points)))
        .find(|&(_, stress)| stress > threshold)
}

/// Break the spring in `slot`: clone both endpoints, connect the clones with
/// a spring of the same rest length and material, and put that spring in the
/// broken one's slot. Existing point indices are never disturbed.
///
/// The replacement starts at the same stress as the broken spring, so it is
/// marked fractured and never selected again.
pub fn break_spring<F: Float>(
    points: &mut AllocVec<Point<F>>,
    springs: &mut [Spring<F>],
    slot: usize,
) -> FractureEvent<F> {
    let old = springs[slot];
    let stress = old.stress(points);

    let (split_a, split_b) = (points[old.a].split(), points[old.b].split());
    let clone_a = points.len();
    points.push(split_a);
    let clone_b = points.len();
    points.push(split_b);

    springs[slot] = old.replacement(clone_a, clone_b);

    FractureEvent {
        slot,
        broken: (old.a, old.b),
        clones: (clone_a, clone_b),
        stress,
    }
}

/// Commit at most one break this tick. Further overstressed springs wait
/// for later ticks.
pub fn fracture_step<F: Float>(
    points: &mut AllocVec<Point<F>>,
    springs: &mut [Spring<F>],
    config: &SimConfig<F>,
) -> Option<FractureEvent<F>> {
    if config.fracture_budget == 0 {
        return None;
    }
    let (slot, _) = find_overstressed(points, springs, config.fracture_threshold)?;
    let event = break_spring(points, springs, slot);
    tracing::debug!(
        slot = event.slot,
        a = event.broken.0,
        b = event.broken.1,
        stress = ?event.stress,
        "spring fractured"
    );
    Some(event)
}

/// Stress mapped to `[0, 1]`, saturating at `span`.
pub fn stress_ratio<F: Float>(stress: F, span: F) -> F {
    (stress / span).clamp(F::zero(), F::one())
}

/// Display colour for a spring: its material colour blended toward red by
/// the clamped stress ratio.
pub fn stress_color<F: Float>(spring: &Spring<F>, points: &[Point<F>], span: F) -> Color {
    let ratio = stress_ratio(spring.stress(points), span);
    spring.material.base_color().lerp(Color::STRESS, ratio.to_f32())
}
