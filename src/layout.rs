//! Initial point layouts: square lattices, bridge trusses, random jitter.

use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// A `(2 * resolution + 1)` square lattice of free points centred on `center`.
///
/// Points are ordered column by column (x outer, y inner).
pub fn grid<F: Float>(center: Vec2<F>, resolution: usize, spacing: F) -> AllocVec<Point<F>> {
    let side = 2 * resolution + 1;
    let r = F::from_usize(resolution);
    let mut points = AllocVec::with_capacity(side * side);
    for col in 0..side {
        for row in 0..side {
            let x = center.x + (F::from_usize(col) - r) * spacing;
            let y = center.y + (F::from_usize(row) - r) * spacing;
            points.push(Point::new(Vec2::new(x, y)));
        }
    }
    points
}

/// A simple bridge truss with `bays` panels, fixed at both bottom ends.
///
/// The bottom chord sits `height / 2` below `center` (screen coordinates) and
/// carries `bays + 1` points; the top chord sits `height / 2` above with one
/// point per bay, offset half a bay. Both ends of the bottom chord are pinned.
pub fn truss<F: Float>(center: Vec2<F>, bay: F, height: F, bays: usize) -> AllocVec<Point<F>> {
    let bays = bays.max(1);
    let half_height = height * F::half();
    let left = center.x - bay * F::from_usize(bays) * F::half();
    let bottom = center.y + half_height;
    let top = center.y - half_height;

    let mut points = AllocVec::with_capacity(2 * bays + 1);
    points.push(Point::fixed(Vec2::new(left, bottom)));
    for i in 1..=bays {
        let i_f = F::from_usize(i);
        if i != bays {
            points.push(Point::new(Vec2::new(left + i_f * bay, bottom)));
        }
        points.push(Point::new(Vec2::new(left + (i_f - F::half()) * bay, top)));
    }
    points.push(Point::fixed(Vec2::new(left + F::from_usize(bays) * bay, bottom)));
    points
}

/// Nudge every free point by a uniform random offset in `[-amount, amount]`
/// on each axis. Fixed points stay where they are.
pub fn jitter<F: Float, R: Rng + ?Sized>(rng: &mut R, points: &mut [Point<F>], amount: F) {
    for p in points.iter_mut().filter(|p| !p.fixed) {
        let dx = F::from_f32(rng.gen_range(-1.0f32..=1.0)) * amount;
        let dy = F::from_f32(rng.gen_range(-1.0f32..=1.0)) * amount;
        p.pos = p.pos + Vec2::new(dx, dy);
    }
}
