//! Read-only per-frame output for renderers.

use crate::color::Color;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A spring as the renderer sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringView {
    pub a: usize,
    pub b: usize,
    pub color: Color,
}

/// A ball load as the renderer sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallView<F: Float> {
    pub pos: Vec2<F>,
    pub radius: F,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<F: Float> {
    pub positions: AllocVec<Vec2<F>>,
    pub springs: AllocVec<SpringView>,
    pub balls: AllocVec<BallView<F>>,
    pub selected: Option<usize>,
}

/// Display-side easing: each frame, drawn positions move a fixed fraction
/// of the way toward the simulated ones. Physics never reads these.
#[derive(Clone, Debug)]
pub struct Smoother<F: Float> {
    rate: F,
    positions: AllocVec<Vec2<F>>,
}

impl<F: Float> Smoother<F> {
    /// `rate` is the fraction of the remaining gap closed per frame.
    pub fn new(rate: F) -> Self {
        Smoother { rate, positions: AllocVec::new() }
    }

    /// Ease toward `target`. Points that appeared since the last call (from
    /// fracture) start at their simulated position.
    pub fn update(&mut self, target: &[Vec2<F>]) -> &[Vec2<F>] {
        let known = self.positions.len().min(target.len());
        for (shown, &goal) in self.positions.iter_mut().zip(target.iter()) {
            *shown = shown.lerp(goal, self.rate);
        }
        self.positions.truncate(target.len());
        self.positions.extend_from_slice(&target[known..]);
        &self.positions
    }

    pub fn positions(&self) -> &[Vec2<F>] {
        &self.positions
    }
}

impl<F: Float> Default for Smoother<F> {
    fn default() -> Self {
        Self::new(F::from_f32(0.4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoother_eases_and_grows() {
        let mut s = Smoother::new(0.5f64);
        s.update(&[Vec2::new(0.0, 0.0)]);
        let shown = s.update(&[Vec2::new(10.0, 0.0), Vec2::new(3.0, 3.0)]);
        assert_eq!(shown[0], Vec2::new(5.0, 0.0));
        assert_eq!(shown[1], Vec2::new(3.0, 3.0));
        assert_eq!(s.positions().len(), 2);
    }
}
