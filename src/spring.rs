//! Springs: elastic links between two points with a fixed rest length.

use crate::color::Color;
use crate::float::Float;
use crate::point::Point;

/// What a spring is made of. Only affects display colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// Ground-level deck members; balls roll on these.
    Road,
    Wood,
}

impl Material {
    /// Unstressed display colour.
    pub fn base_color(self) -> Color {
        match self {
            Material::Road => Color::rgb(30.0, 30.0, 30.0),
            Material::Wood => Color::rgb(60.0, 60.0, 60.0),
        }
    }
}

/// An elastic link between points `a` and `b`.
///
/// A spring that replaced a broken one is marked fractured: it still pulls
/// and is still drawn, but it can never break again.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    pub material: Material,
    fractured: bool,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, material: Material) -> Self {
        Spring { a, b, rest_length, material, fractured: false }
    }

    /// Replacement for a broken spring, joining the clones of its endpoints.
    pub(crate) fn replacement(&self, a: usize, b: usize) -> Self {
        Spring { a, b, fractured: true, ..*self }
    }

    /// True if this spring was created by a fracture.
    pub fn is_fractured(&self) -> bool {
        self.fractured
    }

    /// Rest length, fixed at creation.
    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    pub fn current_length(&self, points: &[Point<F>]) -> F {
        points[self.a].pos.distance(points[self.b].pos)
    }

    /// Absolute deviation of the current length from the rest length.
    pub fn stress(&self, points: &[Point<F>]) -> F {
        (self.current_length(points) - self.rest_length).abs()
    }

    /// True if this spring joins the same unordered pair as `(a, b)`.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn stress_is_absolute_deviation() {
        let points = [Point::new(Vec2::new(0.0f64, 0.0)), Point::new(Vec2::new(0.0, 7.0))];
        let stretched = Spring::new(0, 1, 5.0, Material::Wood);
        let squashed = Spring::new(0, 1, 9.0, Material::Wood);
        assert_eq!(stretched.stress(&points), 2.0);
        assert_eq!(squashed.stress(&points), 2.0);
    }

    #[test]
    fn replacement_keeps_rest_length_and_material() {
        let s: Spring<f32> = Spring::new(3, 8, 1.5, Material::Road);
        assert!(!s.is_fractured());
        let r = s.replacement(11, 12);
        assert!(r.connects(12, 11));
        assert!(!r.connects(3, 8));
        assert_eq!(r.rest_length(), 1.5);
        assert_eq!(r.material, Material::Road);
        assert!(r.is_fractured());
    }

    #[test]
    fn road_is_darker_than_wood() {
        assert!(Material::Road.base_color().r < Material::Wood.base_color().r);
    }
}
