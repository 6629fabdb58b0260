//! Pointer dragging: pick a point, then drive it kinematically.

use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;

/// Pointer state sampled once per rendered frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerInput<F: Float> {
    pub pos: Vec2<F>,
    pub pressed: bool,
}

impl<F: Float> PointerInput<F> {
    pub fn new(pos: Vec2<F>, pressed: bool) -> Self {
        PointerInput { pos, pressed }
    }
}

/// Whether a point is currently held by the pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { index: usize },
}

/// Two-state pick-and-drag controller.
///
/// While dragging, the held point is a kinematic body: integration and
/// collision skip it, and every substep pins it to the pointer with a
/// velocity derived from the pointer's frame-to-frame motion. Fixed points
/// can never be picked.
#[derive(Clone, Debug, Default)]
pub struct InteractionController<F: Float> {
    state: DragState,
    last_pointer: Option<Vec2<F>>,
}

impl<F: Float> InteractionController<F> {
    pub fn new() -> Self {
        InteractionController { state: DragState::Idle, last_pointer: None }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { index } => Some(index),
        }
    }

    /// Resolve selection for the coming frame: release on button up, pick
    /// the nearest free point within `pick_radius` on button down.
    pub fn begin_frame(&mut self, pointer: &PointerInput<F>, points: &[Point<F>], pick_radius: F) {
        if !pointer.pressed {
            if let DragState::Dragging { index } = self.state {
                tracing::trace!(index, "released point");
            }
            self.state = DragState::Idle;
            return;
        }
        if self.state == DragState::Idle {
            if let Some(index) = nearest_free_point(points, pointer.pos, pick_radius) {
                tracing::trace!(index, "picked point");
                self.state = DragState::Dragging { index };
            }
        }
    }

    /// Pointer displacement since the previous frame, times `sim_speed`.
    pub fn drag_velocity(&self, pointer: &PointerInput<F>, sim_speed: F) -> Vec2<F> {
        let last = self.last_pointer.unwrap_or(pointer.pos);
        (pointer.pos - last).scale(sim_speed)
    }

    /// Overwrite the held point, if any, with the pointer position and drag
    /// velocity. Called once per substep after integration.
    pub fn apply(&self, points: &mut [Point<F>], pointer: &PointerInput<F>, sim_speed: F) {
        if let Some(index) = self.selected() {
            let vel = self.drag_velocity(pointer, sim_speed);
            let point = &mut points[index];
            point.pos = pointer.pos;
            point.vel = vel;
        }
    }

    /// Remember where the pointer was, for next frame's drag velocity.
    pub fn end_frame(&mut self, pointer: &PointerInput<F>) {
        self.last_pointer = Some(pointer.pos);
    }
}

/// Index of the non-fixed point nearest `at`, if strictly within `radius`.
/// Ties go to the lower index.
pub fn nearest_free_point<F: Float>(points: &[Point<F>], at: Vec2<F>, radius: F) -> Option<usize> {
    let limit = radius * radius;
    let mut best: Option<(usize, F)> = None;
    for (i, p) in points.iter().enumerate() {
        if p.fixed {
            continue;
        }
        let d = p.pos.distance_sq(at);
        if d < limit && best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
