//! Step observer trait for monitoring simulation progress.

use crate::float::Float;
use crate::fracture::FractureEvent;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor the simulation (e.g., for debugging,
/// counting breaks, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver<F: Float> {
    /// Called after each substep, with its index within the frame and the
    /// number of collision contacts it resolved.
    fn on_substep(&mut self, _substep: usize, _contacts: usize) {}

    /// Called when a spring breaks.
    fn on_fracture(&mut self, _event: &FractureEvent<F>) {}

    /// Called when a rendered frame is fully simulated.
    fn on_frame_complete(&mut self, _frame: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
