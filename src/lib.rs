//! Real-time 2D mass-spring networks that bend, bounce and break.
//!
//! `trussy` simulates a network of point masses joined by elastic springs:
//! Hooke springs plus short-range repulsion, integrated several substeps per
//! rendered frame, colliding with a floor and arbitrary line segments, and
//! fracturing at runtime when a spring is stretched or squashed too far.
//! Points can be grabbed and dragged with a pointer. Windowing and drawing
//! are left to the caller, who feeds in a [`FrameInput`] per frame and reads
//! back a [`Snapshot`].
//!
//! # Features
//!
//! - **Network building**: springs between every pair of nearby points
//! - **Integration**: gravity, springs and repulsion from a single position
//!   snapshot per substep, so results never depend on point order
//! - **Collision**: floor clamp and sliding contact on line segments
//! - **Fracture**: at most one break per substep, cloning the endpoints
//! - **Interaction**: pick-and-drag with a kinematic held point
//! - **Ball loads**: bodies that roll on road springs and weigh them down
//! - **Observable**: monitor substeps and breaks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use trussy::{layout, FrameInput, NoOpStepObserver, PointerInput, SimConfig, Simulation, Vec2};
//!
//! let points = layout::truss(Vec2::new(640.0f32, 360.0), 100.0, 100.0, 5);
//! let mut sim = Simulation::from_layout(points, 125.0, 360.0, SimConfig::new()).unwrap();
//!
//! let input = FrameInput::pointer(PointerInput::new(Vec2::new(0.0, 0.0), false));
//! sim.advance_frame(&input, &mut NoOpStepObserver);
//! let snapshot = sim.snapshot();
//! assert_eq!(snapshot.positions.len(), sim.points().len());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod color;
pub mod point;
pub mod spring;
pub mod layout;
pub mod network;
pub mod integrator;
pub mod collision;
pub mod fracture;
pub mod interaction;
pub mod load;
pub mod snapshot;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use geometry::{direction, distance, segment_intersection, side_of_line, Segment};
pub use color::Color;
pub use point::Point;
pub use spring::{Material, Spring};
pub use network::NetworkBuilder;
pub use integrator::Integrator;
pub use collision::CollisionResolver;
pub use fracture::FractureEvent;
pub use interaction::{DragState, InteractionController, PointerInput};
pub use load::Ball;
pub use snapshot::{BallView, Smoother, Snapshot, SpringView};
pub use simulation::{FrameInput, FrameReport, FrameSink, InputSource, Simulation};
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SimError;
