//! Time-based animation of item positions.
//!
//! Transitions interpolate each item from its live position to an
//! arrangement target with one shared easing curve. The controller owns the
//! live positions and is stepped by the host's frame loop.

mod controller;
mod easing;
mod transition;

pub use controller::{TransitionConfig, TransitionController};
pub use easing::Easing;
pub use transition::{Transition, lerp_vec3};
