//! Read-only view of the physics state for the presentation layer.

use glam::Vec2;

use crate::domain::coords;
use crate::domain::entity::{MotionState, PlayerPhysicsState};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PhysicsSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub is_grounded: bool,
    pub motion: MotionState,
}

impl PhysicsSnapshot {
    pub fn capture(state: &PlayerPhysicsState) -> Self {
        PhysicsSnapshot {
            position: state.position,
            velocity: state.velocity,
            is_grounded: state.is_grounded,
            motion: state.motion,
        }
    }

    /// Same snapshot in presentation units (Y up, 1/100 scale).
    pub fn in_presentation_units(&self) -> Self {
        PhysicsSnapshot {
            position: coords::to_presentation(self.position),
            velocity: coords::to_presentation(self.velocity),
            ..*self
        }
    }

    /// Position blended between the previous and current tick.
    pub fn interpolate(previous: &PhysicsSnapshot, current: &PhysicsSnapshot, alpha: f32) -> Vec2 {
        previous.position.lerp(current.position, alpha.clamp(0.0, 1.0))
    }
}

impl From<&PlayerPhysicsState> for PhysicsSnapshot {
    fn from(state: &PlayerPhysicsState) -> Self {
        Self::capture(state)
    }
}
