//! Events emitted during a physics step.
//! The presentation layer consumes these for animation/sound.

use crate::domain::foothold::FootholdId;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PhysicsEvent {
    Jumped,
    DoubleJumped,
    Landed { foothold: FootholdId },
    /// Walked off the end of the ground.
    LeftGround,
    DroppedThrough { foothold: FootholdId },
    SuppressionCleared { foothold: FootholdId },
    ClimbStarted,
    ClimbStopped,
}
