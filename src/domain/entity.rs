//! Player physics state, movement intent and movement stats.
//! The state machine has five states; transitions live in `physics`.

use glam::Vec2;

use super::foothold::FootholdId;
use super::ladder::LadderRegion;

/// Motion state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MotionState {
    Standing,
    Walking,
    Jumping,
    #[default]
    Falling,
    Climbing,
}

/// Input polled once at the start of a tick.
///
/// Directions are held-key states. `jump_requested` is edge-triggered: the host
/// sets it only on the tick the jump key went down, so holding jump does not
/// fire the double jump on the next tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MovementIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_requested: bool,
    pub up_pressed: bool,
    pub down_pressed: bool,
}

impl MovementIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    /// -1 (left), 0, or +1 (right). Opposite keys cancel.
    pub fn horizontal(self) -> f32 {
        self.move_right as i32 as f32 - self.move_left as i32 as f32
    }

    /// -1 (up the ladder), 0, or +1 (down), in Y-down simulation space.
    pub fn vertical(self) -> f32 {
        self.down_pressed as i32 as f32 - self.up_pressed as i32 as f32
    }

    /// Down + jump is the drop-through chord.
    pub fn wants_drop(self) -> bool {
        self.jump_requested && self.down_pressed
    }
}

/// Percent multipliers on the base walk speed and jump impulse (100 = base).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MovementStats {
    pub speed: u32,
    pub jump: u32,
}

impl Default for MovementStats {
    fn default() -> Self {
        MovementStats { speed: 100, jump: 100 }
    }
}

impl MovementStats {
    pub fn walk_speed(&self, base: f32) -> f32 {
        base * self.speed as f32 / 100.0
    }

    pub fn jump_impulse(&self, base: f32) -> f32 {
        base * self.jump as f32 / 100.0
    }
}

/// Per-entity physics state. Owned by exactly one controller; mutated only by
/// the stepper.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerPhysicsState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub is_grounded: bool,
    pub is_jumping: bool,
    pub has_used_double_jump: bool,
    pub double_jump_enabled: bool,
    pub current_foothold: Option<FootholdId>,
    pub motion: MotionState,
    /// Drop through the current one-way foothold on the next tick.
    /// Consumed (cleared) by that tick whether or not a drop happened.
    pub drop_requested: bool,
    /// Foothold ignored for landing until the entity is back above it.
    pub suppressed_foothold: Option<FootholdId>,
    /// Ladder being climbed, if any.
    pub ladder: Option<LadderRegion>,
    pub stats: MovementStats,
}

impl PlayerPhysicsState {
    /// Fresh entity at `position`, airborne so gravity settles it.
    pub fn new(position: Vec2) -> Self {
        PlayerPhysicsState {
            position,
            velocity: Vec2::ZERO,
            is_grounded: false,
            is_jumping: false,
            has_used_double_jump: false,
            double_jump_enabled: false,
            current_foothold: None,
            motion: MotionState::Falling,
            drop_requested: false,
            suppressed_foothold: None,
            ladder: None,
            stats: MovementStats::default(),
        }
    }

    /// Respawn in place: clears motion but keeps stats and abilities.
    pub fn spawn(&mut self, position: Vec2) {
        *self = PlayerPhysicsState {
            stats: self.stats,
            double_jump_enabled: self.double_jump_enabled,
            ..PlayerPhysicsState::new(position)
        };
    }

    /// Ask to drop through the one-way foothold underfoot.
    pub fn request_drop(&mut self) {
        self.drop_requested = true;
    }

    pub fn is_climbing(&self) -> bool {
        self.ladder.is_some()
    }
}
