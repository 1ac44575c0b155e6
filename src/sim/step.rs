//! The step function: advances one entity by one fixed tick.
//!
//! Processing order:
//!   1. Drop-through suppression expiry
//!   2. Ladder (keep climbing, or grab a ladder; either consumes the tick)
//!   3. Jump / double jump / drop-through / leave ladder
//!   4. Horizontal movement (walls block)
//!   5. Vertical: slope follow while grounded, gravity + landing while airborne
//!   6. Motion state resolution
//!
//! The map is only read. The entity state is the only thing written.

use glam::Vec2;
use tracing::{debug, trace};

use crate::config::PhysicsConfig;
use crate::domain::entity::{MovementIntent, PlayerPhysicsState};
use crate::domain::physics::{self, JumpAction};
use super::event::PhysicsEvent;
use super::map::MapGeometry;

#[derive(Clone, Debug, Default)]
pub struct PhysicsStepper {
    config: PhysicsConfig,
}

// ══════════════════════════════════════════════════════════════
// Main entry point
// ══════════════════════════════════════════════════════════════

impl PhysicsStepper {
    pub fn new(config: PhysicsConfig) -> Self {
        PhysicsStepper { config }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance `state` by `dt` seconds.
    ///
    /// Without a map (between map loads) the state is left untouched.
    ///
    /// # Panics
    /// If `dt` is negative or not finite.
    pub fn step(
        &self,
        state: &mut PlayerPhysicsState,
        intent: MovementIntent,
        map: Option<&MapGeometry>,
        dt: f32,
    ) -> Vec<PhysicsEvent> {
        assert!(dt.is_finite() && dt >= 0.0, "physics step needs a finite, non-negative dt (got {dt})");
        let Some(map) = map else {
            trace!("no map loaded, physics step skipped");
            return vec![];
        };

        let mut events: Vec<PhysicsEvent> = Vec::new();
        let before = state.motion;

        self.resolve_suppression(map, state, &mut events);

        let on_ladder = if state.is_climbing() {
            self.resolve_climbing(map, state, intent, dt, &mut events)
        } else {
            self.resolve_ladder_grab(map, state, intent, &mut events)
        };

        if !on_ladder {
            self.resolve_jump(map, state, intent, &mut events);
            self.resolve_horizontal(map, state, intent, dt);
            self.resolve_vertical(map, state, dt, &mut events);
        }
        state.drop_requested = false;

        state.motion = physics::resolve_motion(state);
        if state.motion != before {
            debug!(from = ?before, to = ?state.motion, x = state.position.x, y = state.position.y, "motion state changed");
        }
        events
    }
}

// ══════════════════════════════════════════════════════════════
// Drop-through suppression
// ══════════════════════════════════════════════════════════════

impl PhysicsStepper {
    fn resolve_suppression(&self, map: &MapGeometry, state: &mut PlayerPhysicsState, events: &mut Vec<PhysicsEvent>) {
        let Some(id) = state.suppressed_foothold else { return };
        if physics::suppression_cleared(map.graph(), id, state.position) {
            state.suppressed_foothold = None;
            events.push(PhysicsEvent::SuppressionCleared { foothold: id });
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Ladders
// ══════════════════════════════════════════════════════════════

impl PhysicsStepper {
    /// Grab a ladder in reach. Returns true if the entity is now climbing.
    fn resolve_ladder_grab(
        &self,
        map: &MapGeometry,
        state: &mut PlayerPhysicsState,
        intent: MovementIntent,
        events: &mut Vec<PhysicsEvent>,
    ) -> bool {
        let tolerance = self.config.collision.ladder_grab_tolerance;
        let Some(ladder) = physics::ladder_to_grab(map.ladders(), state, intent, tolerance) else { return false };

        state.position.x = ladder.x;
        state.velocity = Vec2::ZERO;
        state.is_grounded = false;
        state.is_jumping = false;
        state.current_foothold = None;
        state.ladder = Some(ladder);
        events.push(PhysicsEvent::ClimbStarted);
        true
    }

    /// One tick on a ladder. Returns false if a jump press should take the
    /// entity off the ladder this tick.
    fn resolve_climbing(
        &self,
        map: &MapGeometry,
        state: &mut PlayerPhysicsState,
        intent: MovementIntent,
        dt: f32,
        events: &mut Vec<PhysicsEvent>,
    ) -> bool {
        if intent.jump_requested { return false; }
        let Some(ladder) = state.ladder else { return false };

        let dir = intent.vertical();
        state.velocity.x = 0.0;
        state.velocity.y = dir * self.config.movement.climb_speed;
        state.position.y = (state.position.y + state.velocity.y * dt).clamp(ladder.top, ladder.bottom);

        if dir == 0.0 { return true; }
        let reached_end = (dir < 0.0 && state.position.y <= ladder.top)
            || (dir > 0.0 && state.position.y >= ladder.bottom);
        if !reached_end { return true; }

        let snap = self.config.collision.ground_snap;
        if let Some(hit) = physics::ladder_exit(map.graph(), &ladder, state.position, snap) {
            state.position.y = hit.y;
            state.velocity = Vec2::ZERO;
            state.is_grounded = true;
            state.has_used_double_jump = false;
            state.current_foothold = Some(hit.foothold);
            state.ladder = None;
            events.push(PhysicsEvent::ClimbStopped);
        } else {
            state.velocity.y = 0.0;
        }
        true
    }
}

// ══════════════════════════════════════════════════════════════
// Jump
// ══════════════════════════════════════════════════════════════

impl PhysicsStepper {
    fn resolve_jump(
        &self,
        map: &MapGeometry,
        state: &mut PlayerPhysicsState,
        intent: MovementIntent,
        events: &mut Vec<PhysicsEvent>,
    ) {
        let Some(action) = physics::resolve_jump(map.graph(), state, intent) else { return };
        let impulse = state.stats.jump_impulse(self.config.movement.jump_impulse);

        match action {
            JumpAction::Jump => {
                state.velocity.y = -impulse;
                state.is_grounded = false;
                state.is_jumping = true;
                state.current_foothold = None;
                events.push(PhysicsEvent::Jumped);
            }
            JumpAction::DoubleJump => {
                state.velocity.y = -impulse;
                state.is_jumping = true;
                state.has_used_double_jump = true;
                events.push(PhysicsEvent::DoubleJumped);
            }
            JumpAction::DropThrough(foothold) => {
                state.velocity.y = 0.0;
                state.is_grounded = false;
                state.current_foothold = None;
                state.suppressed_foothold = Some(foothold);
                events.push(PhysicsEvent::DroppedThrough { foothold });
            }
            JumpAction::LeaveLadder => {
                state.ladder = None;
                state.velocity.y = -impulse;
                state.is_jumping = true;
                events.push(PhysicsEvent::ClimbStopped);
                events.push(PhysicsEvent::Jumped);
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Integration
// ══════════════════════════════════════════════════════════════

impl PhysicsStepper {
    fn resolve_horizontal(&self, map: &MapGeometry, state: &mut PlayerPhysicsState, intent: MovementIntent, dt: f32) {
        let walk = state.stats.walk_speed(self.config.movement.walk_speed);
        state.velocity.x = walk * intent.horizontal();
        if state.velocity.x == 0.0 { return; }

        let from_x = state.position.x;
        let to_x = from_x + state.velocity.x * dt;
        let (x, blocked) = physics::resolve_horizontal(map.graph(), from_x, to_x, state.position.y);
        state.position.x = x;
        if blocked { state.velocity.x = 0.0; }
    }

    fn resolve_vertical(&self, map: &MapGeometry, state: &mut PlayerPhysicsState, dt: f32, events: &mut Vec<PhysicsEvent>) {
        let graph = map.graph();

        if state.is_grounded {
            let snap = self.config.collision.ground_snap;
            match physics::follow_ground(graph, state, state.position.x, snap) {
                Some(hit) => {
                    state.position.y = hit.y;
                    state.velocity.y = 0.0;
                    state.current_foothold = Some(hit.foothold);
                    return;
                }
                None => {
                    state.is_grounded = false;
                    state.current_foothold = None;
                    events.push(PhysicsEvent::LeftGround);
                }
            }
        }

        let movement = &self.config.movement;
        let previous_y = state.position.y;
        state.velocity.y = physics::apply_gravity(state.velocity.y, movement.gravity, movement.max_fall_speed, dt);
        state.position.y += state.velocity.y * dt;

        if let Some(hit) = physics::resolve_landing(graph, state, previous_y) {
            state.position.y = hit.y;
            state.velocity.y = 0.0;
            state.is_grounded = true;
            state.is_jumping = false;
            state.has_used_double_jump = false;
            state.current_foothold = Some(hit.foothold);
            events.push(PhysicsEvent::Landed { foothold: hit.foothold });
        }
    }
}
