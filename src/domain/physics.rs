//! Collision resolver: stateless rules against the foothold graph.
//!
//! Every function here is pure. It reads the graph and the entity state and
//! returns a decision; the stepper applies it.
//!
//! ## Motion Truth Table
//!
//! ┌──────────────────────────────┬──────────────┐
//! │ Condition (priority order)    │ MotionState  │
//! ├──────────────────────────────┼──────────────┤
//! │ on a ladder                   │ Climbing     │
//! │ grounded, velocity.x != 0     │ Walking      │
//! │ grounded                      │ Standing     │
//! │ airborne, is_jumping          │ Jumping      │
//! │ otherwise                     │ Falling      │
//! └──────────────────────────────┴──────────────┘
//!
//! ## Jump Truth Table
//!
//! ┌──────────────────────────────────────────┬────────────────┐
//! │ Condition (priority order)                │ Action         │
//! ├──────────────────────────────────────────┼────────────────┤
//! │ grounded, drop asked, one-way foothold    │ DropThrough    │
//! │ grounded, drop asked, solid foothold      │ none           │
//! │ jump not pressed                          │ none           │
//! │ climbing                                  │ LeaveLadder    │
//! │ grounded                                  │ Jump           │
//! │ airborne, double jump enabled and unused  │ DoubleJump     │
//! │ otherwise                                 │ none           │
//! └──────────────────────────────────────────┴────────────────┘
//!
//! ## Support while grounded
//!
//!   1. The current foothold spans x → stay on it.
//!   2. Linked neighbors toward x span it → cross onto that neighbor.
//!      Walls end the chain (a ledge, not a staircase).
//!   3. Some other foothold lies within `ground_snap` of the feet → snap to it.
//!   4. Otherwise → unsupported, the entity falls.

use glam::Vec2;

use super::entity::{MotionState, MovementIntent, PlayerPhysicsState};
use super::foothold::FootholdId;
use super::graph::{FootholdGraph, GroundHint, GroundHit, WALL_SKIN};
use super::ladder::LadderRegion;

// ══════════════════════════════════════════════════════════════
// State resolution
// ══════════════════════════════════════════════════════════════

pub fn resolve_motion(state: &PlayerPhysicsState) -> MotionState {
    if state.is_climbing() { return MotionState::Climbing; }
    if state.is_grounded {
        return if state.velocity.x != 0.0 { MotionState::Walking } else { MotionState::Standing };
    }
    if state.is_jumping { MotionState::Jumping } else { MotionState::Falling }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JumpAction {
    Jump,
    DoubleJump,
    DropThrough(FootholdId),
    LeaveLadder,
}

/// What a jump press or drop request does this tick, if anything.
///
/// A drop is requested either through `state.drop_requested` or with the
/// down + jump chord.
pub fn resolve_jump(graph: &FootholdGraph, state: &PlayerPhysicsState, intent: MovementIntent) -> Option<JumpAction> {
    if state.is_grounded && (state.drop_requested || intent.wants_drop()) {
        return state.current_foothold
            .and_then(|id| graph.get(id))
            .filter(|fh| fh.is_one_way())
            .map(|fh| JumpAction::DropThrough(fh.id()));
    }

    if !intent.jump_requested { return None; }
    if state.is_climbing() { return Some(JumpAction::LeaveLadder); }
    if state.is_grounded { return Some(JumpAction::Jump); }

    if state.double_jump_enabled && !state.has_used_double_jump {
        return Some(JumpAction::DoubleJump);
    }
    None
}

// ══════════════════════════════════════════════════════════════
// Ground
// ══════════════════════════════════════════════════════════════

/// Ground under a grounded entity after it moved to `x`.
/// `None` means the entity walked off its support.
pub fn follow_ground(
    graph: &FootholdGraph,
    state: &PlayerPhysicsState,
    x: f32,
    ground_snap: f32,
) -> Option<GroundHit> {
    if let Some(current) = state.current_foothold.and_then(|id| graph.get(id)) {
        if let Some(y) = current.y_at(x) {
            return Some(GroundHit { foothold: current.id(), y });
        }

        // Walk the link chain toward x. Bounded by the graph size so a
        // malformed cycle cannot spin forever.
        let moving_right = x > current.x2();
        let mut fh = current;
        for _ in 0..graph.len() {
            let Some(next) = graph.connected(fh, moving_right) else { break };
            if next.is_wall() { break; }
            if let Some(y) = next.y_at(x) {
                return Some(GroundHit { foothold: next.id(), y });
            }
            fh = next;
        }
    }

    let y = state.position.y;
    let hint = GroundHint { current: state.current_foothold, ignore: state.suppressed_foothold };
    graph.find_ground(x, y - ground_snap, hint)
        .filter(|hit| (hit.y - y).abs() <= ground_snap)
}

/// Did an airborne entity cross a foothold surface this tick?
///
/// Only descending entities land. The query starts from the feet height
/// before integration so a fast fall cannot tunnel through a foothold.
pub fn resolve_landing(graph: &FootholdGraph, state: &PlayerPhysicsState, previous_y: f32) -> Option<GroundHit> {
    if state.velocity.y < 0.0 { return None; }
    let hint = GroundHint { current: None, ignore: state.suppressed_foothold };
    graph.find_ground(state.position.x, previous_y, hint)
        .filter(|hit| state.position.y >= hit.y)
}

/// Has the entity risen back above its drop-through foothold?
pub fn suppression_cleared(graph: &FootholdGraph, foothold: FootholdId, position: Vec2) -> bool {
    match graph.get(foothold) {
        Some(fh) => position.y < fh.y_at_clamped(position.x),
        None => true,
    }
}

/// Terminal-velocity-capped gravity integration.
#[inline]
pub fn apply_gravity(velocity_y: f32, gravity: f32, max_fall_speed: f32, dt: f32) -> f32 {
    (velocity_y + gravity * dt).min(max_fall_speed)
}

// ══════════════════════════════════════════════════════════════
// Walls
// ══════════════════════════════════════════════════════════════

/// Horizontal move from `from_x` to `to_x` with feet at `y`.
/// Returns the reachable x and whether a wall stopped the move.
pub fn resolve_horizontal(graph: &FootholdGraph, from_x: f32, to_x: f32, y: f32) -> (f32, bool) {
    match graph.wall_between(from_x, to_x, y) {
        Some(wx) if to_x > from_x => (wx - WALL_SKIN, true),
        Some(wx) => (wx + WALL_SKIN, true),
        None => (to_x, false),
    }
}

// ══════════════════════════════════════════════════════════════
// Ladders
// ══════════════════════════════════════════════════════════════

/// Ladder the entity grabs this tick, if any.
///
/// Grounded: up grabs a ladder rising above the feet, down grabs one
/// descending below them. Airborne: up grabs any ladder in reach.
/// A jump press never grabs.
pub fn ladder_to_grab(
    ladders: &[LadderRegion],
    state: &PlayerPhysicsState,
    intent: MovementIntent,
    tolerance: f32,
) -> Option<LadderRegion> {
    if intent.jump_requested || state.is_climbing() { return None; }
    let p = state.position;

    ladders.iter().copied().find(|l| {
        if !l.contains(p, tolerance) { return false; }
        match (state.is_grounded, intent.up_pressed, intent.down_pressed) {
            (true, true, false) => l.extends_above(p.y),
            (true, false, true) => l.extends_below(p.y),
            (false, true, false) => true,
            _ => false,
        }
    })
}

/// Ground at the ladder end the entity just reached while climbing.
/// `None` keeps the entity hanging on the ladder.
pub fn ladder_exit(graph: &FootholdGraph, ladder: &LadderRegion, position: Vec2, ground_snap: f32) -> Option<GroundHit> {
    let at_end = position.y <= ladder.top || position.y >= ladder.bottom;
    if !at_end { return None; }
    graph.find_ground(position.x, position.y - ground_snap, GroundHint::default())
        .filter(|hit| (hit.y - position.y).abs() <= ground_snap)
}
