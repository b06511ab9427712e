//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one step. Tuning values are expressed in
//! pixels per tick, so a step takes no dt parameter; the frame loop decides
//! how many ticks to run.

use super::collision::{Rect, overlaps};
use super::state::{GamePhase, GameState};
use crate::consts::SCORE_UNIT;
use crate::tuning::{Tuning, WallResponse};

/// Input commands for a single tick. One-shot fields are cleared by the
/// frame loop once the first substep has consumed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start or restart the run
    pub start: bool,
    /// Wall-jump with the given direction sign (see [`jump_direction`])
    pub jump: Option<f32>,
}

/// Map a pointer x to a jump direction sign: left half of the screen gives
/// `-1.0`, right half `+1.0`. The sign multiplies the horizontal wall-jump
/// impulse. This mapping is part of the control contract; do not flip it.
#[inline]
pub fn jump_direction(pointer_x: f32, view_w: f32) -> f32 {
    if pointer_x < view_w / 2.0 { -1.0 } else { 1.0 }
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // A zero-size canvas would poison every clamp below
    if state.view.is_degenerate() {
        return;
    }

    if input.start {
        state.start();
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let tuning = state.tuning.clone();

    if state.player.wall_lock_ticks > 0 {
        state.player.wall_lock_ticks -= 1;
    }

    if let Some(direction) = input.jump {
        wall_jump(state, direction);
    }

    // Kinematics: gravity, optional air resistance, then integration
    state.player.vel.y += tuning.gravity;
    if let Some(damping) = tuning.air_damping {
        state.player.vel.x *= damping;
    }
    state.player.pos += state.player.vel;

    resolve_wall_collisions(state, &tuning);
    clamp_to_screen(state, &tuning);

    // Score follows the highest point reached and never regresses
    let height_score = (state.player.pos.y.abs() / SCORE_UNIT).floor() as u32;
    if height_score > state.score {
        state.score = height_score;
    }

    // Keep the field at least one spacing above the player
    while state
        .walls
        .newest_y()
        .is_some_and(|top| state.player.pos.y < top)
    {
        state.walls.extend(&tuning, state.view.w);
    }
    state.walls.prune(tuning.wall_retention_cap);

    // Fell below the visible area: run ends
    if state.player.pos.y > state.view.h {
        state.phase = GamePhase::GameOver;
    }
}

/// Apply a wall-jump impulse if the player is within reach of a wall and the
/// cooldown has expired. Returns whether the jump triggered.
pub fn wall_jump(state: &mut GameState, direction: f32) -> bool {
    if state.player.wall_lock_ticks > 0 {
        return false;
    }
    let reach = state.player.reach(state.tuning.wall_reach_margin);
    if !state.walls.iter().any(|w| overlaps(&reach, &w.bounds())) {
        return false;
    }
    state.player.vel.y = state.tuning.wall_jump_force_y;
    state.player.vel.x = direction * state.tuning.wall_jump_force_x;
    state.player.wall_lock_ticks = state.tuning.wall_jump_cooldown_ticks;
    true
}

/// Snap the player out of any overlapped wall onto its near face and apply
/// the configured horizontal velocity response.
fn resolve_wall_collisions(state: &mut GameState, tuning: &Tuning) {
    let player = &mut state.player;
    for wall in state.walls.iter() {
        let bounds = Rect::from_parts(player.pos, player.size);
        if !overlaps(&bounds, &wall.bounds()) {
            continue;
        }
        if player.vel.x > 0.0 {
            player.pos.x = wall.pos.x - player.size.x;
        } else if player.vel.x < 0.0 {
            player.pos.x = wall.pos.x + wall.size.x;
        } else {
            continue;
        }
        player.vel.x = match tuning.wall_response {
            WallResponse::Rebound { factor } => -player.vel.x * factor,
            WallResponse::Friction { factor } => player.vel.x * factor,
        };
    }
}

/// Keep the player inside the horizontal canvas bounds, rebounding off the
/// edges. The upper bound is floored at zero so a canvas narrower than the
/// player cannot invert the clamp range.
fn clamp_to_screen(state: &mut GameState, tuning: &Tuning) {
    let player = &mut state.player;
    let max_x = (state.view.w - player.size.x).max(0.0);
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
        player.vel.x = -player.vel.x * tuning.edge_rebound;
    } else if player.pos.x > max_x {
        player.pos.x = max_x;
        player.vel.x = -player.vel.x * tuning.edge_rebound;
    }
}
