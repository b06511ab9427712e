//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::walls::WallField;
use crate::tuning::Tuning;

/// Canvas dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub w: f32,
    pub h: f32,
}

impl Viewport {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// A zero or negative canvas cannot be simulated or drawn into.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command, start overlay visible
    #[default]
    NotStarted,
    /// Active run
    Playing,
    /// Run ended by falling below the canvas; frozen until restarted
    GameOver,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; y decreasing = upward
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub size: Vec2,
    /// Ticks until another wall jump may trigger
    pub wall_lock_ticks: u32,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.pos, self.size)
    }

    /// Bounds grown by the wall-jump reach margin.
    pub fn reach(&self, margin: f32) -> Rect {
        self.bounds().expand(margin)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub view: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    pub walls: WallField,
    /// Climbed-height score for the current run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(tuning: Tuning, view: Viewport) -> Self {
        let player = Player {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            wall_lock_ticks: 0,
        };
        let mut state = Self {
            tuning,
            view,
            phase: GamePhase::NotStarted,
            player,
            walls: WallField::default(),
            score: 0,
            time_ticks: 0,
        };
        state.reset();
        state
    }

    /// Recreate the run: score zeroed, player back at the bottom-center
    /// start point, wall field regenerated.
    pub fn reset(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.player.size = Vec2::new(self.tuning.player_width, self.tuning.player_height);
        self.player.pos = Vec2::new(
            (self.view.w - self.player.size.x) / 2.0,
            self.view.h - self.tuning.start_height_offset,
        );
        self.player.vel = Vec2::ZERO;
        self.player.wall_lock_ticks = 0;
        self.walls = WallField::generate(&self.tuning, self.view);
    }

    /// NotStarted/GameOver -> Playing with a full reset. Ignored while a run
    /// is already in progress.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::NotStarted | GamePhase::GameOver => {
                self.reset();
                self.phase = GamePhase::Playing;
            }
            GamePhase::Playing => {}
        }
    }

    /// Update the canvas bounds. Degenerate dimensions are ignored.
    pub fn resize(&mut self, w: f32, h: f32) {
        let next = Viewport::new(w, h);
        if next.is_degenerate() {
            log::warn!("ignoring degenerate viewport {w}x{h}");
            return;
        }
        self.view = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::TuningPreset;

    fn state() -> GameState {
        GameState::new(
            Tuning::preset(TuningPreset::Classic),
            Viewport::new(400.0, 800.0),
        )
    }

    #[test]
    fn test_new_state_is_not_started() {
        let state = state();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.walls.len(), 20);
    }

    #[test]
    fn test_start_resets_run() {
        let mut state = state();
        state.player.pos = Vec2::new(5.0, -3000.0);
        state.player.vel = Vec2::new(4.0, -9.0);
        state.player.wall_lock_ticks = 7;
        state.score = 42;

        state.start();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Vec2::new(180.0, 650.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.player.wall_lock_ticks, 0);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = state();
        state.start();
        state.player.pos.y = 100.0;
        state.score = 3;
        state.start();
        assert_eq!(state.player.pos.y, 100.0);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = state();
        state.start();
        state.phase = GamePhase::GameOver;
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos.y, 650.0);
    }

    #[test]
    fn test_resize_rejects_degenerate_dimensions() {
        let mut state = state();
        state.resize(0.0, 600.0);
        assert_eq!(state.view, Viewport::new(400.0, 800.0));
        state.resize(500.0, -1.0);
        assert_eq!(state.view, Viewport::new(400.0, 800.0));
        state.resize(500.0, 900.0);
        assert_eq!(state.view, Viewport::new(500.0, 900.0));
    }
}
