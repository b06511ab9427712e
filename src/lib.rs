//! Wall Kick - an endless wall-jump climber
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, wall field, game state)
//! - `game`: Frame-driven session composing sim, scoring and host I/O
//! - `render`: 2D surface abstraction and frame painter
//! - `platform`: Browser/native host abstraction
//! - `tuning`: Data-driven game balance profiles

pub mod game;
pub mod highscore;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::{Tuning, TuningPreset};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; tuning values are in pixels per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Pixels of climbed height per score point
    pub const SCORE_UNIT: f32 = 100.0;
}
