//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable wall ordering (oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod walls;

pub use collision::{Rect, overlaps};
pub use state::{GamePhase, GameState, Player, Viewport};
pub use tick::{TickInput, jump_direction, tick, wall_jump};
pub use walls::{WallField, WallSegment};
