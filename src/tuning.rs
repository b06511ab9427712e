//! Data-driven game balance
//!
//! Every gameplay constant lives here so difficulty can be adjusted without
//! touching simulation logic. Two named profiles exist with deliberately
//! different feels; they are never merged. The selected profile is persisted
//! in LocalStorage.

use serde::{Deserialize, Serialize};

/// Named tuning profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TuningPreset {
    /// Floaty feel: air resistance, springy walls and screen edges
    #[default]
    Classic,
    /// Snappier variant: heavier gravity, wall friction, hard-stop edges
    Crisp,
}

impl TuningPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuningPreset::Classic => "Classic",
            TuningPreset::Crisp => "Crisp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(TuningPreset::Classic),
            "crisp" => Some(TuningPreset::Crisp),
            _ => None,
        }
    }
}

/// Horizontal velocity response when the player runs into a wall face.
/// Exactly one applies per profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WallResponse {
    /// Reverse and dampen: `vx -> -vx * factor`
    Rebound { factor: f32 },
    /// Slide friction: `vx -> vx * factor`
    Friction { factor: f32 },
}

/// Gameplay constants. Velocities and forces are in pixels per tick,
/// durations in ticks (60 per second).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub preset: TuningPreset,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Per-tick horizontal velocity decay; `None` disables air resistance
    pub air_damping: Option<f32>,
    pub wall_jump_force_x: f32,
    /// Vertical impulse (negative = up)
    pub wall_jump_force_y: f32,
    /// Lockout between wall jumps
    pub wall_jump_cooldown_ticks: u32,
    /// How far from a wall a jump still catches
    pub wall_reach_margin: f32,
    pub wall_response: WallResponse,
    /// Horizontal rebound factor at the screen edges (0 = hard stop)
    pub edge_rebound: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Player start distance above the canvas bottom
    pub start_height_offset: f32,
    pub wall_width: f32,
    pub wall_height: f32,
    /// Vertical distance between successive wall pairs
    pub wall_spacing: f32,
    pub wall_pair_count: u32,
    /// Oldest segments are discarded beyond this many
    pub wall_retention_cap: usize,
    /// Left wall x as a fraction of the canvas width
    pub left_band: f32,
    /// Right wall right-edge x as a fraction of the canvas width
    pub right_band: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::preset(TuningPreset::default())
    }
}

impl Tuning {
    pub fn preset(preset: TuningPreset) -> Self {
        match preset {
            TuningPreset::Classic => Self {
                preset,
                gravity: 0.4,
                air_damping: Some(0.98),
                wall_jump_force_x: 6.0,
                wall_jump_force_y: -8.0,
                wall_jump_cooldown_ticks: 18,
                wall_reach_margin: 10.0,
                wall_response: WallResponse::Rebound { factor: 0.1 },
                edge_rebound: 0.5,
                player_width: 40.0,
                player_height: 40.0,
                start_height_offset: 150.0,
                wall_width: 30.0,
                wall_height: 120.0,
                wall_spacing: 180.0,
                wall_pair_count: 10,
                wall_retention_cap: 20,
                left_band: 0.25,
                right_band: 0.75,
            },
            TuningPreset::Crisp => Self {
                preset,
                gravity: 0.5,
                air_damping: None,
                wall_jump_force_x: 7.0,
                wall_jump_force_y: -9.0,
                wall_jump_cooldown_ticks: 12,
                wall_reach_margin: 5.0,
                wall_response: WallResponse::Friction { factor: 0.8 },
                edge_rebound: 0.0,
                player_width: 32.0,
                player_height: 32.0,
                start_height_offset: 130.0,
                wall_width: 24.0,
                wall_height: 100.0,
                wall_spacing: 160.0,
                wall_pair_count: 10,
                wall_retention_cap: 20,
                left_band: 0.2,
                right_band: 0.8,
            },
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "wall_kick_tuning";

    /// Load the persisted profile (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning profile from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning profile");
        Self::default()
    }

    /// Save the profile to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning profile saved ({})", self.preset.as_str());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
