//! Data-driven game balance
//!
//! Every world constant the simulation reads lives in [`Tuning`]. The defaults
//! mirror [`crate::consts`]; a JSON file may override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning load/validation errors
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "Failed to read tuning file: {}", e),
            TuningError::Parse(e) => write!(f, "Malformed tuning JSON: {}", e),
            TuningError::Invalid(reason) => write!(f, "Invalid tuning: {}", reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// World constants and balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub tile_width: f32,
    pub tile_count: usize,
    pub world_height: f32,
    /// Distance from the bottom edge to the player's floor line
    pub floor_offset: f32,
    pub jump_height_max: f32,
    pub gravity: f32,
    pub crouch_descent_factor: f32,
    pub jump_velocity: f32,
    pub speed_base: f32,
    pub speed_step: f32,
    pub speed_max: f32,
    pub score_divisor: f32,
    pub score_threshold: f32,
    pub player_x: f32,
    /// Obstacles spawned at world creation
    pub initial_obstacles: usize,
    /// Lead-in positions (fractions of world width) forced onto the first obstacles
    pub lead_in_fractions: Vec<f32>,
    pub initial_clouds: usize,
    /// Max random offset added to a recycled cloud's re-entry position
    pub cloud_reentry_jitter: f32,
    /// Aerial hazards swap animation frames at this interval (ms)
    pub flap_interval_ms: f32,
    /// Measure obstacle spacing from the previous obstacle's y and skew the candidate pick
    pub legacy_placement: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_count: FLOOR_TILES_QUANTITY,
            world_height: WORLD_HEIGHT,
            floor_offset: WORLD_HEIGHT - FLOOR_Y,
            jump_height_max: JUMP_HEIGHT_MAX,
            gravity: GRAV_ACCEL,
            crouch_descent_factor: CROUCH_DESCENT_FACTOR,
            jump_velocity: JUMP_VELOCITY,
            speed_base: MOVE_SPEED_BASE,
            speed_step: SPEED_INCREASE_STEP,
            speed_max: MOVE_SPEED_MAX,
            score_divisor: SCORE_DIVISOR,
            score_threshold: SCORE_THRESHOLD,
            player_x: PLAYER_X,
            initial_obstacles: 4,
            lead_in_fractions: vec![0.6, 0.9, 1.2],
            initial_clouds: 2,
            cloud_reentry_jitter: 50.0,
            flap_interval_ms: 200.0,
            legacy_placement: false,
        }
    }
}

impl Tuning {
    /// Visible world width (tile width × tile count)
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.tile_width * self.tile_count as f32
    }

    /// The line the player's feet rest on
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.world_height - self.floor_offset
    }

    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break world invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.tile_width <= 0.0 {
            return Err(TuningError::Invalid("tile_width must be positive"));
        }
        if self.tile_count == 0 {
            return Err(TuningError::Invalid("tile_count must be at least 1"));
        }
        if self.world_height <= 0.0 || self.floor_offset < 0.0 {
            return Err(TuningError::Invalid("floor line must lie inside the world"));
        }
        if self.gravity < 0.0 {
            return Err(TuningError::Invalid("gravity must not be negative"));
        }
        if self.speed_base <= 0.0 || self.speed_max < self.speed_base {
            return Err(TuningError::Invalid("speed_max must be >= speed_base > 0"));
        }
        if self.score_divisor <= 0.0 || self.score_threshold <= 0.0 {
            return Err(TuningError::Invalid("score divisor and threshold must be positive"));
        }
        Ok(())
    }
}
