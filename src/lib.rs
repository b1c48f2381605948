//! Dino Runner - simulation core of a side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, score)
//! - `platform`: Host collaborators (rendering surface, input mapping, events)
//! - `audio`: Sound cue boundary
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Idle/demo player

pub mod audio;
pub mod autopilot;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Width of a single ground tile
    pub const TILE_WIDTH: f32 = 200.0;
    /// Ground tiles visible at once
    pub const FLOOR_TILES_QUANTITY: usize = 5;
    /// World dimensions
    pub const WORLD_HEIGHT: f32 = 160.0;
    pub const WORLD_WIDTH: f32 = FLOOR_TILES_QUANTITY as f32 * TILE_WIDTH;
    /// Player feet rest 2 units above the bottom edge
    pub const FLOOR_Y: f32 = WORLD_HEIGHT - 2.0;
    /// Holding jump keeps the player rising until it reaches this height
    pub const JUMP_HEIGHT_MAX: f32 = 50.0;

    /// Gravity (units/ms²)
    pub const GRAV_ACCEL: f32 = 0.01;
    /// Extra descent while crouch is held (fraction of gravity)
    pub const CROUCH_DESCENT_FACTOR: f32 = 0.5;
    /// Initial vertical velocity of a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -0.7;

    /// Scroll speed (units/ms)
    pub const MOVE_SPEED_BASE: f32 = 0.29;
    pub const SPEED_INCREASE_STEP: f32 = 0.05;
    pub const MOVE_SPEED_MAX: f32 = 0.6;

    /// Score gained per millisecond is `1 / SCORE_DIVISOR`
    pub const SCORE_DIVISOR: f32 = 100.0;
    /// Every this many points the speed ramps up
    pub const SCORE_THRESHOLD: f32 = 100.0;

    /// Player's fixed horizontal position
    pub const PLAYER_X: f32 = 100.0;

    /// Frame length used by the headless runner
    pub const FRAME_MS: f32 = 16.0;
}

/// Uniform float between `min` and `max`; degenerate or inverted ranges return `min`
#[inline]
pub fn random_between<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    min + rng.random::<f32>() * (max - min)
}
