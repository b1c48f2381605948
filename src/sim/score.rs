//! Time-based score and the speed ramp

use super::state::{GameEvent, GameState};
use crate::audio::SoundEffect;

/// Add the score earned over `dt` ms and ramp the speed on threshold crossings
pub fn update_score(state: &mut GameState, dt: f32) {
    let tuning = &state.tuning;
    state.score += dt / tuning.score_divisor;
    state.score_floored = state.score.floor() as u32;

    let score_up = (state.score / tuning.score_threshold).floor() as u32;
    if score_up > 0 && score_up > state.last_score_up {
        state.last_score_up = score_up;
        state.speed = (state.speed + tuning.speed_step).min(tuning.speed_max);
        log::info!(
            "Score {} reached, speed now {:.2}",
            state.score_floored,
            state.speed
        );
        state.emit(GameEvent::Sound(SoundEffect::ScoreUp));
        state.emit(GameEvent::ScoreThreshold { index: score_up });
    }
}
