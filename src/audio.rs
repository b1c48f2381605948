//! Audio boundary
//!
//! The simulation only names cues; playing them is up to the host.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Score crossed another threshold
    ScoreUp,
}

impl SoundEffect {
    /// Asset key the host's sound bank uses
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::ScoreUp => "score_up",
        }
    }
}

/// Fire-and-forget playback
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    played: u32,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Cues played so far (muted cues are not counted)
    pub fn played(&self) -> u32 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::debug!("play {}", effect.as_str());
    }
}
