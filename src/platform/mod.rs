//! Platform abstraction layer
//!
//! The simulation queues [`GameEvent`]s; a host drains them after each tick
//! and routes them to its renderer, audio and game-over listeners through
//! the [`Host`] trait.

pub mod input;

pub use input::{InputMapper, RawInput};

use crate::audio::{AudioSink, SoundEffect};
use crate::sim::{EntityRole, GameEvent, GameState};

/// Collaborators a host wires into the simulation. All methods default to no-ops.
pub trait Host {
    /// Add an entity to the rendering surface
    fn attach(&mut self, _state: &GameState, _id: u32, _role: EntityRole) {}
    /// Remove an entity from the rendering surface
    fn detach(&mut self, _id: u32, _role: EntityRole) {}
    fn play(&mut self, _effect: SoundEffect) {}
    fn score_threshold(&mut self, _index: u32) {}
    fn game_started(&mut self) {}
    fn game_over(&mut self) {}
}

/// Drain the state's pending events into `host`; returns how many were routed
pub fn dispatch(state: &mut GameState, host: &mut impl Host) -> usize {
    let events = state.drain_events();
    for event in &events {
        match *event {
            GameEvent::Spawned { id, role } => host.attach(state, id, role),
            GameEvent::Despawned { id, role } => host.detach(id, role),
            GameEvent::Sound(effect) => host.play(effect),
            GameEvent::ScoreThreshold { index } => host.score_threshold(index),
            GameEvent::GameStarted => host.game_started(),
            GameEvent::GameOver => host.game_over(),
        }
    }
    events.len()
}

/// Host that forwards cues to an [`AudioSink`] and logs everything else
#[derive(Debug, Default)]
pub struct LoggingHost<A: AudioSink> {
    pub audio: A,
    /// Entities currently on the rendering surface
    pub attached: usize,
    pub game_over: bool,
}

impl<A: AudioSink> LoggingHost<A> {
    pub fn new(audio: A) -> Self {
        Self {
            audio,
            attached: 0,
            game_over: false,
        }
    }
}

impl<A: AudioSink> Host for LoggingHost<A> {
    fn attach(&mut self, state: &GameState, id: u32, role: EntityRole) {
        self.attached += 1;
        if let Some(e) = state.pools.find(id) {
            log::trace!("attach {:?} #{} ({}x{})", role, id, e.width(), e.height());
        }
    }

    fn detach(&mut self, id: u32, role: EntityRole) {
        self.attached = self.attached.saturating_sub(1);
        log::trace!("detach {:?} #{}", role, id);
    }

    fn play(&mut self, effect: SoundEffect) {
        self.audio.play(effect);
    }

    fn score_threshold(&mut self, index: u32) {
        log::debug!("Threshold {} crossed", index);
    }

    fn game_started(&mut self) {
        log::debug!("World scrolling");
    }

    fn game_over(&mut self) {
        self.game_over = true;
    }
}
