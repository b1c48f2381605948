//! World state and core simulation types
//!
//! Everything a run needs to continue deterministically lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::EntityRole;
use super::player::{Control, Player, TickInput};
use super::pool::EntityPools;
use super::spawner;
use crate::audio::SoundEffect;
use crate::tuning::Tuning;

/// Notifications for the host, drained after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Entity created; the host should add it to the rendering surface
    Spawned { id: u32, role: EntityRole },
    /// Entity recycled; the host should remove it from the rendering surface
    Despawned { id: u32, role: EntityRole },
    Sound(SoundEffect),
    /// Score passed another multiple of the threshold
    ScoreThreshold { index: u32 },
    /// First landing, the world starts scrolling
    GameStarted,
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub pools: EntityPools,
    pub player: Player,
    /// Continuous score
    pub score: f32,
    /// Score shown on the HUD
    pub score_floored: u32,
    /// Last threshold index that ramped the speed
    pub last_score_up: u32,
    /// Current scroll speed (units/ms)
    pub speed: f32,
    pub is_game_over: bool,
    pub is_game_started: bool,
    /// Collision latch; a crash is reported at most once per run
    pub is_crashed: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending host notifications
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game and populate the world
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(tuning.player_x, tuning.floor_y());
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            speed: tuning.speed_base,
            tuning,
            pools: EntityPools::new(),
            player,
            score: 0.0,
            score_floored: 0,
            last_score_up: 0,
            is_game_over: false,
            is_game_started: false,
            is_crashed: false,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        spawner::populate(&mut state);
        log::debug!(
            "World populated: {} tiles, {} obstacles, {} clouds",
            state.pools.ground.len(),
            state.pools.obstacles.len(),
            state.pools.sky.len()
        );

        state
    }

    /// Throw the current run away and start over
    pub fn reset(&mut self, seed: u64) {
        let tuning = self.tuning.clone();
        *self = Self::with_tuning(seed, tuning);
        log::info!("Run reset with seed {}", seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn world_width(&self) -> f32 {
        self.tuning.world_width()
    }

    #[inline]
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Button edge from the host. Latches the held flag in `input` and applies
    /// the matching player transition immediately.
    pub fn handle_control(&mut self, input: &mut TickInput, control: Control, pressed: bool) {
        input.apply(control, pressed);
        if self.is_game_over {
            return;
        }
        self.player.handle_control(control, pressed, &self.tuning);
    }

    /// Called once on collision
    pub fn on_game_over(&mut self) {
        self.player.crash();
        self.is_game_over = true;
        self.is_crashed = true;
        log::info!("Game over at score {}", self.score_floored);
        self.emit(GameEvent::GameOver);
    }
}
