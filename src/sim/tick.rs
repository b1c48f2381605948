//! Frame-driven simulation tick
//!
//! Order within a frame: player physics, then (once the run has started)
//! motion, recycling, collision and score.

use super::collision::check_collisions;
use super::entity::EntityKind;
use super::player::TickInput;
use super::score::update_score;
use super::spawner::queue_respawn;
use super::state::{GameEvent, GameState};

/// Advance the game by `dt` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Game over freezes everything until reset
    if state.is_game_over {
        return;
    }

    state.time_ticks += 1;

    let landed = state.player.integrate(input, dt, &state.tuning);
    if landed && !state.is_game_started {
        state.is_game_started = true;
        log::info!("Run started");
        state.emit(GameEvent::GameStarted);
    }

    if state.is_game_started {
        move_world_objects(state, dt);
        destroy_garbage_objects(state);
        check_collisions(state);
        update_score(state, dt);
    }
}

/// Scroll every entity left and flag the ones that left the screen
pub fn move_world_objects(state: &mut GameState, dt: f32) {
    let speed = state.speed;
    let flap_interval = state.tuning.flap_interval_ms;
    for entity in state.pools.iter_all_mut() {
        entity.scroll(speed, dt);
        if let EntityKind::Obstacle(data) = &mut entity.kind {
            data.animate(dt, flap_interval);
        }
    }
}

/// Sweep flagged entities and spawn a replacement for each
pub fn destroy_garbage_objects(state: &mut GameState) {
    let removed = state.pools.sweep();
    for entity in removed {
        let role = entity.role();
        state.emit(GameEvent::Despawned {
            id: entity.id,
            role,
        });
        let replacement = queue_respawn(state, role);
        log::debug!("Recycled {:?} #{} as #{}", role, entity.id, replacement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityRole;
    use crate::sim::player::PlayerState;

    const DT: f32 = 16.0;

    fn started(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.player.speed_y = Some(0.0);
        state.player.state = PlayerState::Running;
        state.is_game_started = true;
        state
    }

    #[test]
    fn test_world_frozen_before_start() {
        let mut state = GameState::new(12345);
        let before: Vec<f32> = state.pools.iter_all().map(|e| e.x).collect();
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let after: Vec<f32> = state.pools.iter_all().map(|e| e.x).collect();
        assert_eq!(before, after);
        assert_eq!(state.score, 0.0);
        assert!(!state.is_game_started);
    }

    #[test]
    fn test_first_landing_starts_run() {
        let mut state = GameState::new(12345);
        let mut input = TickInput::default();
        state.handle_control(&mut input, crate::sim::Control::Jump, true);
        state.handle_control(&mut input, crate::sim::Control::Jump, false);
        let mut frames = 0;
        while !state.is_game_started {
            tick(&mut state, &input, DT);
            frames += 1;
            assert!(frames < 500);
        }
        assert_eq!(state.player.state, PlayerState::Running);
        assert!(state.drain_events().contains(&GameEvent::GameStarted));
    }

    #[test]
    fn test_obstacle_moves_by_speed_times_delta() {
        let mut state = started(1);
        state.pools.obstacles.truncate(1);
        state.pools.obstacles[0].x = 0.0;
        state.pools.obstacles[0].speed_offset = 0.0;
        let id = state.pools.obstacles[0].id;
        move_world_objects(&mut state, DT);
        let o = state.pools.find(id).unwrap();
        assert!((o.x + 4.64).abs() < 1e-4);
    }

    #[test]
    fn test_offscreen_obstacle_replaced_same_tick() {
        let mut state = started(1);
        state.drain_events();
        let count = state.pools.obstacles.len();
        let first = state.pools.obstacles[0].id;
        state.pools.obstacles[0].x = -100.0;
        // Keep the player clear of whatever spawns
        state.player.y = -1000.0;
        tick(&mut state, &TickInput::default(), DT);

        assert!(state.pools.find(first).is_none());
        assert_eq!(state.pools.obstacles.len(), count);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Despawned {
            id: first,
            role: EntityRole::Obstacle
        }));
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Spawned {
                role: EntityRole::Obstacle,
                ..
            }
        )));
    }

    #[test]
    fn test_ground_strip_stays_contiguous() {
        let mut state = started(4);
        state.pools.obstacles.clear();
        for _ in 0..5000 {
            tick(&mut state, &TickInput::default(), DT);
            assert_eq!(state.pools.ground.len(), state.tuning.tile_count);
            for pair in state.pools.ground.windows(2) {
                assert!((pair[0].right() - pair[1].left()).abs() < 0.05);
            }
        }
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = started(1);
        state.on_game_over();
        let before: Vec<f32> = state.pools.iter_all().map(|e| e.x).collect();
        let score = state.score;
        tick(&mut state, &TickInput::default(), DT);
        let after: Vec<f32> = state.pools.iter_all().map(|e| e.x).collect();
        assert_eq!(before, after);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = started(99999);
        let mut state2 = started(99999);
        let inputs = [
            TickInput {
                jump_held: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                crouch_held: true,
                ..Default::default()
            },
        ];
        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, DT);
            tick(&mut state2, input, DT);
        }
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.is_game_over, state2.is_game_over);
        let x1: Vec<f32> = state1.pools.iter_all().map(|e| e.x).collect();
        let x2: Vec<f32> = state2.pools.iter_all().map(|e| e.x).collect();
        assert_eq!(x1, x2);
    }
}
