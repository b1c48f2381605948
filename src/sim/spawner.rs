//! Procedural spawning of ground tiles, clouds and obstacles
//!
//! Obstacle placement follows two rules:
//! - an aerial hazard is never followed by another aerial hazard
//! - spacing depends on the subtype pair, measured from the previous obstacle

use rand::Rng;
use rand::seq::IndexedRandom;

use super::entity::{EntityKind, EntityRole, ObstacleData, ScrollingEntity};
use super::sprite::{
    AERIAL_FIRST_FRAME, CLOUDS, GROUND_TILE_HEIGHT, GROUND_TILE_VARIANTS, HazardKind, OBSTACLES,
    ObstacleTemplate, SpriteMetrics, obstacle_candidates,
};
use super::state::{GameEvent, GameState};
use crate::random_between;

/// Fill the visible world: a full strip of floor, lead-in obstacles and clouds
pub fn populate(state: &mut GameState) {
    for _ in 0..state.tuning.tile_count {
        spawn(state, EntityRole::Ground, None);
    }
    for _ in 0..state.tuning.initial_obstacles {
        spawn(state, EntityRole::Obstacle, None);
    }
    for _ in 0..state.tuning.initial_clouds {
        spawn(state, EntityRole::Sky, None);
    }

    // Pull the first obstacles closer so the run does not open on an empty screen
    let width = state.world_width();
    let fractions = state.tuning.lead_in_fractions.clone();
    for (obstacle, fraction) in state.pools.obstacles.iter_mut().zip(fractions) {
        obstacle.x = width * fraction;
    }
}

/// Create, position and append one entity; returns its id.
///
/// `pos_x` only applies to sky decorations.
pub fn spawn(state: &mut GameState, role: EntityRole, pos_x: Option<f32>) -> u32 {
    let entity = match role {
        EntityRole::Ground => make_ground_tile(state),
        EntityRole::Sky => make_cloud(state, pos_x),
        EntityRole::Obstacle => make_obstacle(state),
    };
    let id = entity.id;
    log::debug!(
        "Spawned {:?} #{} at ({:.1}, {:.1})",
        role,
        id,
        entity.x,
        entity.y
    );
    state.pools.append(entity);
    state.emit(GameEvent::Spawned { id, role });
    id
}

/// Replace a recycled entity with a fresh one of the same role
pub fn queue_respawn(state: &mut GameState, role: EntityRole) -> u32 {
    match role {
        EntityRole::Ground => spawn(state, role, None),
        EntityRole::Sky => {
            let jitter = random_between(&mut state.rng, 0.0, state.tuning.cloud_reentry_jitter);
            let x = state.world_width() + jitter;
            spawn(state, role, Some(x))
        }
        EntityRole::Obstacle => spawn(state, role, None),
    }
}

fn make_ground_tile(state: &mut GameState) -> ScrollingEntity {
    let variant = GROUND_TILE_VARIANTS
        .choose(&mut state.rng)
        .copied()
        .unwrap_or(GROUND_TILE_VARIANTS[0]);
    let sprite = SpriteMetrics::centred(state.tuning.tile_width, GROUND_TILE_HEIGHT);

    // The first tile pretends its predecessor ended at the left boundary
    let prev_right = state
        .pools
        .last_ground()
        .map(|t| t.right())
        .unwrap_or(0.0);

    let mut tile = ScrollingEntity::new(
        state.next_entity_id(),
        EntityKind::Ground {
            variant: variant.to_string(),
        },
        sprite,
    );
    tile.x = prev_right + sprite.width * sprite.anchor.x;
    tile.y = state.tuning.world_height - sprite.height / 2.0;
    tile
}

fn make_cloud(state: &mut GameState, pos_x: Option<f32>) -> ScrollingEntity {
    let template = CLOUDS.choose(&mut state.rng).unwrap_or(&CLOUDS[0]);
    let mut cloud = ScrollingEntity::new(
        state.next_entity_id(),
        EntityKind::Sky {
            variant: template.name.to_string(),
        },
        template.sprite,
    );
    cloud.x = pos_x.unwrap_or(state.world_width() + template.sprite.width);
    cloud.y = state.tuning.world_height * 0.1;
    cloud.speed_offset = random_between(&mut state.rng, template.speed_offset.0, template.speed_offset.1);
    cloud
}

fn draw_obstacle_template(state: &mut GameState, aerial_allowed: bool) -> &'static ObstacleTemplate {
    let candidates: Vec<&'static ObstacleTemplate> = obstacle_candidates(aerial_allowed).collect();
    candidates
        .choose(&mut state.rng)
        .copied()
        .unwrap_or(&OBSTACLES[0])
}

fn make_obstacle(state: &mut GameState) -> ScrollingEntity {
    let width = state.world_width();
    let height = state.tuning.world_height;
    let legacy = state.tuning.legacy_placement;

    // Previous obstacle's subtype and the coordinate spacing is measured from.
    // Legacy placement reads its vertical position here instead.
    let prev = state.pools.last_obstacle().map(|o| {
        let hazard = o.hazard().unwrap_or(HazardKind::Ground);
        let anchor = if legacy { o.y } else { o.right() };
        (hazard, anchor)
    });

    let aerial_allowed = !matches!(prev, Some((HazardKind::Aerial, _)));
    let template = draw_obstacle_template(state, aerial_allowed);
    let data = ObstacleData::from_template(template);
    let frame = data.current_frame().sprite;

    let run_width = state.player.run_view().width;
    let player_width = state.player.current_view().width;

    let x = match prev {
        None => width + frame.width / 2.0,
        Some((HazardKind::Ground, anchor)) if data.hazard == HazardKind::Ground => {
            let left_edge = width.max(anchor + run_width * 3.0);
            random_between(&mut state.rng, left_edge, left_edge + player_width * 2.0)
        }
        Some((_, anchor)) => {
            let after_prev = anchor + player_width;
            let fresh = random_between(
                &mut state.rng,
                width + frame.width / 2.0,
                width + player_width * 2.0,
            );
            if after_prev > width {
                let candidates = [after_prev, fresh];
                if legacy {
                    // ceil(random) is 1 unless the draw is exactly zero
                    candidates[state.rng.random::<f32>().ceil() as usize]
                } else {
                    candidates[state.rng.random_range(0..candidates.len())]
                }
            } else {
                fresh
            }
        }
    };

    let y = if data.first_frame_id() == AERIAL_FIRST_FRAME {
        height * 0.05 + random_between(&mut state.rng, 0.0, height * 0.1)
    } else {
        height - frame.height / 2.0
    };

    let speed_offset = random_between(&mut state.rng, template.speed_offset.0, template.speed_offset.1);

    let mut obstacle = ScrollingEntity::new(state.next_entity_id(), EntityKind::Obstacle(data), frame);
    obstacle.x = x;
    obstacle.y = y;
    obstacle.speed_offset = speed_offset;
    obstacle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn empty_world(seed: u64, tuning: Tuning) -> GameState {
        let mut state = GameState::with_tuning(seed, tuning);
        state.pools = Default::default();
        state.events.clear();
        state
    }

    #[test]
    fn test_initial_tiles_cover_world() {
        let state = GameState::new(3);
        let xs: Vec<f32> = state.pools.ground.iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![100.0, 300.0, 500.0, 700.0, 900.0]);
        assert_eq!(state.pools.ground[0].left(), 0.0);
        assert_eq!(state.pools.ground[4].right(), state.world_width());
        for t in &state.pools.ground {
            assert_eq!(t.y, 160.0 - GROUND_TILE_HEIGHT / 2.0);
        }
    }

    #[test]
    fn test_initial_obstacles_lead_in() {
        let state = GameState::new(3);
        let obs = &state.pools.obstacles;
        assert_eq!(obs.len(), 4);
        assert_eq!(obs[0].x, 600.0);
        assert_eq!(obs[1].x, 900.0);
        assert_eq!(obs[2].x, 1200.0);
        assert_eq!(state.pools.sky.len(), 2);
    }

    #[test]
    fn test_first_obstacle_placement() {
        let mut state = empty_world(11, Tuning::default());
        spawn(&mut state, EntityRole::Obstacle, None);
        let o = &state.pools.obstacles[0];
        assert_eq!(o.x, state.world_width() + o.width() / 2.0);
    }

    #[test]
    fn test_cloud_position() {
        let mut state = empty_world(11, Tuning::default());
        spawn(&mut state, EntityRole::Sky, None);
        spawn(&mut state, EntityRole::Sky, Some(1020.0));
        let clouds = &state.pools.sky;
        assert_eq!(clouds[0].x, 1000.0 + clouds[0].width());
        assert_eq!(clouds[1].x, 1020.0);
        assert_eq!(clouds[0].y, 16.0);
    }

    #[test]
    fn test_cloud_respawn_jitter() {
        let mut state = empty_world(11, Tuning::default());
        for _ in 0..50 {
            queue_respawn(&mut state, EntityRole::Sky);
        }
        for c in &state.pools.sky {
            assert!(c.x >= 1000.0 && c.x <= 1050.0);
        }
    }

    #[test]
    fn test_vertical_placement() {
        let mut state = empty_world(21, Tuning::default());
        for _ in 0..200 {
            spawn(&mut state, EntityRole::Obstacle, None);
        }
        for o in &state.pools.obstacles {
            match o.hazard() {
                Some(HazardKind::Aerial) => assert!(o.y >= 8.0 && o.y <= 24.0),
                _ => assert_eq!(o.y, 160.0 - o.height() / 2.0),
            }
        }
    }

    #[test]
    fn test_ground_pair_spacing() {
        let mut state = empty_world(5, Tuning::default());
        for _ in 0..300 {
            spawn(&mut state, EntityRole::Obstacle, None);
        }
        let run_w = state.player.run_view().width;
        let cur_w = state.player.current_view().width;
        for pair in state.pools.obstacles.windows(2) {
            if pair[0].hazard() == Some(HazardKind::Ground) && pair[1].hazard() == Some(HazardKind::Ground) {
                let left = state.world_width().max(pair[0].right() + run_w * 3.0);
                assert!(pair[1].x >= left && pair[1].x <= left + cur_w * 2.0);
            }
        }
    }

    #[test]
    fn test_legacy_placement_prefers_fresh_candidate() {
        let tuning = Tuning {
            legacy_placement: true,
            ..Tuning::default()
        };
        let mut state = empty_world(9, tuning);
        for _ in 0..200 {
            spawn(&mut state, EntityRole::Obstacle, None);
        }
        // Legacy spacing is measured from a vertical coordinate, so every
        // mixed pair lands in the fresh window right of the screen
        let cur_w = state.player.current_view().width;
        for pair in state.pools.obstacles.windows(2) {
            let mixed = pair[0].hazard() != pair[1].hazard();
            if mixed {
                assert!(pair[1].x >= 1000.0 && pair[1].x <= 1000.0 + cur_w * 2.0);
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let a = GameState::new(77);
        let b = GameState::new(77);
        let xa: Vec<f32> = a.pools.iter_all().map(|e| e.x).collect();
        let xb: Vec<f32> = b.pools.iter_all().map(|e| e.x).collect();
        assert_eq!(xa, xb);
    }

    proptest! {
        #[test]
        fn prop_no_back_to_back_aerial(seed in any::<u64>()) {
            let mut state = empty_world(seed, Tuning::default());
            for _ in 0..100 {
                spawn(&mut state, EntityRole::Obstacle, None);
            }
            for pair in state.pools.obstacles.windows(2) {
                prop_assert!(!(pair[0].hazard() == Some(HazardKind::Aerial)
                    && pair[1].hazard() == Some(HazardKind::Aerial)));
            }
        }

        #[test]
        fn prop_ground_tiles_abut(seed in any::<u64>(), extra in 0usize..20) {
            let mut state = empty_world(seed, Tuning::default());
            for _ in 0..(5 + extra) {
                spawn(&mut state, EntityRole::Ground, None);
            }
            for pair in state.pools.ground.windows(2) {
                prop_assert!((pair[0].right() - pair[1].left()).abs() < 1e-3);
            }
        }
    }
}
