//! Player vs obstacle collision detection
//!
//! Two phases per obstacle: a cheap test between whole sprite frames, then
//! the authored sub-boxes of both sides. Irregular shapes (a bird's wings,
//! a crouching runner) only collide where their sub-boxes really touch.

use super::entity::ScrollingEntity;
use super::geometry::{CollisionBox, aabb_overlap, adjust_collision_box};
use super::player::Player;
use super::state::GameState;

/// A detected hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Obstacle that was hit
    pub obstacle_id: u32,
    /// World-space boxes that overlapped
    pub player_box: CollisionBox,
    pub obstacle_box: CollisionBox,
}

/// Broad phase: full running frame of the player vs the obstacle's frame
pub fn broad_phase(player: &Player, obstacle: &ScrollingEntity) -> bool {
    let run = player.run_view();
    let player_box = adjust_collision_box(player.pos(), run, &CollisionBox::full(run));
    let view = obstacle.view();
    let obstacle_box = adjust_collision_box(obstacle.pos(), view, &CollisionBox::full(view));
    aabb_overlap(&player_box, &obstacle_box)
}

/// Narrow phase: every player sub-box against every obstacle sub-box
pub fn narrow_phase(player: &Player, obstacle: &ScrollingEntity) -> Option<Hit> {
    let data = obstacle.obstacle()?;
    let player_frame = player.current_view();
    let obstacle_frame = obstacle.view();

    for local in player.active_boxes() {
        let player_box = adjust_collision_box(player.pos(), player_frame, &local);
        for obs_local in data.current_boxes() {
            let obstacle_box = adjust_collision_box(obstacle.pos(), obstacle_frame, obs_local);
            if aabb_overlap(&player_box, &obstacle_box) {
                return Some(Hit {
                    obstacle_id: obstacle.id,
                    player_box,
                    obstacle_box,
                });
            }
        }
    }
    None
}

/// First obstacle the player touches, if any
pub fn find_collision<'a>(
    player: &Player,
    obstacles: impl IntoIterator<Item = &'a ScrollingEntity>,
) -> Option<Hit> {
    obstacles
        .into_iter()
        .filter(|o| broad_phase(player, o))
        .find_map(|o| narrow_phase(player, o))
}

/// Check the player against every live obstacle; ends the run on a hit
pub fn check_collisions(state: &mut GameState) -> Option<Hit> {
    if state.is_crashed {
        return None;
    }
    let hit = find_collision(&state.player, &state.pools.obstacles)?;
    log::debug!(
        "Collision with obstacle #{} at ({:.1}, {:.1})",
        hit.obstacle_id,
        hit.obstacle_box.x,
        hit.obstacle_box.y
    );
    state.on_game_over();
    Some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{EntityKind, ObstacleData};
    use crate::sim::player::PlayerState;
    use crate::sim::sprite::OBSTACLES;
    use crate::tuning::Tuning;

    fn obstacle(template: usize, x: f32, y: f32) -> ScrollingEntity {
        let data = ObstacleData::from_template(&OBSTACLES[template]);
        let sprite = data.current_frame().sprite;
        let mut e = ScrollingEntity::new(template as u32 + 1, EntityKind::Obstacle(data), sprite);
        e.x = x;
        e.y = y;
        e
    }

    fn runner() -> Player {
        let t = Tuning::default();
        let mut p = Player::new(t.player_x, t.floor_y());
        p.state = PlayerState::Running;
        p
    }

    #[test]
    fn test_cactus_hits_runner() {
        let p = runner();
        let cactus = obstacle(1, 100.0, 135.0);
        assert!(broad_phase(&p, &cactus));
        let hit = find_collision(&p, [&cactus]).unwrap();
        assert_eq!(hit.obstacle_id, cactus.id);
    }

    #[test]
    fn test_far_obstacle_misses() {
        let p = runner();
        let cactus = obstacle(0, 400.0, 142.5);
        assert!(!broad_phase(&p, &cactus));
        assert!(find_collision(&p, [&cactus]).is_none());
    }

    #[test]
    fn test_crouching_under_bird_is_safe() {
        let mut p = runner();
        let bird = obstacle(3, 100.0, 120.0);
        // Frames overlap, authored boxes don't reach the crouched body
        assert!(broad_phase(&p, &bird));
        p.state = PlayerState::Crouching;
        assert!(narrow_phase(&p, &bird).is_none());
    }

    #[test]
    fn test_standing_into_bird_collides() {
        let p = runner();
        let bird = obstacle(3, 100.0, 120.0);
        assert!(narrow_phase(&p, &bird).is_some());
    }

    #[test]
    fn test_result_independent_of_order() {
        let p = runner();
        let near = obstacle(1, 100.0, 135.0);
        let far = obstacle(0, 600.0, 142.5);
        let forward = find_collision(&p, [&near, &far]).is_some();
        let backward = find_collision(&p, [&far, &near]).is_some();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_check_collisions_ends_game() {
        let mut state = GameState::new(1);
        state.pools.obstacles.clear();
        state.pools.append(obstacle(1, state.player.x, 135.0));
        state.player.state = PlayerState::Running;
        assert!(check_collisions(&mut state).is_some());
        assert!(state.is_game_over);
        assert!(state.is_crashed);
        assert_eq!(state.player.state, PlayerState::Crashed);
        // Already crashed: nothing more to report
        assert!(check_collisions(&mut state).is_none());
    }
}
