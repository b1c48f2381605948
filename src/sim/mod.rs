//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the host
//! - Seeded RNG only
//! - Stable iteration order (pool order = spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod player;
pub mod pool;
pub mod score;
pub mod spawner;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{Hit, check_collisions, find_collision};
pub use entity::{EntityKind, EntityRole, ObstacleData, ScrollingEntity};
pub use geometry::{CollisionBox, aabb_overlap, adjust_collision_box};
pub use player::{Control, Player, PlayerState, TickInput};
pub use pool::EntityPools;
pub use sprite::{HazardKind, SpriteMetrics};
pub use state::{GameEvent, GameState};
pub use tick::tick;
