//! Sprite metrics and template catalogs
//!
//! The renderer owns textures and animation playback; the simulation only
//! needs frame sizes, anchors and the collision boxes authored for each
//! frame. Catalogs are static so a lookup can never miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::CollisionBox;

/// Size and anchor of a single sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteMetrics {
    pub width: f32,
    pub height: f32,
    /// Normalized point of the frame that sits on the entity position
    pub anchor: Vec2,
}

impl SpriteMetrics {
    pub const fn new(width: f32, height: f32, anchor: Vec2) -> Self {
        Self {
            width,
            height,
            anchor,
        }
    }

    /// Frame anchored at its centre (all scrolling entities)
    pub const fn centred(width: f32, height: f32) -> Self {
        Self::new(width, height, Vec2::new(0.5, 0.5))
    }

    /// Frame anchored at its bottom centre (the player)
    pub const fn footed(width: f32, height: f32) -> Self {
        Self::new(width, height, Vec2::new(0.5, 1.0))
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Obstacle subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Rooted on the floor, must be jumped
    Ground,
    /// Flies at variable height, may be ducked under
    Aerial,
}

/// Frame id that marks an aerial hazard's first animation frame
pub const AERIAL_FIRST_FRAME: &str = "bird_1";

/// One authored animation frame
#[derive(Debug)]
pub struct FrameTemplate {
    pub id: &'static str,
    pub sprite: SpriteMetrics,
    pub boxes: &'static [CollisionBox],
}

#[derive(Debug)]
pub struct ObstacleTemplate {
    pub name: &'static str,
    pub kind: HazardKind,
    pub frames: &'static [FrameTemplate],
    /// Range the per-spawn speed offset is drawn from
    pub speed_offset: (f32, f32),
}

#[derive(Debug)]
pub struct DecorTemplate {
    pub name: &'static str,
    pub sprite: SpriteMetrics,
    pub speed_offset: (f32, f32),
}

const CACTUS_SMALL_BOXES: [CollisionBox; 3] = [
    CollisionBox::new(0.0, 7.0, 5.0, 27.0),
    CollisionBox::new(4.0, 0.0, 6.0, 34.0),
    CollisionBox::new(10.0, 4.0, 7.0, 14.0),
];

const CACTUS_LARGE_BOXES: [CollisionBox; 3] = [
    CollisionBox::new(0.0, 12.0, 7.0, 38.0),
    CollisionBox::new(8.0, 0.0, 7.0, 49.0),
    CollisionBox::new(13.0, 10.0, 10.0, 38.0),
];

const CACTUS_CLUSTER_BOXES: [CollisionBox; 3] = [
    CollisionBox::new(0.0, 7.0, 15.0, 27.0),
    CollisionBox::new(17.0, 0.0, 17.0, 35.0),
    CollisionBox::new(36.0, 4.0, 15.0, 20.0),
];

const BIRD_UP_BOXES: [CollisionBox; 5] = [
    CollisionBox::new(15.0, 15.0, 16.0, 5.0),
    CollisionBox::new(18.0, 21.0, 24.0, 6.0),
    CollisionBox::new(2.0, 14.0, 4.0, 3.0),
    CollisionBox::new(6.0, 10.0, 4.0, 7.0),
    CollisionBox::new(10.0, 8.0, 6.0, 9.0),
];

const BIRD_DOWN_BOXES: [CollisionBox; 4] = [
    CollisionBox::new(15.0, 15.0, 16.0, 5.0),
    CollisionBox::new(18.0, 21.0, 24.0, 6.0),
    CollisionBox::new(2.0, 14.0, 4.0, 3.0),
    CollisionBox::new(10.0, 18.0, 8.0, 12.0),
];

const CACTUS_SMALL_FRAMES: [FrameTemplate; 1] = [FrameTemplate {
    id: "cactus_small",
    sprite: SpriteMetrics::centred(17.0, 35.0),
    boxes: &CACTUS_SMALL_BOXES,
}];

const CACTUS_LARGE_FRAMES: [FrameTemplate; 1] = [FrameTemplate {
    id: "cactus_large",
    sprite: SpriteMetrics::centred(25.0, 50.0),
    boxes: &CACTUS_LARGE_BOXES,
}];

const CACTUS_CLUSTER_FRAMES: [FrameTemplate; 1] = [FrameTemplate {
    id: "cactus_cluster",
    sprite: SpriteMetrics::centred(51.0, 35.0),
    boxes: &CACTUS_CLUSTER_BOXES,
}];

const BIRD_FRAMES: [FrameTemplate; 2] = [
    FrameTemplate {
        id: AERIAL_FIRST_FRAME,
        sprite: SpriteMetrics::centred(46.0, 40.0),
        boxes: &BIRD_UP_BOXES,
    },
    FrameTemplate {
        id: "bird_2",
        sprite: SpriteMetrics::centred(46.0, 40.0),
        boxes: &BIRD_DOWN_BOXES,
    },
];

/// Every obstacle the spawner can draw from
pub static OBSTACLES: [ObstacleTemplate; 4] = [
    ObstacleTemplate {
        name: "cactus_small",
        kind: HazardKind::Ground,
        frames: &CACTUS_SMALL_FRAMES,
        speed_offset: (0.0, 0.0),
    },
    ObstacleTemplate {
        name: "cactus_large",
        kind: HazardKind::Ground,
        frames: &CACTUS_LARGE_FRAMES,
        speed_offset: (0.0, 0.0),
    },
    ObstacleTemplate {
        name: "cactus_cluster",
        kind: HazardKind::Ground,
        frames: &CACTUS_CLUSTER_FRAMES,
        speed_offset: (0.0, 0.0),
    },
    ObstacleTemplate {
        name: "pterodactyl",
        kind: HazardKind::Aerial,
        frames: &BIRD_FRAMES,
        speed_offset: (-0.04, 0.08),
    },
];

pub static CLOUDS: [DecorTemplate; 2] = [
    DecorTemplate {
        name: "cloud_wide",
        sprite: SpriteMetrics::centred(46.0, 14.0),
        speed_offset: (-0.27, -0.22),
    },
    DecorTemplate {
        name: "cloud_small",
        sprite: SpriteMetrics::centred(32.0, 11.0),
        speed_offset: (-0.26, -0.2),
    },
];

/// Floor tile variants differ only in texture; all share the tile width
pub const GROUND_TILE_VARIANTS: [&str; 3] = ["floor_flat", "floor_bumpy", "floor_pebbles"];
pub const GROUND_TILE_HEIGHT: f32 = 12.0;

/// Obstacle templates eligible for a draw
pub fn obstacle_candidates(aerial_allowed: bool) -> impl Iterator<Item = &'static ObstacleTemplate> {
    OBSTACLES
        .iter()
        .filter(move |t| aerial_allowed || t.kind == HazardKind::Ground)
}

/// Frames and collision boxes of the player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSprites {
    pub stand: SpriteMetrics,
    pub run: SpriteMetrics,
    pub jump: SpriteMetrics,
    pub crouch: SpriteMetrics,
    pub crash: SpriteMetrics,
    /// Fine-grained boxes in the running frame
    pub boxes: Vec<CollisionBox>,
}

impl Default for PlayerSprites {
    fn default() -> Self {
        Self {
            stand: SpriteMetrics::footed(44.0, 47.0),
            run: SpriteMetrics::footed(44.0, 47.0),
            jump: SpriteMetrics::footed(44.0, 47.0),
            crouch: SpriteMetrics::footed(59.0, 25.0),
            crash: SpriteMetrics::footed(44.0, 47.0),
            boxes: vec![
                CollisionBox::new(22.0, 0.0, 17.0, 16.0),
                CollisionBox::new(1.0, 18.0, 30.0, 9.0),
                CollisionBox::new(10.0, 35.0, 14.0, 8.0),
                CollisionBox::new(1.0, 24.0, 29.0, 5.0),
                CollisionBox::new(5.0, 30.0, 21.0, 4.0),
                CollisionBox::new(9.0, 34.0, 15.0, 4.0),
            ],
        }
    }
}
