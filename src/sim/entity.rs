//! Scrolling entities: ground tiles, sky decorations and obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::CollisionBox;
use super::sprite::{FrameTemplate, HazardKind, ObstacleTemplate, SpriteMetrics};

/// Which pool an entity lives in, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRole {
    Ground,
    Sky,
    Obstacle,
}

/// An obstacle's animation frame, copied out of its template at spawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub id: String,
    pub sprite: SpriteMetrics,
    /// Never empty
    pub boxes: Vec<CollisionBox>,
}

impl From<&FrameTemplate> for AnimationFrame {
    fn from(t: &FrameTemplate) -> Self {
        Self {
            id: t.id.to_string(),
            sprite: t.sprite,
            boxes: t.boxes.to_vec(),
        }
    }
}

/// Obstacle-only state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleData {
    pub hazard: HazardKind,
    pub template: String,
    pub frames: Vec<AnimationFrame>,
    pub frame_index: usize,
    /// Time spent on the current frame (ms)
    pub frame_time: f32,
}

impl ObstacleData {
    pub fn from_template(t: &ObstacleTemplate) -> Self {
        Self {
            hazard: t.kind,
            template: t.name.to_string(),
            frames: t.frames.iter().map(AnimationFrame::from).collect(),
            frame_index: 0,
            frame_time: 0.0,
        }
    }

    pub fn current_frame(&self) -> &AnimationFrame {
        &self.frames[self.frame_index % self.frames.len()]
    }

    /// Id of the first authored frame (decides vertical placement)
    pub fn first_frame_id(&self) -> &str {
        &self.frames[0].id
    }

    /// Collision boxes of the frame currently shown
    pub fn current_boxes(&self) -> &[CollisionBox] {
        &self.current_frame().boxes
    }

    /// Advance frame playback; single-frame obstacles never change
    pub fn animate(&mut self, dt: f32, interval: f32) {
        if self.frames.len() < 2 || interval <= 0.0 {
            return;
        }
        self.frame_time += dt;
        while self.frame_time >= interval {
            self.frame_time -= interval;
            self.frame_index = (self.frame_index + 1) % self.frames.len();
        }
    }
}

/// Entity variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Ground { variant: String },
    Sky { variant: String },
    Obstacle(ObstacleData),
}

impl EntityKind {
    pub fn role(&self) -> EntityRole {
        match self {
            EntityKind::Ground { .. } => EntityRole::Ground,
            EntityKind::Sky { .. } => EntityRole::Sky,
            EntityKind::Obstacle(_) => EntityRole::Obstacle,
        }
    }
}

/// Anything that scrolls past the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollingEntity {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub kind: EntityKind,
    /// Size of the base sprite; obstacles report their current frame instead
    pub sprite: SpriteMetrics,
    /// Added to the global scroll speed (always 0 for ground)
    pub speed_offset: f32,
    /// Scrolled off the left edge, waiting for the sweep
    pub garbage: bool,
}

impl ScrollingEntity {
    pub fn new(id: u32, kind: EntityKind, sprite: SpriteMetrics) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            kind,
            sprite,
            speed_offset: 0.0,
            garbage: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn role(&self) -> EntityRole {
        self.kind.role()
    }

    /// Frame currently presented by the renderer
    pub fn view(&self) -> &SpriteMetrics {
        match &self.kind {
            EntityKind::Obstacle(data) => &data.current_frame().sprite,
            _ => &self.sprite,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.view().width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.view().height
    }

    /// Left and right edges (entities are centre-anchored)
    pub fn left(&self) -> f32 {
        self.x - self.width() * self.view().anchor.x
    }

    pub fn right(&self) -> f32 {
        self.left() + self.width()
    }

    pub fn obstacle(&self) -> Option<&ObstacleData> {
        match &self.kind {
            EntityKind::Obstacle(data) => Some(data),
            _ => None,
        }
    }

    pub fn hazard(&self) -> Option<HazardKind> {
        self.obstacle().map(|o| o.hazard)
    }

    /// Position change for one step at the given global speed
    #[inline]
    pub fn scroll(&mut self, speed: f32, dt: f32) {
        self.x -= (speed + self.speed_offset) * dt;
        if self.x < -self.width() / 2.0 {
            self.garbage = true;
        }
    }
}
