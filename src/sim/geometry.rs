//! Axis-aligned box helpers
//!
//! Collision boxes are authored in a sprite's local frame (origin at the
//! frame's top-left corner). Before testing they are re-anchored into world
//! space using the owning entity's position and the frame's anchor point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sprite::SpriteMetrics;

/// A rectangle, either in a sprite's local frame or in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CollisionBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Local box covering an entire sprite frame
    pub fn full(frame: &SpriteMetrics) -> Self {
        Self::new(0.0, 0.0, frame.width, frame.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Strict overlap test; boxes that merely share an edge do not overlap
#[inline]
pub fn aabb_overlap(a: &CollisionBox, b: &CollisionBox) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Move a local-frame box into world space.
///
/// `origin` is the entity position, which sits at `frame.anchor` within the
/// frame (0.5, 0.5 = centre; 0.5, 1.0 = bottom centre).
pub fn adjust_collision_box(origin: Vec2, frame: &SpriteMetrics, local: &CollisionBox) -> CollisionBox {
    let top_left = origin - frame.size() * frame.anchor;
    CollisionBox::new(
        top_left.x + local.x,
        top_left.y + local.y,
        local.width,
        local.height,
    )
}
