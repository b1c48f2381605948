//! The player character: control mapping and vertical physics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::CollisionBox;
use super::sprite::{PlayerSprites, SpriteMetrics};
use crate::tuning::Tuning;

/// Player animation states the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Idle before the first jump
    Standing,
    Running,
    /// Airborne; ignores presses until it lands
    Jumping,
    Crouching,
    /// Terminal, reached only through a collision
    Crashed,
}

/// Logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Jump,
    Crouch,
}

/// Held-button latches, sampled once at the start of each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub jump_held: bool,
    pub crouch_held: bool,
}

impl TickInput {
    /// Latch a button edge
    pub fn apply(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Jump => self.jump_held = pressed,
            Control::Crouch => self.crouch_held = pressed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// `None` until the first jump; the world stays still until then
    pub speed_y: Option<f32>,
    pub state: PlayerState,
    pub sprites: PlayerSprites,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            speed_y: None,
            state: PlayerState::Standing,
            sprites: PlayerSprites::default(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Frame for the current state
    pub fn current_view(&self) -> &SpriteMetrics {
        match self.state {
            PlayerState::Standing => &self.sprites.stand,
            PlayerState::Running => &self.sprites.run,
            PlayerState::Jumping => &self.sprites.jump,
            PlayerState::Crouching => &self.sprites.crouch,
            PlayerState::Crashed => &self.sprites.crash,
        }
    }

    pub fn run_view(&self) -> &SpriteMetrics {
        &self.sprites.run
    }

    /// Boxes used by the narrow phase, in the current frame's local space
    pub fn active_boxes(&self) -> Vec<CollisionBox> {
        if self.state == PlayerState::Crouching {
            vec![CollisionBox::full(&self.sprites.crouch)]
        } else {
            self.sprites.boxes.clone()
        }
    }

    pub fn jump(&mut self, velocity: f32) {
        self.speed_y = Some(velocity);
        self.state = PlayerState::Jumping;
    }

    pub fn crouch(&mut self) {
        self.state = PlayerState::Crouching;
    }

    pub fn run(&mut self) {
        self.state = PlayerState::Running;
    }

    pub fn crash(&mut self) {
        self.state = PlayerState::Crashed;
    }

    /// Edge-triggered transition for a button press or release
    pub fn handle_control(&mut self, control: Control, pressed: bool, tuning: &Tuning) {
        match (self.state, control, pressed) {
            (PlayerState::Running | PlayerState::Standing, Control::Jump, true) => {
                self.jump(tuning.jump_velocity)
            }
            (PlayerState::Running, Control::Crouch, true) => self.crouch(),
            (PlayerState::Crouching, Control::Jump, true) => self.run(),
            (PlayerState::Crouching, Control::Crouch, false) => self.run(),
            _ => {}
        }
    }

    /// Integrate vertical motion; returns true when the player touched the floor.
    ///
    /// Does nothing before the first jump.
    pub fn integrate(&mut self, input: &TickInput, dt: f32, tuning: &Tuning) -> bool {
        let Some(mut speed_y) = self.speed_y else {
            return false;
        };
        let g = tuning.gravity;

        if input.jump_held && self.y > tuning.jump_height_max && speed_y < 0.0 {
            speed_y -= g * dt;
        } else if input.crouch_held {
            speed_y += g * tuning.crouch_descent_factor * dt;
        }

        speed_y += g * dt;
        self.y += speed_y * dt;

        let floor_y = tuning.floor_y();
        if self.y >= floor_y {
            self.y = floor_y;
            self.speed_y = Some(0.0);
            // Only an airborne player lands into a run; a crouch on the floor holds
            if self.state == PlayerState::Jumping {
                self.run();
            }
            return true;
        }

        self.speed_y = Some(speed_y);
        false
    }
}
