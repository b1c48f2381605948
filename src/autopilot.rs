//! Idle/demo mode - a simple look-ahead player
//!
//! Watches the nearest obstacle ahead and presses the same buttons a human
//! would, through [`GameState::handle_control`].

use crate::sim::{Control, GameState, HazardKind, PlayerState, TickInput};

/// Reaction window in milliseconds of scrolling
const LOOKAHEAD_MS: f32 = 90.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    started: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons the autopilot wants held this frame
    fn desired(&self, state: &GameState) -> TickInput {
        // First press starts the run
        if !self.started || state.player.state == PlayerState::Standing {
            return TickInput {
                jump_held: true,
                crouch_held: false,
            };
        }

        let player = &state.player;
        let run = player.run_view();
        let player_left = player.x - run.width * run.anchor.x;
        let player_right = player_left + run.width;
        let reach = player_right + state.speed * LOOKAHEAD_MS + run.width;

        let threat = state
            .pools
            .obstacles
            .iter()
            .filter(|o| o.right() > player_left && o.left() < reach)
            .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

        let Some(threat) = threat else {
            return TickInput::default();
        };

        let crouch = player.sprites.crouch;
        let crouch_top = state.tuning.floor_y() - crouch.height;
        let bottom = threat.y + threat.height() * (1.0 - threat.view().anchor.y);
        let duck = threat.hazard() == Some(HazardKind::Aerial) && bottom <= crouch_top;

        TickInput {
            jump_held: !duck,
            crouch_held: duck,
        }
    }

    /// Issue press/release edges so `input` matches what the autopilot wants
    pub fn drive(&mut self, state: &mut GameState, input: &mut TickInput) {
        let want = self.desired(state);
        self.started = true;

        // A crouch held through a landing needs a fresh press to take effect
        let late_duck = want.crouch_held && state.player.state == PlayerState::Running;
        if want.crouch_held != input.crouch_held || late_duck {
            state.handle_control(input, Control::Crouch, want.crouch_held);
        }
        if want.jump_held != input.jump_held {
            state.handle_control(input, Control::Jump, want.jump_held);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;

    #[test]
    fn test_autopilot_starts_run() {
        let mut state = GameState::new(8);
        let mut input = TickInput::default();
        let mut pilot = Autopilot::new();
        for _ in 0..200 {
            pilot.drive(&mut state, &mut input);
            tick(&mut state, &input, 16.0);
        }
        assert!(state.is_game_started);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(8);
        let mut input = TickInput::default();
        let mut pilot = Autopilot::new();
        for _ in 0..600 {
            pilot.drive(&mut state, &mut input);
            tick(&mut state, &input, 16.0);
            if state.is_game_over {
                break;
            }
        }
        assert!(state.score > 0.0);
    }
}
