//! Raw keyboard/pointer events to logical controls

use crate::sim::Control;

/// Platform input as delivered by the host's event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Keyboard event, `key` as reported by the platform (`" "`, `"Control"`, ...)
    Key { key: String, down: bool },
    /// Pointer or touch press/release anywhere on the page
    Pointer { down: bool },
}

/// Maps raw events to `(Control, pressed)` edges.
///
/// Touch devices play with a single button: every pointer press is a jump.
/// Keyboards get jump and crouch keys; pointer events are ignored there.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputMapper {
    pub touch_enabled: bool,
}

impl InputMapper {
    pub fn new(touch_enabled: bool) -> Self {
        Self { touch_enabled }
    }

    pub fn map(&self, raw: &RawInput) -> Option<(Control, bool)> {
        match raw {
            RawInput::Pointer { down } if self.touch_enabled => Some((Control::Jump, *down)),
            RawInput::Pointer { .. } => None,
            RawInput::Key { .. } if self.touch_enabled => None,
            RawInput::Key { key, down } => {
                let control = match key.as_str() {
                    " " | "Space" | "ArrowUp" => Control::Jump,
                    "Control" | "ArrowDown" => Control::Crouch,
                    _ => return None,
                };
                Some((control, *down))
            }
        }
    }
}
