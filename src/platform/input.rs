//! Keyboard mapping
//!
//! Key presses become discrete simulation events; nothing is derived from
//! held keys. Escape quits on release.

use minifb::Key;

use crate::sim::{InputEvent, TickInput};

/// Everything the loop needs from one frame of keyboard input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Events for the simulation. minifb reports a frame's presses in key-code
    /// order, so keys pressed within one frame carry no arrival order.
    pub tick: TickInput,
    /// Leave the game loop
    pub quit: bool,
}

/// Simulation event bound to a key, if any
pub fn event_for_key(key: Key) -> Option<InputEvent> {
    match key {
        Key::Enter | Key::NumPadEnter => Some(InputEvent::Confirm),
        Key::Space => Some(InputEvent::Jump),
        Key::LeftShift | Key::RightShift => Some(InputEvent::Shoot),
        Key::Left => Some(InputEvent::StepLeft),
        Key::Right => Some(InputEvent::StepRight),
        _ => None,
    }
}

/// Build a frame's input from newly pressed and newly released keys
pub fn translate_keys(pressed: &[Key], released: &[Key]) -> FrameInput {
    FrameInput {
        tick: TickInput::new(pressed.iter().copied().filter_map(event_for_key).collect()),
        quit: released.contains(&Key::Escape),
    }
}
