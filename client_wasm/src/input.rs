//! Keyboard input handling

use game_core::Direction;
use web_sys::{KeyboardEvent, TouchEvent};

/// Map a key to the paddle direction it controls
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

/// Extract the paddle direction from a keyboard event
pub fn direction_from_event(event: &KeyboardEvent) -> Option<Direction> {
    direction_for_key(&event.key())
}

/// Viewport Y of the first touch point, if any
pub fn first_touch_y(event: &TouchEvent) -> Option<f32> {
    event.touches().get(0).map(|touch| touch.client_y() as f32)
}
