//! Per-frame input snapshot.
//!
//! The keyboard is sampled once at the top of the frame; everything after
//! that consumes the snapshot, never macroquad directly, so game logic can
//! be driven by hand in tests.

use macroquad::prelude::*;

/// Edge-detected actions for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// W or Space was just pressed.
    pub flap: bool,
    /// Enter was just pressed.
    pub confirm: bool,
    /// F1 was just pressed.
    pub toggle_debug: bool,
    /// Escape was just pressed.
    pub quit: bool,
}

impl FrameInput {
    pub fn poll() -> FrameInput {
        FrameInput {
            flap: is_key_pressed(KeyCode::W) || is_key_pressed(KeyCode::Space),
            confirm: is_key_pressed(KeyCode::Enter),
            toggle_debug: is_key_pressed(KeyCode::F1),
            quit: is_key_pressed(KeyCode::Escape),
        }
    }
}
