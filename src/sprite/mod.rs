//! Sprite Layer Module
//!
//! A small reusable layer for 2D arcade games: a generic entity with scaling
//! and collision boxes, sprite-sheet animation, screen wrap/bounds, a tiled
//! scrolling backdrop, drop-shadowed text and a fixed-capacity entity pool.
//!
//! Key concepts:
//! - Entity: Plain mutable state, centered on its position
//! - Animation: Tick-driven frame sequencing, reported as events
//! - EntityPool: Recycled slots, never freed
//!
//! Everything except the draw methods is texture-agnostic, so game logic
//! built on this layer runs headless in tests.

// Allow unused code - the layer carries API surface this one game does not
// reach for (bounds clamping, angle helpers, generic entity sub-state)
#![allow(dead_code)]

pub mod animation;
pub mod background;
pub mod collision;
pub mod entity;
pub mod math;
pub mod pool;
pub mod text;

/// Fixed window dimensions; the game does not resize.
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Stand-in texture for headless tests. `Texture2D::empty()` requires a live
/// rendering context; wrapping a raw GL id does not, and no test-reachable
/// path ever samples or measures the texture.
#[cfg(test)]
pub(crate) fn test_texture() -> macroquad::prelude::Texture2D {
    use macroquad::miniquad::{RawId, TextureId};
    macroquad::prelude::Texture2D::from_miniquad_texture(TextureId::from_raw_id(RawId::OpenGl(0)))
}

// Re-export main types
pub use animation::{Animation, AnimationEvent, MAX_ANIMATION_FRAMES};
pub use background::ScrollingBackground;
pub use collision::{check_collision, Bounds};
pub use entity::{Entity, MAX_ANIMATION_SLOTS};
pub use pool::EntityPool;
pub use text::{draw_shadowed_text, TextAnchor, TextLabel};
