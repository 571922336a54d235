//! Small scalar/angle helpers shared by the sprite layer.

use macroquad::prelude::Vec2;

/// Linear interpolation from `start` to `end` by `amount` in [0, 1].
pub fn lerp(start: f32, end: f32, amount: f32) -> f32 {
    start + (end - start) * amount
}

/// Angle in degrees from `origin` to `target`, screen coordinates (y down,
/// so straight down is +90).
pub fn angle_between(origin: Vec2, target: Vec2) -> f32 {
    (target.y - origin.y).atan2(target.x - origin.x).to_degrees()
}
