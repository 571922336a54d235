//! Auto-scrolling tiled backdrop.

use macroquad::prelude::*;

use super::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A texture tiled across a destination rectangle whose sample window slides
/// a little every tick. Speed is stored normalized to the screen dimensions,
/// so an offset of 1.0 is one full scroll across the destination.
#[derive(Debug, Clone)]
pub struct ScrollingBackground {
    pub tiling: Vec2,
    /// Accumulates without bound; only the fractional part matters to draw.
    pub offset: Vec2,
    pub speed: Vec2,
    pub dest: Rect,
    pub tint: Color,
    pub texture: Texture2D,
}

impl ScrollingBackground {
    /// `speed` is in pixels per tick and is normalized on the way in.
    pub fn new(texture: Texture2D, speed: Vec2, dest: Rect, tiling: Vec2, tint: Color) -> Self {
        ScrollingBackground {
            tiling,
            offset: Vec2::ZERO,
            speed: vec2(speed.x / SCREEN_WIDTH, speed.y / SCREEN_HEIGHT),
            dest,
            tint,
            texture,
        }
    }

    pub fn update(&mut self) {
        self.offset += self.speed;
    }

    /// Tiles the texture `tiling` times across `dest`, shifted left/up by
    /// the fractional part of the offset. One extra row and column cover the
    /// gap the shift opens.
    pub fn draw(&self) {
        let tile_width = self.dest.w / self.tiling.x;
        let tile_height = self.dest.h / self.tiling.y;
        let phase_x = self.offset.x.rem_euclid(1.0) * tile_width;
        let phase_y = self.offset.y.rem_euclid(1.0) * tile_height;
        let columns = self.tiling.x.ceil() as i32 + 1;
        let rows = self.tiling.y.ceil() as i32 + 1;
        for row in 0..rows {
            for column in 0..columns {
                draw_texture_ex(
                    &self.texture,
                    self.dest.x - phase_x + column as f32 * tile_width,
                    self.dest.y - phase_y + row as f32 * tile_height,
                    self.tint,
                    DrawTextureParams {
                        dest_size: Some(vec2(tile_width, tile_height)),
                        ..Default::default()
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_background(speed: Vec2) -> ScrollingBackground {
        ScrollingBackground::new(
            crate::sprite::test_texture(),
            speed,
            Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
            vec2(1.0, 1.0),
            WHITE,
        )
    }

    #[test]
    fn test_speed_is_normalized_to_screen() {
        let background = test_background(vec2(2.0, 7.2));
        assert_eq!(background.speed.x, 2.0 / SCREEN_WIDTH);
        assert_eq!(background.speed.y, 7.2 / SCREEN_HEIGHT);
    }

    #[test]
    fn test_offset_accumulates_every_update() {
        let mut background = test_background(vec2(2.0, 0.0));
        assert_eq!(background.offset, Vec2::ZERO);
        for _ in 0..10 {
            background.update();
        }
        assert!((background.offset.x - 10.0 * 2.0 / SCREEN_WIDTH).abs() < 1e-6);
        assert_eq!(background.offset.y, 0.0);
    }

    #[test]
    fn test_negative_speed_scrolls_backwards() {
        let mut background = test_background(vec2(-4.0, 0.0));
        background.update();
        assert!(background.offset.x < 0.0);
    }
}
