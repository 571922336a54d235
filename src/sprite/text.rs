//! Drop-shadowed text with explicit horizontal placement.

use macroquad::prelude::*;

use super::SCREEN_WIDTH;

/// Pixel offset of the shadow pass, both axes.
pub const SHADOW_OFFSET: f32 = 2.0;

/// Where a run of text sits horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Left edge at this x.
    At(f32),
    /// Centered on the screen; the width is measured at draw time.
    Centered,
}

/// A label that knows its place and colors. Handy for screens that draw the
/// same lines every frame.
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub text: String,
    pub active: bool,
    pub position: Vec2,
    pub font_size: f32,
    pub tint: Color,
    pub shadow: Color,
}

impl TextLabel {
    /// A `Centered` anchor is resolved once, here, against the measured
    /// text width.
    pub fn new(
        text: &str,
        anchor: TextAnchor,
        y: f32,
        font_size: f32,
        tint: Color,
        shadow: Color,
    ) -> TextLabel {
        let x = resolve_anchor(text, anchor, font_size);
        TextLabel {
            text: text.to_string(),
            active: true,
            position: vec2(x, y),
            font_size,
            tint,
            shadow,
        }
    }

    pub fn draw(&self) {
        if !self.active {
            return;
        }
        draw_shadowed_text(
            &self.text,
            TextAnchor::At(self.position.x),
            self.position.y,
            self.font_size,
            self.tint,
            self.shadow,
        );
    }
}

/// Two-pass draw: shadow first, text on top.
pub fn draw_shadowed_text(
    text: &str,
    anchor: TextAnchor,
    y: f32,
    font_size: f32,
    tint: Color,
    shadow: Color,
) {
    let x = resolve_anchor(text, anchor, font_size);
    draw_text(text, x + SHADOW_OFFSET, y + SHADOW_OFFSET, font_size, shadow);
    draw_text(text, x, y, font_size, tint);
}

fn resolve_anchor(text: &str, anchor: TextAnchor, font_size: f32) -> f32 {
    match anchor {
        TextAnchor::At(x) => x,
        TextAnchor::Centered => {
            let width = measure_text(text, None, font_size as u16, 1.0).width;
            centered_x(width)
        }
    }
}

/// X that centers a run of the given pixel width on screen.
pub fn centered_x(text_width: f32) -> f32 {
    (SCREEN_WIDTH - text_width) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_x_splits_leftover_space() {
        assert_eq!(centered_x(100.0), 590.0);
        assert_eq!(centered_x(SCREEN_WIDTH), 0.0);
        assert_eq!(centered_x(0.0), SCREEN_WIDTH / 2.0);
    }

    #[test]
    fn test_at_anchor_is_taken_verbatim() {
        assert_eq!(resolve_anchor("ignored", TextAnchor::At(37.5), 20.0), 37.5);
    }
}
