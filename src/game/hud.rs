//! Score readout and the full-screen text overlays.

use macroquad::prelude::*;

use crate::sprite::{draw_shadowed_text, TextAnchor, TextLabel, SCREEN_HEIGHT};

/// Running score; the health count doubles as the score.
pub fn draw_hud(health: i32) {
    let score = format_score(health);
    draw_shadowed_text(&score, TextAnchor::At(20.0), 20.0, 25.0, WHITE, DARKGREEN);
}

pub fn draw_title() {
    let labels = [
        TextLabel::new(
            "STUDENT BIRD",
            TextAnchor::Centered,
            SCREEN_HEIGHT / 2.0 - 80.0,
            80.0,
            GOLD,
            BLACK,
        ),
        TextLabel::new(
            "Press [ENTER] to start",
            TextAnchor::Centered,
            SCREEN_HEIGHT / 2.0 + 40.0,
            35.0,
            WHITE,
            BLACK,
        ),
        TextLabel::new(
            "[W] or [SPACE] to flap",
            TextAnchor::Centered,
            SCREEN_HEIGHT / 2.0 + 90.0,
            25.0,
            LIGHTGRAY,
            BLACK,
        ),
    ];
    for label in &labels {
        label.draw();
    }
}

pub fn draw_game_over() {
    draw_shadowed_text(
        "GAME OVER",
        TextAnchor::Centered,
        SCREEN_HEIGHT / 2.0,
        80.0,
        GREEN,
        BLACK,
    );
    draw_shadowed_text(
        "Out of lives!",
        TextAnchor::Centered,
        SCREEN_HEIGHT / 2.0 + 90.0,
        45.0,
        WHITE,
        BLUE,
    );
    draw_shadowed_text(
        "Press [ENTER] to restart",
        TextAnchor::Centered,
        SCREEN_HEIGHT / 2.0 + 160.0,
        35.0,
        DARKGREEN,
        BLACK,
    );
}

/// Zero-padded to three digits; a downed player reads 000, not a negative.
fn format_score(health: i32) -> String {
    format!("Score: {:03}", health.max(0))
}
