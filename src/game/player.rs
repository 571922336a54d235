//! The bird: construction, per-tick physics and the hit response.

use macroquad::prelude::{vec2, Texture2D, Vec2, RED, WHITE};

use crate::config::PlayerConfig;
use crate::sprite::{Animation, Entity, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Animation slot holding the looping wing flap.
pub const FLAP_SLOT: usize = 0;
/// Frames across the bird sheet.
pub const FLAP_FRAME_COUNT: usize = 4;
/// Ticks per wing position.
const FLAP_INTERVAL: u32 = 6;

/// A fresh bird a third of the way in, two thirds of the way down, wings
/// going. `sheet_size` is the full sprite sheet; one frame is a quarter of
/// its width.
pub fn spawn_player(texture: Texture2D, sheet_size: Vec2, config: &PlayerConfig) -> Entity {
    let frame = vec2(sheet_size.x / FLAP_FRAME_COUNT as f32, sheet_size.y);
    let mut player = Entity::new(
        texture,
        vec2(SCREEN_WIDTH / 3.0, SCREEN_HEIGHT * 2.0 / 3.0),
        Some(frame),
        vec2(0.5, 0.7),
    );
    player.set_scale(config.scale);
    player.health = config.health;
    player.add_animation(FLAP_SLOT, Animation::new(&[0, 1, 2, 3], FLAP_INTERVAL, true));
    player
}

/// One tick of player simulation; a no-op while the player is down. `flap`
/// is this frame's edge-detected flap input.
pub fn update_player(player: &mut Entity, flap: bool, config: &PlayerConfig) {
    if !player.active {
        return;
    }
    if player.hit_counter > 0 {
        player.hit_counter -= 1;
        if player.hit_counter == 0 {
            // Invulnerability over, end the flash.
            player.tint = WHITE;
        }
    }
    player.velocity.x = 0.0;
    if flap {
        player.velocity.y = config.flap_impulse;
    }
    player.velocity.y = (player.velocity.y + config.gravity).min(config.max_fall_speed);
    player.position += player.velocity;
    player.screen_wrap(0.0);
    player.animate(FLAP_SLOT);
}

/// One obstacle contact. Ignored inside the invulnerability window;
/// otherwise costs a health point, opens a fresh window with a red flash,
/// and downs the player at zero. Returns true when the hit was fatal.
pub fn hit_player(player: &mut Entity, config: &PlayerConfig) -> bool {
    if player.hit_counter > 0 {
        return false;
    }
    player.health -= 1;
    player.hit_counter = config.invulnerability_ticks;
    player.tint = RED;
    if player.health <= 0 {
        player.active = false;
        player.visible = false;
        return true;
    }
    false
}
