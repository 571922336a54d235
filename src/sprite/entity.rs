//! The generic game-object: anything that moves, draws, animates or collides.
//!
//! An [`Entity`] is mostly plain data the game mutates directly each tick.
//! The scale/size group is private because the scaled collision box must be
//! recomputed whenever scale changes; [`Entity::set_scale`] is the only way
//! to change it.

use macroquad::prelude::*;

use super::animation::{Animation, AnimationEvent};
use super::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Animation slots available per entity.
pub const MAX_ANIMATION_SLOTS: usize = 5;

#[derive(Debug, Clone)]
pub struct Entity {
    /// Center of the sprite; drawing and collision both work from the center.
    pub position: Vec2,
    pub velocity: Vec2,
    /// Degrees, applied at draw time only. Collision ignores rotation.
    pub rotation: f32,
    pub max_speed: f32,
    pub collidable: bool,
    /// Participates in simulation.
    pub active: bool,
    /// Participates in rendering.
    pub visible: bool,
    /// Life counter; doubles as the score readout.
    pub health: i32,
    // Generic per-entity sub-state hooks.
    pub state_counter: i32,
    pub state: i32,
    pub kind: i32,
    pub blink_counter: i32,
    /// Invulnerability window; while positive, new hits are ignored.
    pub hit_counter: i32,
    pub tint: Color,
    pub texture: Texture2D,
    /// Sprite-sheet cell currently shown; animation moves its x.
    pub texture_rect: Rect,
    scale: f32,
    base_width: f32,
    base_height: f32,
    scaled_width: f32,
    scaled_height: f32,
    animations: [Option<Animation>; MAX_ANIMATION_SLOTS],
}

impl Entity {
    /// `frame` is the sprite-sheet cell size; `None` takes the whole texture
    /// (which queries the texture, so it needs a live rendering context).
    /// The collision box is the frame size shrunk by the per-axis ratio, so
    /// a sprite can look bigger than it hits.
    pub fn new(
        texture: Texture2D,
        position: Vec2,
        frame: Option<Vec2>,
        collision_ratio: Vec2,
    ) -> Entity {
        let frame = frame.unwrap_or_else(|| texture.size());
        let base_width = frame.x * collision_ratio.x;
        let base_height = frame.y * collision_ratio.y;
        Entity {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            max_speed: 0.0,
            collidable: true,
            active: true,
            visible: true,
            health: 0,
            state_counter: 0,
            state: 0,
            kind: 0,
            blink_counter: 0,
            hit_counter: 0,
            tint: WHITE,
            texture,
            texture_rect: Rect::new(0.0, 0.0, frame.x, frame.y),
            scale: 1.0,
            base_width,
            base_height,
            scaled_width: base_width,
            scaled_height: base_height,
            animations: [None; MAX_ANIMATION_SLOTS],
        }
    }

    /// The only sanctioned way to change scale; keeps the scaled collision
    /// box in sync.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.scaled_width = self.base_width * scale;
        self.scaled_height = self.base_height * scale;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn base_width(&self) -> f32 {
        self.base_width
    }

    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    pub fn scaled_width(&self) -> f32 {
        self.scaled_width
    }

    pub fn scaled_height(&self) -> f32 {
        self.scaled_height
    }

    /// Binds a sequence to a slot. Panics on an out-of-range slot.
    pub fn add_animation(&mut self, slot: usize, animation: Animation) {
        assert!(
            slot < MAX_ANIMATION_SLOTS,
            "animation slot {} out of range",
            slot
        );
        self.animations[slot] = Some(animation);
    }

    pub fn animation(&self, slot: usize) -> Option<&Animation> {
        self.animations.get(slot).and_then(|held| held.as_ref())
    }

    /// Ticks the slot's sequence: on a frame change the sheet cell slides to
    /// the new frame, and a completed non-looping sequence hides the entity.
    /// Panics if the slot was never configured.
    pub fn animate(&mut self, slot: usize) {
        assert!(
            slot < MAX_ANIMATION_SLOTS,
            "animation slot {} out of range",
            slot
        );
        let animation = match self.animations[slot].as_mut() {
            Some(animation) => animation,
            None => panic!("animation slot {} was never configured", slot),
        };
        match animation.tick() {
            AnimationEvent::None => {}
            AnimationEvent::Frame(frame) => {
                self.texture_rect.x = frame as f32 * self.texture_rect.w;
            }
            AnimationEvent::Completed => self.visible = false,
        }
    }

    /// Teleports across the screen edge once the center drifts `margin`
    /// pixels past it, landing just inside the opposite edge. Each axis
    /// wraps independently.
    pub fn screen_wrap(&mut self, margin: f32) {
        if self.position.x < -margin {
            self.position.x = SCREEN_WIDTH - 1.0 + margin;
        } else if self.position.x > SCREEN_WIDTH + margin {
            self.position.x = 1.0 - margin;
        }
        if self.position.y < -margin {
            self.position.y = SCREEN_HEIGHT - 1.0 + margin;
        } else if self.position.y > SCREEN_HEIGHT + margin {
            self.position.y = 1.0 - margin;
        }
    }

    /// Clamps the center so the scaled collision box stays fully on screen.
    pub fn screen_bounds(&mut self) {
        let half_width = self.scaled_width / 2.0;
        let half_height = self.scaled_height / 2.0;
        self.position.x = self.position.x.clamp(half_width, SCREEN_WIDTH - half_width);
        self.position.y = self
            .position
            .y
            .clamp(half_height, SCREEN_HEIGHT - half_height);
    }

    /// Draws the current sheet cell centered on `position`, sized by the
    /// frame dimensions and scale. The collision box never affects drawing.
    pub fn draw(&self) {
        if !self.visible {
            return;
        }
        let dest = vec2(self.texture_rect.w, self.texture_rect.h) * self.scale;
        draw_texture_ex(
            &self.texture,
            self.position.x - dest.x / 2.0,
            self.position.y - dest.y / 2.0,
            self.tint,
            DrawTextureParams {
                dest_size: Some(dest),
                source: Some(self.texture_rect),
                rotation: self.rotation.to_radians(),
                ..Default::default()
            },
        );
    }

    /// Debug outline of the collision box.
    pub fn draw_collision_box(&self) {
        let bounds = self.bounding_box();
        draw_rectangle_lines(
            bounds.left,
            bounds.top,
            self.scaled_width,
            self.scaled_height,
            1.0,
            GREEN,
        );
    }
}
