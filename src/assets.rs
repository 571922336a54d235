//! Startup texture loading.
//!
//! The three textures the game draws are loaded by path, once, before the
//! first frame. Pixel sizes are captured here so the rest of the game never
//! has to query a texture again.

use macroquad::prelude::*;

pub const BACKGROUND_PATH: &str = "assets/background.png";
pub const BIRD_PATH: &str = "assets/bird.png";
pub const OBSTACLE_PATH: &str = "assets/obstacle.png";

/// A texture load that failed, and where.
#[derive(Debug)]
pub struct AssetError {
    pub path: &'static str,
    pub source: macroquad::Error,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to load {}: {}", self.path, self.source)
    }
}

/// Everything the game draws with. The bird texture is a horizontal sprite
/// sheet; `bird_size` is the whole sheet, not one frame.
pub struct GameAssets {
    pub background: Texture2D,
    pub bird: Texture2D,
    pub bird_size: Vec2,
    pub obstacle: Texture2D,
    pub obstacle_size: Vec2,
}

impl GameAssets {
    pub async fn load() -> Result<GameAssets, AssetError> {
        let background = load_texture_at(BACKGROUND_PATH).await?;
        let bird = load_texture_at(BIRD_PATH).await?;
        let obstacle = load_texture_at(OBSTACLE_PATH).await?;
        let bird_size = bird.size();
        let obstacle_size = obstacle.size();
        Ok(GameAssets {
            background,
            bird,
            bird_size,
            obstacle,
            obstacle_size,
        })
    }
}

async fn load_texture_at(path: &'static str) -> Result<Texture2D, AssetError> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            println!("Loaded {} ({}x{})", path, texture.width(), texture.height());
            Ok(texture)
        }
        Err(source) => Err(AssetError { path, source }),
    }
}
