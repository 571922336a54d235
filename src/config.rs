//! Game tuning loaded from RON.
//!
//! Every value has a built-in default, so the game runs with no config file
//! at all; `assets/config.ron` overrides whatever fields it names. A file
//! that parses but fails validation is a startup error, not a silent
//! fallback.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = "assets/config.ron";

/// Validation limits so a config cannot ask for absurd worlds
pub mod limits {
    /// Maximum obstacle pool capacity
    pub const MAX_POOL_CAPACITY: usize = 64;
    /// Maximum ticks between spawns (one minute at 60 ticks/sec)
    pub const MAX_SPAWN_INTERVAL: u32 = 3600;
    /// Maximum obstacle speed roll, pixels per tick
    pub const MAX_OBSTACLE_SPEED: i32 = 32;
    /// Maximum starting health (the HUD pads to three digits)
    pub const MAX_HEALTH: i32 = 999;
    /// Maximum invulnerability window, ticks
    pub const MAX_INVULNERABILITY: i32 = 600;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub obstacles: ObstacleConfig,
    pub background: BackgroundConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Downward acceleration, pixels per tick squared.
    pub gravity: f32,
    /// Vertical velocity set on a flap; negative is up.
    pub flap_impulse: f32,
    pub max_fall_speed: f32,
    pub scale: f32,
    pub health: i32,
    /// Ticks of immunity after a hit.
    pub invulnerability_ticks: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Ticks between spawn attempts.
    pub spawn_interval: u32,
    pub pool_capacity: usize,
    pub scale: f32,
    /// Horizontal speed is rolled from [-max_speed, max_speed].
    pub max_speed: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Horizontal scroll, pixels per tick.
    pub scroll_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player: PlayerConfig::default(),
            obstacles: ObstacleConfig::default(),
            background: BackgroundConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            gravity: 0.2,
            flap_impulse: -10.0,
            max_fall_speed: 10.0,
            scale: 0.15,
            health: 5,
            invulnerability_ticks: 30,
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        ObstacleConfig {
            spawn_interval: 30,
            pool_capacity: 3,
            scale: 0.7,
            max_speed: 2,
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        BackgroundConfig { scroll_speed: 2.0 }
    }
}

fn validate_player(player: &PlayerConfig) -> Result<(), String> {
    if !player.gravity.is_finite() || player.gravity <= 0.0 {
        return Err(format!("player.gravity must be positive, got {}", player.gravity));
    }
    if !player.flap_impulse.is_finite() || player.flap_impulse >= 0.0 {
        return Err(format!(
            "player.flap_impulse must be negative (upward), got {}",
            player.flap_impulse
        ));
    }
    if !player.max_fall_speed.is_finite() || player.max_fall_speed <= 0.0 {
        return Err(format!(
            "player.max_fall_speed must be positive, got {}",
            player.max_fall_speed
        ));
    }
    if !player.scale.is_finite() || player.scale <= 0.0 {
        return Err(format!("player.scale must be positive, got {}", player.scale));
    }
    if player.health < 1 || player.health > limits::MAX_HEALTH {
        return Err(format!(
            "player.health must be in 1..={}, got {}",
            limits::MAX_HEALTH,
            player.health
        ));
    }
    if player.invulnerability_ticks < 1 || player.invulnerability_ticks > limits::MAX_INVULNERABILITY
    {
        return Err(format!(
            "player.invulnerability_ticks must be in 1..={}, got {}",
            limits::MAX_INVULNERABILITY,
            player.invulnerability_ticks
        ));
    }
    Ok(())
}

fn validate_obstacles(obstacles: &ObstacleConfig) -> Result<(), String> {
    if obstacles.spawn_interval < 1 || obstacles.spawn_interval > limits::MAX_SPAWN_INTERVAL {
        return Err(format!(
            "obstacles.spawn_interval must be in 1..={}, got {}",
            limits::MAX_SPAWN_INTERVAL,
            obstacles.spawn_interval
        ));
    }
    if obstacles.pool_capacity < 1 || obstacles.pool_capacity > limits::MAX_POOL_CAPACITY {
        return Err(format!(
            "obstacles.pool_capacity must be in 1..={}, got {}",
            limits::MAX_POOL_CAPACITY,
            obstacles.pool_capacity
        ));
    }
    if !obstacles.scale.is_finite() || obstacles.scale <= 0.0 {
        return Err(format!(
            "obstacles.scale must be positive, got {}",
            obstacles.scale
        ));
    }
    if obstacles.max_speed < 1 || obstacles.max_speed > limits::MAX_OBSTACLE_SPEED {
        return Err(format!(
            "obstacles.max_speed must be in 1..={}, got {}",
            limits::MAX_OBSTACLE_SPEED,
            obstacles.max_speed
        ));
    }
    Ok(())
}

fn validate_background(background: &BackgroundConfig) -> Result<(), String> {
    if !background.scroll_speed.is_finite() {
        return Err(format!(
            "background.scroll_speed must be finite, got {}",
            background.scroll_speed
        ));
    }
    Ok(())
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_player(&self.player).map_err(ConfigError::ValidationError)?;
        validate_obstacles(&self.obstacles).map_err(ConfigError::ValidationError)?;
        validate_background(&self.background).map_err(ConfigError::ValidationError)?;
        Ok(())
    }

    /// A missing file falls back to defaults; a file that exists but fails
    /// to read, parse or validate is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            println!("No config at {}, using defaults", path.display());
            return Ok(GameConfig::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = ron::from_str(&contents)?;
        config.validate()?;
        println!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_values_match_the_classic_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.player.gravity, 0.2);
        assert_eq!(config.player.flap_impulse, -10.0);
        assert_eq!(config.player.max_fall_speed, 10.0);
        assert_eq!(config.player.scale, 0.15);
        assert_eq!(config.obstacles.spawn_interval, 30);
        assert_eq!(config.obstacles.pool_capacity, 3);
        assert_eq!(config.obstacles.scale, 0.7);
        assert_eq!(config.background.scroll_speed, 2.0);
    }

    #[test]
    fn test_validation_rejects_bad_fields() {
        let mut config = GameConfig::default();
        config.player.gravity = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.flap_impulse = 3.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.health = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.obstacles.spawn_interval = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.obstacles.pool_capacity = limits::MAX_POOL_CAPACITY + 1;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.obstacles.max_speed = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.background.scroll_speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.ron");
        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");

        let mut config = GameConfig::default();
        config.player.health = 7;
        config.obstacles.spawn_interval = 45;
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        fs::write(&path, text).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(player: (health: 9))").unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded.player.health, 9);
        assert_eq!(loaded.player.gravity, 0.2);
        assert_eq!(loaded.obstacles, ObstacleConfig::default());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(player: (health: ").unwrap();

        match GameConfig::load(&path) {
            Err(ConfigError::ParseError(_)) => {}
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_file_is_a_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(player: (health: -5))").unwrap();

        match GameConfig::load(&path) {
            Err(ConfigError::ValidationError(message)) => {
                assert!(message.contains("player.health"));
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }
}
