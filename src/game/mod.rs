//! Game Rules Module
//!
//! The bird-specific layer on top of the sprite toolkit:
//! - Player: flap physics, hits and invulnerability
//! - Obstacles: spawn scheduling, velocity rolls, pooled movement
//! - Hud: score line and the Title / GameOver text screens
//! - World: the aggregate that ties it all to one state machine
//!
//! Everything here is plain data plus free functions over `Entity`, so the
//! whole layer runs headless in tests.

pub mod hud;
pub mod obstacles;
pub mod player;
pub mod world;

// Re-export main types
pub use world::{GameWorld, RunState};
