//! The world aggregate and its state machine.
//!
//! Everything the game mutates lives here: player, obstacle pool,
//! background, spawner, RNG and the top-level state. One update pass then
//! one draw pass per frame; draw never mutates.

use macroquad::prelude::{clear_background, vec2, Rect, Vec2, BLACK, WHITE};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::GameAssets;
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::sprite::{
    check_collision, Entity, EntityPool, ScrollingBackground, SCREEN_HEIGHT, SCREEN_WIDTH,
};

use super::hud;
use super::obstacles::{self, Spawner};
use super::player;

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Start screen; confirm begins a run.
    Title,
    /// Simulation running.
    Run,
    /// Run ended; confirm starts a fresh one.
    GameOver,
}

pub struct GameWorld {
    pub state: RunState,
    pub player: Entity,
    pub obstacles: EntityPool,
    pub background: ScrollingBackground,
    spawner: Spawner,
    rng: StdRng,
    config: GameConfig,
    assets: GameAssets,
    debug_boxes: bool,
}

impl GameWorld {
    pub fn new(assets: GameAssets, config: GameConfig) -> GameWorld {
        GameWorld::with_rng(assets, config, StdRng::from_entropy())
    }

    /// Deterministic variant; the game proper seeds from entropy.
    pub fn with_rng(assets: GameAssets, config: GameConfig, rng: StdRng) -> GameWorld {
        let player = player::spawn_player(assets.bird.clone(), assets.bird_size, &config.player);
        let obstacles = EntityPool::new(config.obstacles.pool_capacity);
        let background = ScrollingBackground::new(
            assets.background.clone(),
            vec2(config.background.scroll_speed, 0.0),
            Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
            vec2(1.0, 1.0),
            WHITE,
        );
        GameWorld {
            state: RunState::Title,
            player,
            obstacles,
            background,
            spawner: Spawner::new(config.obstacles.spawn_interval),
            rng,
            config,
            assets,
            debug_boxes: false,
        }
    }

    /// Full reset into a fresh run: new player, empty pool, rewound spawner
    /// and background.
    pub fn reset(&mut self) {
        self.player = player::spawn_player(
            self.assets.bird.clone(),
            self.assets.bird_size,
            &self.config.player,
        );
        self.obstacles.clear();
        self.spawner.reset();
        self.background.offset = Vec2::ZERO;
        self.state = RunState::Run;
    }

    pub fn update(&mut self, input: &FrameInput) {
        if input.toggle_debug {
            self.debug_boxes = !self.debug_boxes;
        }
        match self.state {
            RunState::Title | RunState::GameOver => {
                if input.confirm {
                    self.reset();
                }
            }
            RunState::Run => self.update_run(input),
        }
    }

    fn update_run(&mut self, input: &FrameInput) {
        self.background.update();
        player::update_player(&mut self.player, input.flap, &self.config.player);
        obstacles::update_obstacles(&mut self.obstacles);
        if self.spawner.tick() {
            let velocity = obstacles::roll_velocity(&mut self.rng, self.config.obstacles.max_speed);
            let obstacle = obstacles::spawn_obstacle(
                self.assets.obstacle.clone(),
                self.assets.obstacle_size,
                velocity,
                &self.config.obstacles,
            );
            self.obstacles.insert(obstacle);
        }
        self.resolve_collisions();
    }

    /// Obstacle-vs-player pass. Contact releases the obstacle and costs the
    /// player a hit; a fatal hit ends the run.
    fn resolve_collisions(&mut self) {
        if !self.player.active || !self.player.collidable {
            return;
        }
        for index in 0..self.obstacles.len() {
            let hit = match self.obstacles.get(index) {
                Some(obstacle) if obstacle.active && obstacle.collidable => {
                    check_collision(&self.player, obstacle)
                }
                _ => false,
            };
            if hit {
                self.obstacles.release(index);
                if player::hit_player(&mut self.player, &self.config.player) {
                    self.state = RunState::GameOver;
                    return;
                }
            }
        }
    }

    /// Renders the run scene every frame; Title and GameOver put their text
    /// on top of it.
    pub fn draw(&self) {
        clear_background(BLACK);
        self.background.draw();
        self.player.draw();
        for obstacle in self.obstacles.iter_active() {
            obstacle.draw();
        }
        if self.debug_boxes {
            self.player.draw_collision_box();
            for obstacle in self.obstacles.iter_active() {
                obstacle.draw_collision_box();
            }
        }
        hud::draw_hud(self.player.health);
        match self.state {
            RunState::Title => hud::draw_title(),
            RunState::GameOver => hud::draw_game_over(),
            RunState::Run => {}
        }
    }
}
