//! Obstacle spawning and kinematics.

use macroquad::prelude::{vec2, Texture2D, Vec2};
use rand::Rng;

use crate::config::ObstacleConfig;
use crate::sprite::{Entity, EntityPool, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Tick counter driving periodic spawns: counts up to the interval, fires,
/// starts over.
pub struct Spawner {
    counter: u32,
    interval: u32,
}

impl Spawner {
    pub fn new(interval: u32) -> Spawner {
        Spawner {
            counter: 0,
            interval,
        }
    }

    /// Advances one tick; true means an obstacle is due right now.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter < self.interval {
            return false;
        }
        self.counter = 0;
        true
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Horizontal drift for a new obstacle: uniform over the whole range,
/// rerolled while the roll is a zero vector so nothing ever sits still.
pub fn roll_velocity(rng: &mut impl Rng, max_speed: i32) -> Vec2 {
    loop {
        let velocity = vec2(rng.gen_range(-max_speed..=max_speed) as f32, 0.0);
        if velocity != Vec2::ZERO {
            return velocity;
        }
    }
}

/// A new obstacle at screen center with the given drift.
pub fn spawn_obstacle(
    texture: Texture2D,
    texture_size: Vec2,
    velocity: Vec2,
    config: &ObstacleConfig,
) -> Entity {
    let mut obstacle = Entity::new(
        texture,
        vec2(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
        Some(texture_size),
        vec2(0.7, 0.7),
    );
    obstacle.set_scale(config.scale);
    obstacle.velocity = velocity;
    obstacle
}

/// Kinematics for every active obstacle: integrate, then wrap with a margin
/// of half the scaled width so each one fully leaves before reappearing.
pub fn update_obstacles(pool: &mut EntityPool) {
    for obstacle in pool.iter_active_mut() {
        obstacle.position += obstacle.velocity;
        let margin = obstacle.scaled_width() / 2.0;
        obstacle.screen_wrap(margin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_obstacle(velocity: Vec2) -> Entity {
        spawn_obstacle(
            crate::sprite::test_texture(),
            vec2(64.0, 64.0),
            velocity,
            &ObstacleConfig::default(),
        )
    }

    #[test]
    fn test_spawner_fires_on_the_interval_tick() {
        let mut spawner = Spawner::new(30);
        for _ in 0..29 {
            assert!(!spawner.tick());
        }
        assert!(spawner.tick());
        // Counter restarted: another full interval until the next one.
        for _ in 0..29 {
            assert!(!spawner.tick());
        }
        assert!(spawner.tick());
    }

    #[test]
    fn test_spawner_reset_restarts_the_count() {
        let mut spawner = Spawner::new(10);
        for _ in 0..9 {
            spawner.tick();
        }
        spawner.reset();
        assert!(!spawner.tick());
    }

    #[test]
    fn test_roll_velocity_is_never_zero() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let velocity = roll_velocity(&mut rng, 2);
            assert_ne!(velocity, Vec2::ZERO);
            assert!(velocity.x >= -2.0 && velocity.x <= 2.0);
            assert_eq!(velocity.y, 0.0);
            assert_eq!(velocity.x, velocity.x.trunc());
        }
    }

    #[test]
    fn test_spawn_is_centered_and_scaled() {
        let obstacle = test_obstacle(vec2(2.0, 0.0));
        assert_eq!(obstacle.position, vec2(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
        assert_eq!(obstacle.scale(), 0.7);
        // 64 * 0.7 ratio * 0.7 scale
        assert!((obstacle.scaled_width() - 31.36).abs() < 1e-3);
        assert_eq!(obstacle.velocity, vec2(2.0, 0.0));
    }

    #[test]
    fn test_update_moves_active_obstacles() {
        let mut pool = EntityPool::new(3);
        pool.insert(test_obstacle(vec2(2.0, 0.0)));
        pool.insert(test_obstacle(vec2(-1.0, 0.0)));
        update_obstacles(&mut pool);
        assert_eq!(pool.get(0).unwrap().position.x, SCREEN_WIDTH / 2.0 + 2.0);
        assert_eq!(pool.get(1).unwrap().position.x, SCREEN_WIDTH / 2.0 - 1.0);
    }

    #[test]
    fn test_released_obstacles_do_not_move() {
        let mut pool = EntityPool::new(3);
        pool.insert(test_obstacle(vec2(2.0, 0.0)));
        pool.release(0);
        update_obstacles(&mut pool);
        assert_eq!(pool.get(0).unwrap().position.x, SCREEN_WIDTH / 2.0);
    }

    #[test]
    fn test_obstacle_wraps_once_fully_off_screen() {
        let mut pool = EntityPool::new(1);
        let mut obstacle = test_obstacle(vec2(-2.0, 0.0));
        let margin = obstacle.scaled_width() / 2.0;
        obstacle.position.x = -margin + 3.0;
        pool.insert(obstacle);

        // One step out: not past the margin band yet, no wrap.
        update_obstacles(&mut pool);
        assert!((pool.get(0).unwrap().position.x - (-margin + 1.0)).abs() < 1e-4);

        // Next step crosses the band: wraps to just outside the right edge.
        update_obstacles(&mut pool);
        assert!((pool.get(0).unwrap().position.x - (SCREEN_WIDTH - 1.0 + margin)).abs() < 1e-4);
    }
}
