//! STUDENT BIRD: a small flap-and-dodge arcade game
//!
//! One bird, one button. Gravity pulls, [W] or [SPACE] flaps, obstacles
//! drift out from the middle of the screen and cost a life on contact.
//! Runs at a fixed 1280x720 and simulates in whole frames, so the same
//! inputs always replay the same run.
//!
//! Controls:
//! - [W] / [SPACE]: flap
//! - [ENTER]: start / restart
//! - [F1]: collision box overlay
//! - [ESC]: quit

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod input;
mod sprite;

use macroquad::prelude::*;

use assets::GameAssets;
use config::GameConfig;
use game::GameWorld;
use input::FrameInput;
use sprite::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Simulation and render rate, frames per second.
const TARGET_FPS: f64 = 60.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("STUDENT BIRD v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        platform: miniquad::conf::Platform {
            // Ask the driver for vsync; the frame limiter below covers
            // drivers that ignore it.
            swap_interval: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    println!("=== STUDENT BIRD v{} ===", VERSION);

    let config = match GameConfig::load(config::CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Bad config: {}", e);
            std::process::exit(1);
        }
    };

    let assets = match GameAssets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run `cargo xtask gen-assets` to generate the bundled assets.");
            std::process::exit(1);
        }
    };

    let mut world = GameWorld::new(assets, config);

    loop {
        // Track frame start time for FPS limiting
        #[cfg(not(target_arch = "wasm32"))]
        let frame_start = get_time();

        let frame_input = FrameInput::poll();
        if frame_input.quit {
            break;
        }

        world.update(&frame_input);
        world.draw();

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let target_frame_time = 1.0 / TARGET_FPS;
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            // Spin-wait for precise timing
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: the browser paces frames through requestAnimationFrame

        next_frame().await;
    }
}
