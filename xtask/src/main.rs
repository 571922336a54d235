//! Build automation tasks for STUDENT BIRD
//!
//! Usage:
//!   cargo xtask gen-assets          # Generate the bundled textures
//!   cargo xtask gen-assets --force  # Regenerate even if they exist

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for STUDENT BIRD")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the bundled textures under assets/
    GenAssets {
        /// Overwrite textures that already exist
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenAssets { force } => gen_assets(force),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn gen_assets(force: bool) -> Result<()> {
    let assets = project_root().join("assets");
    std::fs::create_dir_all(&assets).context("Failed to create assets directory")?;

    write_png(&assets.join("background.png"), draw_background(), force)?;
    write_png(&assets.join("bird.png"), draw_bird(), force)?;
    write_png(&assets.join("obstacle.png"), draw_obstacle(), force)?;

    println!("Assets ready: {}", assets.display());
    Ok(())
}

/// Write an image unless it already exists (or `force` is set).
fn write_png(path: &Path, image: RgbaImage, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Skipping {} (exists, use --force to regenerate)", path.display());
        return Ok(());
    }
    let (width, height) = image.dimensions();
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {} ({}x{})", path.display(), width, height);
    Ok(())
}

/// Full-screen sky. Clouds stay clear of the left and right edges and every
/// other row is a flat color, so the texture tiles horizontally without a
/// visible seam.
fn draw_background() -> RgbaImage {
    const WIDTH: u32 = 1280;
    const HEIGHT: u32 = 720;
    let mut image = RgbaImage::new(WIDTH, HEIGHT);

    // Sky gradient, light at the horizon
    let top = (96u8, 178u8, 235u8);
    let bottom = (168u8, 216u8, 252u8);
    for y in 0..HEIGHT {
        let t = y as f32 / (HEIGHT - 1) as f32;
        let color = Rgba([
            lerp_channel(top.0, bottom.0, t),
            lerp_channel(top.1, bottom.1, t),
            lerp_channel(top.2, bottom.2, t),
            255,
        ]);
        for x in 0..WIDTH {
            image.put_pixel(x, y, color);
        }
    }

    // Cloud lumps, each a cluster of overlapping circles
    let cloud = Rgba([245, 250, 255, 255]);
    let clusters: [&[(i32, i32, i32)]; 4] = [
        &[(230, 120, 40), (285, 110, 32), (330, 128, 36)],
        &[(640, 90, 30), (685, 100, 26)],
        &[(900, 190, 44), (960, 180, 34), (1010, 198, 28)],
        &[(430, 250, 26), (470, 244, 22)],
    ];
    for cluster in clusters {
        for &(cx, cy, r) in cluster {
            fill_circle(&mut image, cx, cy, r, cloud);
        }
    }

    // Ground strip along the bottom
    let grass = Rgba([64, 140, 72, 255]);
    let grass_edge = Rgba([40, 100, 52, 255]);
    for y in (HEIGHT - 60)..HEIGHT {
        let color = if y < HEIGHT - 56 { grass_edge } else { grass };
        for x in 0..WIDTH {
            image.put_pixel(x, y, color);
        }
    }

    image
}

/// Four-frame flap sheet, 64x64 per frame. Only the wing moves.
fn draw_bird() -> RgbaImage {
    const FRAME: u32 = 64;
    const FRAMES: u32 = 4;
    let mut image = RgbaImage::new(FRAME * FRAMES, FRAME);

    let body = Rgba([235, 205, 70, 255]);
    let wing = Rgba([205, 165, 45, 255]);
    let eye_white = Rgba([250, 250, 250, 255]);
    let pupil = Rgba([30, 30, 30, 255]);
    let beak = Rgba([230, 130, 40, 255]);

    // Wing vertical offset per frame: up, level, down, level
    let wing_lift = [-9i32, 0, 9, 0];

    for (frame, lift) in wing_lift.iter().enumerate() {
        let ox = frame as i32 * FRAME as i32;

        fill_circle(&mut image, ox + 30, 32, 17, body);
        fill_ellipse(&mut image, ox + 24, 32 + lift, 12, 7, wing);
        fill_circle(&mut image, ox + 38, 25, 5, eye_white);
        fill_circle(&mut image, ox + 40, 25, 2, pupil);

        // Beak: a triangle pointing right
        for x in 46..=58 {
            let half = (58 - x) as f32 * 5.0 / 12.0;
            let y_min = (30.0 - half).floor() as i32;
            let y_max = (30.0 + half).ceil() as i32;
            for y in y_min..=y_max {
                put_pixel_clipped(&mut image, ox + x, y, beak);
            }
        }
    }

    image
}

/// A 64x64 block: dark rim, lit left edge, flat body.
fn draw_obstacle() -> RgbaImage {
    const SIZE: u32 = 64;
    let mut image = RgbaImage::new(SIZE, SIZE);

    let rim = Rgba([24, 90, 36, 255]);
    let highlight = Rgba([120, 200, 110, 255]);
    let body = Rgba([52, 150, 64, 255]);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let on_rim = x < 4 || x >= SIZE - 4 || y < 4 || y >= SIZE - 4;
            let color = if on_rim {
                rim
            } else if x < 12 {
                highlight
            } else {
                body
            };
            image.put_pixel(x, y, color);
        }
    }

    image
}

fn lerp_channel(start: u8, end: u8, t: f32) -> u8 {
    (start as f32 + (end as f32 - start as f32) * t).round() as u8
}

fn put_pixel_clipped(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
        image.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_circle(image: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel_clipped(image, cx + dx, cy + dy, color);
            }
        }
    }
}

fn fill_ellipse(image: &mut RgbaImage, cx: i32, cy: i32, a: i32, b: i32, color: Rgba<u8>) {
    for dy in -b..=b {
        for dx in -a..=a {
            let nx = dx as f32 / a as f32;
            let ny = dy as f32 / b as f32;
            if nx * nx + ny * ny <= 1.0 {
                put_pixel_clipped(image, cx + dx, cy + dy, color);
            }
        }
    }
}
