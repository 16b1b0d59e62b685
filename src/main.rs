//! gamecore2d demo driver.
//!
//! Runs the frame loop headless: a scene of randomly placed boxes bouncing
//! inside an arena, each with a box collider and an animated sprite drawn
//! through [`HeadlessTexture`]. Every frame the boxes move, then
//! [`GameProcessor::process`] renders them and fires `on_collision` slots.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 600 --json
//! ```

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use gamecore2d::components::boxcollider::BoxCollider;
use gamecore2d::components::sprite::Sprite;
use gamecore2d::error::EngineResult;
use gamecore2d::gameobject::GameObject;
use gamecore2d::geometry::{Point, Rectangle, Vector};
use gamecore2d::processor::{FrameStats, GameProcessor};
use gamecore2d::resources::engineconfig::EngineConfig;
use gamecore2d::resources::texture::{HeadlessTexture, Image, share_texture};
use gamecore2d::scene::{Scene, SceneManager};

const SCENE_NAME: &str = "arena";
const BOX_SIZE: i32 = 8;
const COLLIDER: &str = "body";
const LOOK: &str = "look";

/// gamecore2d headless demo
#[derive(Parser)]
#[command(version, about = "Headless demo of the gamecore2d frame loop")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to process (overrides the config file).
    #[arg(long)]
    frames: Option<u64>,

    /// Seed for object placement (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the run summary as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    frames: u64,
    objects: usize,
    totals: FrameStats,
    notifications: u64,
    elapsed_ms: u128,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::with_path(path),
        None => EngineConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        // ignore errors, use defaults
        debug!("{}", e);
    }
    if let Some(frames) = cli.frames {
        config.frame_count = frames;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    info!("Hello, world! This is gamecore2d!");
    match run(&config) {
        Ok(summary) => {
            info!(
                "{} frames, {} objects: {} sprites drawn, {} collider tests, {} collisions, {} notifications in {} ms",
                summary.frames,
                summary.objects,
                summary.totals.sprites_rendered,
                summary.totals.collider_tests,
                summary.totals.collisions,
                summary.notifications,
                summary.elapsed_ms
            );
            if cli.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(config: &EngineConfig) -> EngineResult<Summary> {
    let notifications = Rc::new(Cell::new(0u64));
    let (scene, mut velocities) = build_scene(config, &notifications)?;

    let mut manager = SceneManager::new();
    manager.add_scene(scene);
    manager.set_active_scene(SCENE_NAME)?;

    start_animations(manager.active_scene_mut()?, config)?;

    let started = Instant::now();
    let mut totals = FrameStats::default();
    for frame in 0..config.frame_count {
        let frame_start = Instant::now();

        let scene = manager.active_scene_mut()?;
        move_boxes(scene, &mut velocities, config)?;
        totals += GameProcessor::process(scene)?;

        if frame % 60 == 0 {
            debug!("frame {}: {:?}", frame, totals);
        }
        if let Some(budget) = config.frame_budget() {
            if let Some(rest) = budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    let scene = manager.active_scene_mut()?;
    stop_animations(scene)?;

    Ok(Summary {
        frames: config.frame_count,
        objects: scene.len(),
        totals,
        notifications: notifications.get(),
        elapsed_ms: started.elapsed().as_millis(),
    })
}

fn build_scene(config: &EngineConfig, notifications: &Rc<Cell<u64>>) -> EngineResult<(Scene, Vec<Vector>)> {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let mut scene = Scene::new(SCENE_NAME);
    let mut velocities = Vec::new();

    let max_x = (config.arena_width - BOX_SIZE).max(1);
    let max_y = (config.arena_height - BOX_SIZE).max(1);

    for i in 0..config.objects {
        let tag = if i % 2 == 0 { "ball" } else { "block" };
        let ul = Point::new(rng.i32(0..max_x), rng.i32(0..max_y));

        let mut gameobject = GameObject::tagged(format!("box{i}"), tag);
        gameobject.add_component(BoxCollider::new(
            COLLIDER,
            Rectangle::from_wh(ul, BOX_SIZE, BOX_SIZE),
        ));
        let mut sprite = Sprite::new(LOOK, share_texture(HeadlessTexture::new(format!("box{i}"), ul)));
        sprite.bind_animation([
            (
                "idle",
                vec![Image::new(format!("{tag}_idle_0")), Image::new(format!("{tag}_idle_1"))],
            ),
            ("hit", vec![Image::new(format!("{tag}_hit"))]),
        ]);
        gameobject.add_component(sprite);

        let counter = Rc::clone(notifications);
        gameobject.on_collision(move |this, other| {
            counter.set(counter.get() + 1);
            debug!("{} collided with {}", this.name(), other.name());
            Ok(())
        });

        scene.add_gameobject(gameobject);
        velocities.push(Vector::new(rng.i32(-2..=2), rng.i32(-2..=2)));
    }
    Ok((scene, velocities))
}

fn start_animations(scene: &mut Scene, config: &EngineConfig) -> EngineResult<()> {
    for index in 0..scene.len() {
        let gameobject = scene.get_gameobject_mut(index)?;
        if gameobject.tag() == "ball" {
            gameobject.sprite_mut(LOOK)?.start_animation(config.animation_delay())?;
        }
    }
    Ok(())
}

fn stop_animations(scene: &mut Scene) -> EngineResult<()> {
    for index in 0..scene.len() {
        let sprite = scene.get_gameobject_mut(index)?.sprite_mut(LOOK)?;
        if sprite.animation().is_some_and(|a| a.is_enabled()) {
            sprite.stop_animation()?;
        }
    }
    Ok(())
}

/// Move every box by its velocity, bouncing off the arena walls.
fn move_boxes(scene: &mut Scene, velocities: &mut [Vector], config: &EngineConfig) -> EngineResult<()> {
    for (index, velocity) in velocities.iter_mut().enumerate() {
        let gameobject = scene.get_gameobject_mut(index)?;
        let rect = *gameobject.box_collider(COLLIDER)?.collider();
        let next_x = rect.ul.x + velocity.dx;
        let next_y = rect.ul.y + velocity.dy;
        if next_x < 0 || next_x + rect.width() > config.arena_width {
            velocity.dx = -velocity.dx;
        }
        if next_y < 0 || next_y + rect.height() > config.arena_height {
            velocity.dy = -velocity.dy;
        }
        gameobject.move_by(*velocity)?;
    }
    Ok(())
}
