//! Engine configuration.
//!
//! Settings for the frame driver, sprite animation timing, and the demo scene,
//! loaded from an INI file. Defaults are safe for startup so a missing file is
//! not fatal.
//!
//! # Configuration File Format
//!
//! ```ini
//! [frame]
//! target_fps = 60
//! frame_count = 300
//!
//! [animation]
//! frame_delay_ms = 100
//!
//! [demo]
//! objects = 12
//! seed = 7
//! arena_width = 320
//! arena_height = 180
//! ```

use std::path::PathBuf;
use std::time::Duration;

use configparser::ini::Ini;
use log::info;

/// Default safe values for startup
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FRAME_COUNT: u64 = 300;
const DEFAULT_FRAME_DELAY_MS: u64 = 100;
const DEFAULT_OBJECTS: u32 = 12;
const DEFAULT_SEED: u64 = 7;
const DEFAULT_ARENA_WIDTH: i32 = 320;
const DEFAULT_ARENA_HEIGHT: i32 = 180;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Frames per second the driver aims for. `0` runs unthrottled.
    pub target_fps: u32,
    /// Number of frames the driver processes before exiting.
    pub frame_count: u64,
    /// Delay between sprite animation frames.
    pub frame_delay_ms: u64,
    /// Number of game objects spawned in the demo scene.
    pub objects: u32,
    /// Seed for demo placement.
    pub seed: u64,
    pub arena_width: i32,
    pub arena_height: i32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            frame_count: DEFAULT_FRAME_COUNT,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            objects: DEFAULT_OBJECTS,
            seed: DEFAULT_SEED,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [frame] section
        if let Some(fps) = config.getuint("frame", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(frames) = config.getuint("frame", "frame_count").ok().flatten() {
            self.frame_count = frames;
        }

        // [animation] section
        if let Some(delay) = config.getuint("animation", "frame_delay_ms").ok().flatten() {
            self.frame_delay_ms = delay;
        }

        // [demo] section
        if let Some(objects) = config.getuint("demo", "objects").ok().flatten() {
            self.objects = objects as u32;
        }
        if let Some(seed) = config.getuint("demo", "seed").ok().flatten() {
            self.seed = seed;
        }
        if let Some(w) = config.getint("demo", "arena_width").ok().flatten() {
            self.arena_width = w as i32;
        }
        if let Some(h) = config.getint("demo", "arena_height").ok().flatten() {
            self.arena_height = h as i32;
        }

        info!(
            "Loaded config: fps={}, frames={}, anim delay={}ms, {} objects in {}x{} (seed {})",
            self.target_fps,
            self.frame_count,
            self.frame_delay_ms,
            self.objects,
            self.arena_width,
            self.arena_height,
            self.seed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("frame", "target_fps", Some(self.target_fps.to_string()));
        config.set("frame", "frame_count", Some(self.frame_count.to_string()));
        config.set(
            "animation",
            "frame_delay_ms",
            Some(self.frame_delay_ms.to_string()),
        );
        config.set("demo", "objects", Some(self.objects.to_string()));
        config.set("demo", "seed", Some(self.seed.to_string()));
        config.set("demo", "arena_width", Some(self.arena_width.to_string()));
        config.set("demo", "arena_height", Some(self.arena_height.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Time budget of one frame, or `None` when unthrottled.
    pub fn frame_budget(&self) -> Option<Duration> {
        if self.target_fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / self.target_fps as f64))
        }
    }
}
