//! Cyclic image animation for sprites.
//!
//! An [`Animation`] maps status keys (`"idle"`, `"walk"`, ...) to endless
//! [`ImageCycle`]s and plays the cycle of the current status on the sprite's
//! texture. Playback runs on a worker thread started by
//! [`Animation::start_animation`]; the worker is stopped and joined by
//! [`Animation::stop_animation`] or when the animation is dropped, so no image
//! changes happen after either returns.
//!
//! The worker and the frame loop share the texture through its mutex, and the
//! playback state (cycles + status) through another one.

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use log::{error, trace, warn};
use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};
use crate::resources::texture::{Image, SharedTexture, lock_texture};

/// Status selected when an animation is created.
pub const DEFAULT_STATUS: &str = "idle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Disabled,
    Enabled,
}

/// Endless, restartable sequence of images with its own cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageCycle {
    images: Vec<Image>,
    cursor: usize,
}

impl ImageCycle {
    pub fn new(images: impl IntoIterator<Item = Image>) -> Self {
        Self {
            images: images.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Rewind to the first image.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Never ends unless the cycle has no images.
impl Iterator for ImageCycle {
    type Item = Image;

    fn next(&mut self) -> Option<Image> {
        let image = self.images.get(self.cursor)?.clone();
        self.cursor = (self.cursor + 1) % self.images.len();
        Some(image)
    }
}

/// Commands sent *to* the animation worker
#[derive(Debug)]
enum AnimationCmd {
    SetDelay(Duration),
    Stop,
}

#[derive(Debug)]
struct Playback {
    cycles: FxHashMap<String, ImageCycle>,
    status: String,
}

type SharedPlayback = Arc<Mutex<Playback>>;

struct AnimationTask {
    tx_cmd: Sender<AnimationCmd>,
    handle: JoinHandle<()>,
}

pub struct Animation {
    texture: SharedTexture,
    playback: SharedPlayback,
    state: AnimationState,
    task: Option<AnimationTask>,
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("state", &self.state)
            .field("playback", &self.playback)
            .finish()
    }
}

impl Animation {
    /// Create a disabled animation playing on `texture`.
    pub fn new<K, I>(texture: SharedTexture, frames: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = Image>,
    {
        let cycles = frames
            .into_iter()
            .map(|(key, images)| (key.into(), ImageCycle::new(images)))
            .collect();
        Self {
            texture,
            playback: Arc::new(Mutex::new(Playback {
                cycles,
                status: DEFAULT_STATUS.to_string(),
            })),
            state: AnimationState::Disabled,
            task: None,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == AnimationState::Enabled
    }

    pub fn status(&self) -> EngineResult<String> {
        Ok(lock_playback(&self.playback)?.status.clone())
    }

    pub fn has_status(&self, key: &str) -> EngineResult<bool> {
        Ok(lock_playback(&self.playback)?.cycles.contains_key(key))
    }

    /// Switch to another status. Its cycle restarts from the first image.
    pub fn set_status(&mut self, key: &str) -> EngineResult<()> {
        let mut playback = lock_playback(&self.playback)?;
        let cycle = playback
            .cycles
            .get_mut(key)
            .ok_or_else(|| EngineError::not_found(format!("animation status '{}'", key)))?;
        cycle.reset();
        playback.status = key.to_string();
        Ok(())
    }

    /// Apply the next image of the current status right now.
    pub fn advance(&self) -> EngineResult<Option<Image>> {
        apply_next_frame(&self.playback, &self.texture)
    }

    /// Show the first frame immediately, then one frame every `delay`.
    pub fn start_animation(&mut self, delay: Duration) -> EngineResult<()> {
        if self.state == AnimationState::Enabled {
            return Err(EngineError::AlreadyInState(
                "animation is already enabled".to_string(),
            ));
        }
        {
            let playback = lock_playback(&self.playback)?;
            if !playback.cycles.contains_key(&playback.status) {
                return Err(EngineError::not_found(format!(
                    "animation status '{}'",
                    playback.status
                )));
            }
        }
        self.advance()?;

        let (tx_cmd, rx_cmd) = unbounded::<AnimationCmd>();
        let playback = Arc::clone(&self.playback);
        let texture = Arc::clone(&self.texture);
        let handle = std::thread::spawn(move || animation_worker(rx_cmd, playback, texture, delay));

        self.task = Some(AnimationTask { tx_cmd, handle });
        self.state = AnimationState::Enabled;
        Ok(())
    }

    /// Change the frame delay of a running animation.
    pub fn set_delay(&self, delay: Duration) -> EngineResult<()> {
        let task = self.task.as_ref().ok_or_else(|| {
            EngineError::AlreadyInState("animation is not enabled".to_string())
        })?;
        task.tx_cmd
            .send(AnimationCmd::SetDelay(delay))
            .map_err(|_| EngineError::collaborator("animation worker is gone"))
    }

    /// Stop the worker and wait for it to exit.
    pub fn stop_animation(&mut self) -> EngineResult<()> {
        if self.state == AnimationState::Disabled {
            return Err(EngineError::AlreadyInState(
                "animation is not enabled".to_string(),
            ));
        }
        self.state = AnimationState::Disabled;
        if let Some(task) = self.task.take() {
            // The worker also exits when the channel disconnects.
            let _ = task.tx_cmd.send(AnimationCmd::Stop);
            task.handle
                .join()
                .map_err(|_| EngineError::collaborator("animation worker panicked"))?;
        }
        Ok(())
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.tx_cmd.send(AnimationCmd::Stop);
            let _ = task.handle.join();
        }
    }
}

fn lock_playback(playback: &SharedPlayback) -> EngineResult<std::sync::MutexGuard<'_, Playback>> {
    playback
        .lock()
        .map_err(|_| EngineError::collaborator("animation playback lock poisoned"))
}

fn apply_next_frame(
    playback: &SharedPlayback,
    texture: &SharedTexture,
) -> EngineResult<Option<Image>> {
    let image = {
        let mut playback = lock_playback(playback)?;
        let status = playback.status.clone();
        match playback.cycles.get_mut(&status).and_then(|cycle| cycle.next()) {
            Some(image) => image,
            None => {
                warn!("animation status '{}' has no frames", status);
                return Ok(None);
            }
        }
    };
    lock_texture(texture)?.set_image(&image);
    Ok(Some(image))
}

/// Body of the animation worker thread.
///
/// Waits for a command for at most `delay`; a timeout advances one frame.
/// Exits on [`AnimationCmd::Stop`], when the sender is dropped, or when a lock
/// is poisoned.
fn animation_worker(
    rx_cmd: Receiver<AnimationCmd>,
    playback: SharedPlayback,
    texture: SharedTexture,
    mut delay: Duration,
) {
    trace!("animation worker starting (id={:?})", std::thread::current().id());
    loop {
        match rx_cmd.recv_timeout(delay) {
            Ok(AnimationCmd::SetDelay(d)) => delay = d,
            Ok(AnimationCmd::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                if let Err(e) = apply_next_frame(&playback, &texture) {
                    error!("animation worker stopping: {}", e);
                    break;
                }
            }
        }
    }
    trace!("animation worker exiting");
}
