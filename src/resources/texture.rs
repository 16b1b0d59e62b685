//! Rendering backend boundary.
//!
//! The engine never draws anything itself. Sprites hold a [`SharedTexture`]
//! provided by the windowing/graphics adapter and only call the three
//! operations of [`Texture`] on it. [`Image`] is an opaque asset handle the
//! engine passes through without inspecting.
//!
//! Textures live behind a mutex because a sprite animation task swaps images
//! from its own thread while the frame loop renders.

use std::sync::{Arc, Mutex, MutexGuard};

use log::trace;

use crate::error::{EngineError, EngineResult};
use crate::geometry::{Point, Vector};

/// Opaque image handle, identified by an asset key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    key: Arc<str>,
}

impl Image {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Capability implemented by a rendering backend.
pub trait Texture: Send {
    /// Move the on-screen image by an offset.
    fn move_by(&mut self, vector: Vector);
    /// Replace the displayed image.
    fn set_image(&mut self, image: &Image);
    /// Draw the texture. Backend failures are reported as
    /// [`EngineError::CollaboratorFailure`].
    fn render(&mut self) -> EngineResult<()>;
}

/// A texture shared between a sprite and its animation task.
pub type SharedTexture = Arc<Mutex<Box<dyn Texture>>>;

/// Wrap a backend texture so it can be attached to a sprite.
pub fn share_texture(texture: impl Texture + 'static) -> SharedTexture {
    Arc::new(Mutex::new(Box::new(texture)))
}

/// Lock a shared texture, mapping a poisoned lock to a collaborator failure.
pub(crate) fn lock_texture(texture: &SharedTexture) -> EngineResult<MutexGuard<'_, Box<dyn Texture>>> {
    texture
        .lock()
        .map_err(|_| EngineError::collaborator("texture lock poisoned"))
}

/// Backend that keeps texture state in memory and logs draws.
///
/// Used by the headless demo driver and handy when no window is available.
#[derive(Debug, Clone, Default)]
pub struct HeadlessTexture {
    pub label: String,
    pub position: Point,
    pub image: Option<Image>,
    pub renders: u64,
}

impl HeadlessTexture {
    pub fn new(label: impl Into<String>, position: Point) -> Self {
        Self {
            label: label.into(),
            position,
            image: None,
            renders: 0,
        }
    }
}

impl Texture for HeadlessTexture {
    fn move_by(&mut self, vector: Vector) {
        self.position.move_by(vector);
    }

    fn set_image(&mut self, image: &Image) {
        self.image = Some(image.clone());
    }

    fn render(&mut self) -> EngineResult<()> {
        self.renders += 1;
        trace!(
            "draw '{}' at ({}, {}) image={}",
            self.label,
            self.position.x,
            self.position.y,
            self.image.as_ref().map(Image::key).unwrap_or("<none>")
        );
        Ok(())
    }
}
