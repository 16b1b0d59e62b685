//! Render phase.
//!
//! Draws every collected sprite exactly once, in collection order (scene
//! order, then component order inside each object). Drawing is a side effect
//! on the sprite's texture; the first backend failure aborts the phase.

use log::trace;

use crate::components::sprite::Sprite;
use crate::error::EngineResult;

/// Render all sprites and return how many were drawn.
pub fn render_system(sprites: &[&Sprite]) -> EngineResult<usize> {
    for sprite in sprites {
        sprite.render()?;
    }
    trace!("rendered {} sprites", sprites.len());
    Ok(sprites.len())
}
