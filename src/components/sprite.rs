use std::time::Duration;

use crate::components::animation::Animation;
use crate::components::component::ComponentIdentity;
use crate::error::{EngineError, EngineResult};
use crate::geometry::Vector;
use crate::resources::texture::{Image, SharedTexture, lock_texture};

/// Sprite is a visual attached to a game object. Drawing, moving and image
/// changes are delegated to its texture; an optional [`Animation`] cycles
/// images on the same texture.
pub struct Sprite {
    identity: ComponentIdentity,
    texture: SharedTexture,
    animation: Option<Animation>,
}

impl std::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sprite")
            .field("identity", &self.identity)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl Sprite {
    pub fn new(name: impl Into<String>, texture: SharedTexture) -> Self {
        Self {
            identity: ComponentIdentity::new(name),
            texture,
            animation: None,
        }
    }

    pub fn tagged(name: impl Into<String>, tag: impl Into<String>, texture: SharedTexture) -> Self {
        Self {
            identity: ComponentIdentity::with_tag(name, tag),
            texture,
            animation: None,
        }
    }

    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    pub fn texture(&self) -> &SharedTexture {
        &self.texture
    }

    pub fn move_by(&self, vector: Vector) -> EngineResult<()> {
        lock_texture(&self.texture)?.move_by(vector);
        Ok(())
    }

    pub fn set_image(&self, image: &Image) -> EngineResult<()> {
        lock_texture(&self.texture)?.set_image(image);
        Ok(())
    }

    pub fn render(&self) -> EngineResult<()> {
        lock_texture(&self.texture)?.render()
    }

    /// Attach an animation built from `frames`, replacing (and stopping) any
    /// previous one.
    pub fn bind_animation<K, I>(&mut self, frames: impl IntoIterator<Item = (K, I)>)
    where
        K: Into<String>,
        I: IntoIterator<Item = Image>,
    {
        self.animation = Some(Animation::new(self.texture.clone(), frames));
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn animation_mut(&mut self) -> Option<&mut Animation> {
        self.animation.as_mut()
    }

    fn bound_animation(&mut self) -> EngineResult<&mut Animation> {
        let name = self.identity.name().to_string();
        self.animation
            .as_mut()
            .ok_or_else(|| EngineError::not_found(format!("animation on sprite '{}'", name)))
    }

    pub fn start_animation(&mut self, delay: Duration) -> EngineResult<()> {
        self.bound_animation()?.start_animation(delay)
    }

    pub fn stop_animation(&mut self) -> EngineResult<()> {
        self.bound_animation()?.stop_animation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::texture::{Texture, share_texture};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Calls {
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Texture for Calls {
        fn move_by(&mut self, vector: Vector) {
            self.log.lock().unwrap().push(format!("move {} {}", vector.dx, vector.dy));
        }
        fn set_image(&mut self, image: &Image) {
            self.log.lock().unwrap().push(format!("image {}", image.key()));
        }
        fn render(&mut self) -> EngineResult<()> {
            self.log.lock().unwrap().push("render".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_sprite_delegates_to_texture() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sprite = Sprite::new("look", share_texture(Calls { log: Arc::clone(&log) }));
        sprite.move_by(Vector::new(1, -1)).unwrap();
        sprite.set_image(&Image::new("hero")).unwrap();
        sprite.render().unwrap();
        assert_eq!(*log.lock().unwrap(), ["move 1 -1", "image hero", "render"]);
    }

    #[test]
    fn test_animation_controls_require_binding() {
        let mut sprite = Sprite::new("look", share_texture(Calls::default()));
        assert!(sprite.animation().is_none());
        assert!(matches!(
            sprite.start_animation(Duration::from_millis(1)),
            Err(EngineError::NotFound(_))
        ));
        sprite.bind_animation([("idle", vec![Image::new("a")])]);
        assert!(sprite.animation().is_some());
    }

    #[test]
    fn test_bound_animation_writes_sprite_texture() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut sprite = Sprite::tagged(
            "look",
            "player",
            share_texture(Calls { log: Arc::clone(&log) }),
        );
        sprite.bind_animation([("idle", vec![Image::new("a"), Image::new("b")])]);
        sprite.animation().unwrap().advance().unwrap();
        sprite.animation().unwrap().advance().unwrap();
        assert_eq!(*log.lock().unwrap(), ["image a", "image b"]);
        assert_eq!(sprite.identity().tag(), "player");
    }
}
