//! Components attachable to game objects.
//!
//! Submodules overview:
//! - [`component`] – component identity and the closed [`component::Component`] enum
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`sprite`] – visual delegating to a backend texture
//! - [`animation`] – timer-driven cyclic image playback for sprites

pub mod animation;
pub mod boxcollider;
pub mod component;
pub mod sprite;
