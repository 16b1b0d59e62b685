//! gamecore2d library.
//!
//! A small 2D game-object engine: game objects compose behavior from
//! components (box colliders, sprites), live in scenes, and are advanced once
//! per frame by the [`processor::GameProcessor`], which renders sprites and
//! reports collisions through each object's `on_collision` event.
//!
//! # Project Structure
//!
//! - [`geometry`] – integer vectors, points and half-open rectangles
//! - [`components`] – component identity, box colliders, sprites, animation
//! - [`events`] – ordered multi-slot events and per-object event registries
//! - [`gameobject`] – named component aggregates with collision events
//! - [`scene`] – ordered scenes and the scene registry
//! - [`processor`] – per-frame render + collision orchestration
//! - [`systems`] – the render and collision phases
//! - [`resources`] – rendering backend boundary and engine configuration
//! - [`error`] – engine error kinds

pub mod components;
pub mod error;
pub mod events;
pub mod gameobject;
pub mod geometry;
pub mod processor;
pub mod resources;
pub mod scene;
pub mod systems;
