//! Collision notification.
//!
//! The processor reports each intersecting collider pair as a
//! [`CollisionEvent`] and then signals the [`ON_COLLISION`] event on both game
//! objects, each receiving itself as subject and the other object as sender.

use crate::gameobject::GameObject;

/// Name of the default, non-removable event every game object carries.
pub const ON_COLLISION: &str = "on_collision";

/// One intersecting collider pair found during a frame.
///
/// `a` and `b` are indices into the scene's game objects with `a < b`.
/// Several events may name the same pair of objects when they own several
/// mutually intersecting colliders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: usize,
    pub b: usize,
    pub collider_a: String,
    pub collider_b: String,
}

/// Signal `on_collision` on `a` with sender `b`, then on `b` with sender `a`.
pub fn dispatch_collision(a: &GameObject, b: &GameObject) -> crate::error::EngineResult<()> {
    a.event_handler().signal(ON_COLLISION, a, b)?;
    b.event_handler().signal(ON_COLLISION, b, a)
}
