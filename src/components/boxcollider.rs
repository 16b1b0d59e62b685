use crate::components::component::ComponentIdentity;
use crate::geometry::{Rectangle, Vector};

/// Axis-aligned box used for intersection tests between game objects.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxCollider {
    identity: ComponentIdentity,
    rect: Rectangle,
}

impl BoxCollider {
    /// Create a BoxCollider with the default tag
    pub fn new(name: impl Into<String>, rect: Rectangle) -> Self {
        Self {
            identity: ComponentIdentity::new(name),
            rect,
        }
    }

    /// Create a BoxCollider with an explicit tag
    pub fn tagged(name: impl Into<String>, tag: impl Into<String>, rect: Rectangle) -> Self {
        Self {
            identity: ComponentIdentity::with_tag(name, tag),
            rect,
        }
    }

    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    pub fn collider(&self) -> &Rectangle {
        &self.rect
    }

    pub fn move_by(&mut self, vector: Vector) {
        self.rect.move_by(vector);
    }

    /// Box vs box overlap test.
    pub fn overlaps(&self, other: &BoxCollider) -> bool {
        self.rect.intersects_with(&other.rect)
    }
}
