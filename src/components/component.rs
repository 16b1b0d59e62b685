//! Component identity and the closed set of component variants.
//!
//! Every component carries a name (its key inside the owning game object) and
//! a free-form tag. Capabilities are dispatched by matching on [`Component`],
//! never by inspecting concrete types at runtime.

use crate::components::boxcollider::BoxCollider;
use crate::components::sprite::Sprite;
use crate::error::EngineResult;
use crate::geometry::Vector;

/// Tag given to components and game objects that are not tagged explicitly.
pub const DEFAULT_TAG: &str = "default_tag";

/// Immutable `(name, tag)` pair shared by all components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentIdentity {
    name: String,
    tag: String,
}

impl ComponentIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: DEFAULT_TAG.to_string(),
        }
    }

    pub fn with_tag(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// A component attached to a game object.
#[derive(Debug)]
pub enum Component {
    BoxCollider(BoxCollider),
    Sprite(Sprite),
}

impl Component {
    pub fn identity(&self) -> &ComponentIdentity {
        match self {
            Component::BoxCollider(c) => c.identity(),
            Component::Sprite(s) => s.identity(),
        }
    }

    pub fn name(&self) -> &str {
        self.identity().name()
    }

    pub fn tag(&self) -> &str {
        self.identity().tag()
    }

    /// Short variant label, used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::BoxCollider(_) => "box_collider",
            Component::Sprite(_) => "sprite",
        }
    }

    /// Move whatever this component positions (collider box or texture).
    pub fn move_by(&mut self, vector: Vector) -> EngineResult<()> {
        match self {
            Component::BoxCollider(c) => {
                c.move_by(vector);
                Ok(())
            }
            Component::Sprite(s) => s.move_by(vector),
        }
    }

    pub fn as_box_collider(&self) -> Option<&BoxCollider> {
        match self {
            Component::BoxCollider(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_box_collider_mut(&mut self) -> Option<&mut BoxCollider> {
        match self {
            Component::BoxCollider(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_sprite(&self) -> Option<&Sprite> {
        match self {
            Component::Sprite(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sprite_mut(&mut self) -> Option<&mut Sprite> {
        match self {
            Component::Sprite(s) => Some(s),
            _ => None,
        }
    }
}

impl From<BoxCollider> for Component {
    fn from(c: BoxCollider) -> Self {
        Component::BoxCollider(c)
    }
}

impl From<Sprite> for Component {
    fn from(s: Sprite) -> Self {
        Component::Sprite(s)
    }
}
