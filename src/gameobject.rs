//! Game objects: named, tagged aggregates of components.
//!
//! A [`GameObject`] exclusively owns its components, keyed by component name
//! and kept in attachment order, and an [`EventHandler`] that always carries
//! the protected [`ON_COLLISION`] event.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::component::{Component, DEFAULT_TAG};
use crate::components::sprite::Sprite;
use crate::error::{EngineError, EngineResult};
use crate::events::collision::ON_COLLISION;
use crate::events::event::Event;
use crate::events::handler::EventHandler;
use crate::geometry::Vector;

static NEXT_GAMEOBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a game object. Two objects with the same name
/// are still different objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameObjectId(u64);

impl GameObjectId {
    fn next() -> Self {
        GameObjectId(NEXT_GAMEOBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct GameObject {
    id: GameObjectId,
    name: String,
    tag: String,
    components: Vec<Component>,
    events: EventHandler<GameObject>,
}

impl PartialEq for GameObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GameObject {}

impl GameObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self::tagged(name, DEFAULT_TAG)
    }

    pub fn tagged(name: impl Into<String>, tag: impl Into<String>) -> Self {
        let mut events = EventHandler::new();
        // Fresh handler: registering the default event cannot collide.
        let _ = events.add_default_event(ON_COLLISION, Event::new());
        Self {
            id: GameObjectId::next(),
            name: name.into(),
            tag: tag.into(),
            components: Vec::new(),
            events,
        }
    }

    pub fn id(&self) -> GameObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attach a component under its own name.
    ///
    /// A component with the same name is replaced in place (keeping its
    /// position in component order) and returned.
    pub fn add_component(&mut self, component: impl Into<Component>) -> Option<Component> {
        let component = component.into();
        match self.position(component.name()) {
            Some(index) => {
                debug!(
                    "gameobject '{}': component '{}' replaced by a {}",
                    self.name,
                    component.name(),
                    component.kind()
                );
                Some(std::mem::replace(&mut self.components[index], component))
            }
            None => {
                self.components.push(component);
                None
            }
        }
    }

    /// Detach and return the named component.
    pub fn remove_component(&mut self, name: &str) -> EngineResult<Component> {
        let index = self
            .position(name)
            .ok_or_else(|| self.missing_component(name))?;
        Ok(self.components.remove(index))
    }

    pub fn get_component(&self, name: &str) -> EngineResult<&Component> {
        self.components
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| self.missing_component(name))
    }

    pub fn get_component_mut(&mut self, name: &str) -> EngineResult<&mut Component> {
        let index = self
            .position(name)
            .ok_or_else(|| self.missing_component(name))?;
        Ok(&mut self.components[index])
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// The named component, if it is a box collider.
    pub fn box_collider(&self, name: &str) -> EngineResult<&BoxCollider> {
        self.get_component(name)?
            .as_box_collider()
            .ok_or_else(|| self.missing_kind(name, "box collider"))
    }

    pub fn box_collider_mut(&mut self, name: &str) -> EngineResult<&mut BoxCollider> {
        let err = self.missing_kind(name, "box collider");
        self.get_component_mut(name)?.as_box_collider_mut().ok_or(err)
    }

    /// The named component, if it is a sprite.
    pub fn sprite(&self, name: &str) -> EngineResult<&Sprite> {
        self.get_component(name)?
            .as_sprite()
            .ok_or_else(|| self.missing_kind(name, "sprite"))
    }

    pub fn sprite_mut(&mut self, name: &str) -> EngineResult<&mut Sprite> {
        let err = self.missing_kind(name, "sprite");
        self.get_component_mut(name)?.as_sprite_mut().ok_or(err)
    }

    /// Components in attachment order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(Component::name)
    }

    /// Move every component of the object by the same offset.
    pub fn move_by(&mut self, vector: Vector) -> EngineResult<()> {
        for component in &mut self.components {
            component.move_by(vector)?;
        }
        Ok(())
    }

    pub fn event_handler(&self) -> &EventHandler<GameObject> {
        &self.events
    }

    pub fn event_handler_mut(&mut self) -> &mut EventHandler<GameObject> {
        &mut self.events
    }

    /// Subscribe a slot to this object's collision event. The slot receives
    /// `(this, other)`.
    pub fn on_collision<F>(&mut self, slot: F)
    where
        F: Fn(&GameObject, &GameObject) -> EngineResult<()> + 'static,
    {
        if let Ok(event) = self.events.get_mut(ON_COLLISION) {
            event.add_slot(slot);
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name() == name)
    }

    fn missing_component(&self, name: &str) -> EngineError {
        EngineError::not_found(format!(
            "component '{}' on gameobject '{}'",
            name, self.name
        ))
    }

    fn missing_kind(&self, name: &str, kind: &str) -> EngineError {
        EngineError::not_found(format!(
            "{} '{}' on gameobject '{}'",
            kind, name, self.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rectangle};
    use crate::resources::texture::{HeadlessTexture, share_texture};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn collider(name: &str, x: i32, y: i32) -> BoxCollider {
        BoxCollider::new(name, Rectangle::from_wh(Point::new(x, y), 2, 2))
    }

    #[test]
    fn test_new_gameobject_has_protected_collision_event() {
        let mut obj = GameObject::new("hero");
        assert_eq!(obj.tag(), DEFAULT_TAG);
        assert!(obj.event_handler().contains(ON_COLLISION));
        assert!(matches!(
            obj.event_handler_mut().remove_event(ON_COLLISION),
            Err(EngineError::NotRemovable(_))
        ));
    }

    #[test]
    fn test_identity_is_not_name() {
        let a = GameObject::new("twin");
        let b = GameObject::new("twin");
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a, a);
    }

    #[test]
    fn test_add_get_remove_component() {
        let mut obj = GameObject::new("hero");
        assert!(obj.add_component(collider("body", 0, 0)).is_none());
        assert!(obj.has_component("body"));
        assert!(obj.box_collider("body").is_ok());
        assert!(matches!(obj.sprite("body"), Err(EngineError::NotFound(_))));

        let removed = obj.remove_component("body").unwrap();
        assert_eq!(removed.name(), "body");
        assert!(matches!(obj.get_component("body"), Err(EngineError::NotFound(_))));
        assert!(matches!(
            obj.remove_component("body"),
            Err(EngineError::NotFound(_))
        ));
    }

    #[test]
    fn test_same_name_replaces_in_place() {
        let mut obj = GameObject::new("hero");
        obj.add_component(collider("body", 0, 0));
        obj.add_component(Sprite::new("look", share_texture(HeadlessTexture::default())));
        let replaced = obj.add_component(collider("body", 5, 5)).unwrap();

        assert_eq!(replaced.as_box_collider().unwrap().collider().ul, Point::new(0, 0));
        assert_eq!(obj.components().len(), 2);
        assert_eq!(obj.component_names().collect::<Vec<_>>(), ["body", "look"]);
        assert_eq!(obj.box_collider("body").unwrap().collider().ul, Point::new(5, 5));
    }

    #[test]
    fn test_move_by_moves_all_components() {
        let mut obj = GameObject::new("hero");
        obj.add_component(collider("body", 0, 0));
        obj.add_component(collider("feet", 0, 2));
        obj.move_by(Vector::new(1, 1)).unwrap();
        assert_eq!(obj.box_collider("body").unwrap().collider().ul, Point::new(1, 1));
        assert_eq!(obj.box_collider("feet").unwrap().collider().ul, Point::new(1, 3));
        obj.box_collider_mut("feet").unwrap().move_by(Vector::new(-1, 0));
        assert_eq!(obj.box_collider("feet").unwrap().collider().ul, Point::new(0, 3));
    }

    #[test]
    fn test_on_collision_slot_receives_subject_and_sender() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut a = GameObject::new("a");
        let b = GameObject::new("b");
        let log = Rc::clone(&seen);
        a.on_collision(move |this, other| {
            log.borrow_mut()
                .push(format!("{} hit {}", this.name(), other.name()));
            Ok(())
        });
        a.event_handler().signal(ON_COLLISION, &a, &b).unwrap();
        assert_eq!(*seen.borrow(), ["a hit b"]);
    }
}
