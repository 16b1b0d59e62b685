//! Named event registry owned by each game object.
//!
//! Names are matched exactly. Events registered as defaults are protected:
//! they can be looked up and subscribed to, but never removed.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};
use crate::events::event::Event;

struct EventEntry<T> {
    event: Event<T>,
    removable: bool,
}

pub struct EventHandler<T> {
    events: FxHashMap<String, EventEntry<T>>,
}

impl<T> Default for EventHandler<T> {
    fn default() -> Self {
        Self {
            events: FxHashMap::default(),
        }
    }
}

impl<T> std::fmt::Debug for EventHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.events
                    .iter()
                    .map(|(name, entry)| (name, entry.event.len())),
            )
            .finish()
    }
}

impl<T> EventHandler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user event that may later be removed.
    pub fn add_event(&mut self, name: impl Into<String>, event: Event<T>) -> EngineResult<()> {
        self.insert(name.into(), event, true)
    }

    /// Register a protected event that cannot be removed.
    pub fn add_default_event(
        &mut self,
        name: impl Into<String>,
        event: Event<T>,
    ) -> EngineResult<()> {
        self.insert(name.into(), event, false)
    }

    fn insert(&mut self, name: String, event: Event<T>, removable: bool) -> EngineResult<()> {
        if self.events.contains_key(&name) {
            return Err(EngineError::DuplicateKey(format!("event '{}'", name)));
        }
        debug!("registered event '{}' (removable={})", name, removable);
        self.events.insert(name, EventEntry { event, removable });
        Ok(())
    }

    /// Remove a user event and hand it back.
    pub fn remove_event(&mut self, name: &str) -> EngineResult<Event<T>> {
        if !self.is_removable(name)? {
            return Err(EngineError::NotRemovable(format!("event '{}'", name)));
        }
        debug!("removed event '{}'", name);
        self.events
            .remove(name)
            .map(|entry| entry.event)
            .ok_or_else(|| EngineError::not_found(format!("event '{}'", name)))
    }

    pub fn get(&self, name: &str) -> EngineResult<&Event<T>> {
        self.events
            .get(name)
            .map(|entry| &entry.event)
            .ok_or_else(|| EngineError::not_found(format!("event '{}'", name)))
    }

    pub fn get_mut(&mut self, name: &str) -> EngineResult<&mut Event<T>> {
        self.events
            .get_mut(name)
            .map(|entry| &mut entry.event)
            .ok_or_else(|| EngineError::not_found(format!("event '{}'", name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    pub fn is_removable(&self, name: &str) -> EngineResult<bool> {
        self.events
            .get(name)
            .map(|entry| entry.removable)
            .ok_or_else(|| EngineError::not_found(format!("event '{}'", name)))
    }

    /// Registered event names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Look up `name` and signal it.
    pub fn signal(&self, name: &str, subject: &T, sender: &T) -> EngineResult<()> {
        self.get(name)?.signal(subject, sender)
    }
}
