//! Scenes and the scene registry.
//!
//! A [`Scene`] owns an ordered list of game objects; the game processor walks
//! it front to back every frame. Objects are addressed by index. Removing an
//! object shifts every later object down by one, so indices returned by
//! [`Scene::add_gameobject`] are only valid until an earlier object is
//! removed.
//!
//! [`SceneManager`] is a name-keyed registry of scenes with an optional
//! active scene for the driving loop.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};
use crate::gameobject::GameObject;

#[derive(Debug)]
pub struct Scene {
    name: String,
    gameobjects: Vec<GameObject>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gameobjects: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a game object and return its index.
    pub fn add_gameobject(&mut self, gameobject: GameObject) -> usize {
        debug!(
            "scene '{}': added gameobject '{}' ({:?})",
            self.name,
            gameobject.name(),
            gameobject.id()
        );
        self.gameobjects.push(gameobject);
        self.gameobjects.len() - 1
    }

    /// Remove and return the object at `index`. Later indices shift down.
    pub fn remove_gameobject(&mut self, index: usize) -> EngineResult<GameObject> {
        if index >= self.gameobjects.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.gameobjects.remove(index);
        debug!(
            "scene '{}': removed gameobject '{}' at {}",
            self.name,
            removed.name(),
            index
        );
        Ok(removed)
    }

    pub fn get_gameobject(&self, index: usize) -> EngineResult<&GameObject> {
        self.gameobjects
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_gameobject_mut(&mut self, index: usize) -> EngineResult<&mut GameObject> {
        let err = self.out_of_range(index);
        self.gameobjects.get_mut(index).ok_or(err)
    }

    /// Read-only view of the objects in processing order.
    pub fn gameobjects(&self) -> &[GameObject] {
        &self.gameobjects
    }

    pub fn len(&self) -> usize {
        self.gameobjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gameobjects.is_empty()
    }

    /// Index of the first object with the given name.
    pub fn find_gameobject(&self, name: &str) -> Option<usize> {
        self.gameobjects.iter().position(|g| g.name() == name)
    }

    pub fn gameobjects_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a GameObject> {
        self.gameobjects.iter().filter(move |g| g.tag() == tag)
    }

    fn out_of_range(&self, index: usize) -> EngineError {
        EngineError::not_found(format!(
            "gameobject index {} in scene '{}' ({} objects)",
            index,
            self.name,
            self.gameobjects.len()
        ))
    }
}

#[derive(Debug, Default)]
pub struct SceneManager {
    scenes: FxHashMap<String, Scene>,
    active: Option<String>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene under its name, returning the scene it replaces.
    pub fn add_scene(&mut self, scene: Scene) -> Option<Scene> {
        debug!("scene manager: added scene '{}'", scene.name());
        self.scenes.insert(scene.name().to_string(), scene)
    }

    /// Remove a scene. Removing the active scene clears the selection.
    pub fn remove_scene(&mut self, name: &str) -> EngineResult<Scene> {
        let scene = self
            .scenes
            .remove(name)
            .ok_or_else(|| missing_scene(name))?;
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        debug!("scene manager: removed scene '{}'", name);
        Ok(scene)
    }

    pub fn get_scene(&self, name: &str) -> EngineResult<&Scene> {
        self.scenes.get(name).ok_or_else(|| missing_scene(name))
    }

    pub fn get_scene_mut(&mut self, name: &str) -> EngineResult<&mut Scene> {
        self.scenes.get_mut(name).ok_or_else(|| missing_scene(name))
    }

    pub fn contains_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Registered scene names, sorted.
    pub fn scene_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scenes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn set_active_scene(&mut self, name: &str) -> EngineResult<()> {
        if !self.scenes.contains_key(name) {
            return Err(missing_scene(name));
        }
        debug!("scene manager: switching to scene '{}'", name);
        self.active = Some(name.to_string());
        Ok(())
    }

    pub fn active_scene_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_scene(&self) -> EngineResult<&Scene> {
        let name = self
            .active
            .as_deref()
            .ok_or_else(|| EngineError::not_found("active scene"))?;
        self.get_scene(name)
    }

    pub fn active_scene_mut(&mut self) -> EngineResult<&mut Scene> {
        let name = self
            .active
            .clone()
            .ok_or_else(|| EngineError::not_found("active scene"))?;
        self.get_scene_mut(&name)
    }
}

fn missing_scene(name: &str) -> EngineError {
    EngineError::not_found(format!("scene '{}'", name))
}
