//! Per-frame orchestration.
//!
//! [`GameProcessor::process`] is called once per frame by the driving loop.
//! It walks the scene once, splits components by capability, renders every
//! sprite, then detects collisions and signals `on_collision` on both objects
//! of every intersecting collider pair.
//!
//! A pair of objects that own several mutually intersecting colliders is
//! signalled once per intersecting collider pair; notifications are not
//! merged per object pair.
//!
//! Errors from textures or event slots are not caught: the first failure
//! ends the frame and is returned to the caller.

use log::trace;
use serde::Serialize;
use smallvec::SmallVec;

use crate::components::component::Component;
use crate::components::sprite::Sprite;
use crate::error::EngineResult;
use crate::scene::Scene;
use crate::systems::collision::{ColliderGroup, collision_detector, collision_dispatcher};
use crate::systems::render::render_system;

/// Counters for one processed frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    pub sprites_rendered: usize,
    pub collider_tests: usize,
    pub collisions: usize,
}

impl std::ops::AddAssign for FrameStats {
    fn add_assign(&mut self, other: FrameStats) {
        self.sprites_rendered += other.sprites_rendered;
        self.collider_tests += other.collider_tests;
        self.collisions += other.collisions;
    }
}

/// Stateless frame processor.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameProcessor;

impl GameProcessor {
    pub fn process(scene: &Scene) -> EngineResult<FrameStats> {
        let (sprites, groups) = gather_components(scene);

        let sprites_rendered = render_system(&sprites)?;

        let report = collision_detector(&groups);
        collision_dispatcher(scene.gameobjects(), &report.events)?;

        let stats = FrameStats {
            sprites_rendered,
            collider_tests: report.tests,
            collisions: report.events.len(),
        };
        trace!("scene '{}' processed: {:?}", scene.name(), stats);
        Ok(stats)
    }
}

/// One pass over the scene: sprites flattened in traversal order, colliders
/// grouped by owner. Objects without colliders get no group.
fn gather_components(scene: &Scene) -> (Vec<&Sprite>, Vec<ColliderGroup<'_>>) {
    let mut sprites = Vec::new();
    let mut groups = Vec::new();
    for (index, gameobject) in scene.gameobjects().iter().enumerate() {
        let mut colliders = SmallVec::new();
        for component in gameobject.components() {
            match component {
                Component::Sprite(sprite) => sprites.push(sprite),
                Component::BoxCollider(collider) => colliders.push(collider),
            }
        }
        if !colliders.is_empty() {
            groups.push(ColliderGroup {
                index,
                owner: gameobject,
                colliders,
            });
        }
    }
    (sprites, groups)
}
