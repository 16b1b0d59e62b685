//! Collision phase.
//!
//! Brute-force pairwise detection: every unordered pair of distinct game
//! objects that own colliders is tested collider against collider. There is
//! no broad phase, so a frame costs O(objects² × colliders-per-object²).
//!
//! Detection and dispatch are split. [`collision_detector`] only reads
//! geometry and yields one [`CollisionEvent`] per intersecting collider pair;
//! [`collision_dispatcher`] then signals `on_collision` on both objects of
//! each event, in detection order.

use log::trace;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::error::EngineResult;
use crate::events::collision::{CollisionEvent, dispatch_collision};
use crate::gameobject::GameObject;

/// Colliders of one game object, in component order.
#[derive(Debug)]
pub struct ColliderGroup<'a> {
    /// Index of the owner in the scene.
    pub index: usize,
    pub owner: &'a GameObject,
    pub colliders: SmallVec<[&'a BoxCollider; 4]>,
}

/// Outcome of a detection pass.
#[derive(Debug, Default)]
pub struct CollisionReport {
    pub events: Vec<CollisionEvent>,
    /// Number of collider-vs-collider tests performed.
    pub tests: usize,
}

/// Test every unordered pair of distinct groups.
///
/// Events are ordered by first group, then second group, then collider pair.
pub fn collision_detector(groups: &[ColliderGroup<'_>]) -> CollisionReport {
    let mut report = CollisionReport::default();
    for (i, first) in groups.iter().enumerate() {
        for second in &groups[i + 1..] {
            if first.owner.id() == second.owner.id() {
                continue;
            }
            for collider_a in &first.colliders {
                for collider_b in &second.colliders {
                    report.tests += 1;
                    if collider_a.overlaps(collider_b) {
                        trace!(
                            "collision: {}.{} x {}.{}",
                            first.owner.name(),
                            collider_a.identity().name(),
                            second.owner.name(),
                            collider_b.identity().name()
                        );
                        report.events.push(CollisionEvent {
                            a: first.index,
                            b: second.index,
                            collider_a: collider_a.identity().name().to_string(),
                            collider_b: collider_b.identity().name().to_string(),
                        });
                    }
                }
            }
        }
    }
    report
}

/// Signal `on_collision` on both participants of every event.
pub fn collision_dispatcher(
    gameobjects: &[GameObject],
    events: &[CollisionEvent],
) -> EngineResult<()> {
    for event in events {
        dispatch_collision(&gameobjects[event.a], &gameobjects[event.b])?;
    }
    Ok(())
}
