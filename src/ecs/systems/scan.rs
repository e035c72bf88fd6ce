//! Scene scan: build the contact registry from a world.

use tracing::info;

use crate::contact::registry::VolumeDescriptor;
use crate::contact::{ContactRegistry, VolumeClassifier, VolumeId};
use crate::ecs::components::{BodyRoot, Children, ProximityVolume};

/// Classify every proximity volume under every body root.
///
/// Phase 1: Collect body roots, ordered by body index.
/// Phase 2: Walk each root's Children hierarchy and record every volume.
///
/// A volume reachable from more than one body keeps the tag of the body with
/// the lowest index.
pub fn scan_system(world: &hecs::World, classifier: &VolumeClassifier) -> ContactRegistry {
    let mut roots: Vec<(hecs::Entity, usize)> = world
        .query::<&BodyRoot>()
        .iter()
        .map(|(entity, root)| (entity, root.index))
        .collect();
    roots.sort_by_key(|(_, index)| *index);

    // Names are copied out so no component borrow outlives the walk.
    let mut found: Vec<(VolumeId, String, usize)> = Vec::new();
    for (entity, index) in &roots {
        collect_volumes(world, *entity, *index, &mut found);
    }

    let registry = ContactRegistry::build(
        classifier,
        found.iter().map(|(id, name, body)| VolumeDescriptor {
            id: *id,
            name: name.as_str(),
            body: *body,
        }),
    );
    info!(
        bodies = roots.len(),
        volumes = found.len(),
        classified = registry.len(),
        "Scene scanned"
    );
    registry
}

/// Recursively collect volumes on `entity` and its descendants.
fn collect_volumes(
    world: &hecs::World,
    entity: hecs::Entity,
    body: usize,
    found: &mut Vec<(VolumeId, String, usize)>,
) {
    if let Ok(volume) = world.get::<&ProximityVolume>(entity) {
        found.push((VolumeId::from(entity), volume.name.clone(), body));
    }

    let children = match world.get::<&Children>(entity) {
        Ok(c) => c.0.clone(),
        Err(_) => return,
    };
    for child in children {
        collect_volumes(world, child, body, found);
    }
}
