//! Helpers for building target bodies in a world.

use crate::ecs::components::{BodyRoot, Children, Parent, ProximityVolume};

/// Spawn a target body with one child volume per name.
///
/// Creates one entity with ProximityVolume and Parent per name, then a root
/// entity with BodyRoot and Children. Returns the root and the volumes in the
/// order given.
pub fn spawn_body(
    world: &mut hecs::World,
    index: usize,
    volume_names: &[&str],
) -> (hecs::Entity, Vec<hecs::Entity>) {
    // Reserved so the children can point at it before it is spawned.
    let root = world.reserve_entity();
    let volumes: Vec<hecs::Entity> = volume_names
        .iter()
        .map(|name| world.spawn((ProximityVolume::new(*name), Parent(root))))
        .collect();
    world.spawn_at(root, (BodyRoot { index }, Children(volumes.clone())));
    (root, volumes)
}
