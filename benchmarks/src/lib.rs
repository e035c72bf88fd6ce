//! Shared scene setup for the benchmarks.

use std::sync::Arc;

use caress::contact::registry::VolumeDescriptor;
use caress::ecs::prelude::*;
use caress::{ContactRegistry, VolumeClassifier, VolumeId};

/// Volume names of one body, cycled when more are needed.
pub const BODY_VOLUMES: [&str; 12] = [
    "aibu_hit_kokan",
    "aibu_hit_siri_L",
    "aibu_reaction_waistL",
    "cf_hit_bust02_L",
    "aibu_reaction_legL",
    "aibu_reaction_legR",
    "cf_hit_wrist_L",
    "cf_hit_arm_L",
    "aibu_reaction_thighL",
    "cf_hit_spine01",
    "cf_hit_berry",
    "cf_hit_head",
];

/// A world with `bodies` target bodies carrying every volume name.
pub fn setup_scene(bodies: usize) -> hecs::World {
    let mut world = hecs::World::new();
    for index in 0..bodies {
        spawn_body(&mut world, index, &BODY_VOLUMES);
    }
    world
}

/// Registry of `n` volumes on body 0, ids `0..n`.
pub fn setup_registry(n: usize) -> Arc<ContactRegistry> {
    let classifier = VolumeClassifier::default();
    Arc::new(ContactRegistry::build(
        &classifier,
        (0..n).map(|i| VolumeDescriptor {
            id: VolumeId(i as u64),
            name: BODY_VOLUMES[i % BODY_VOLUMES.len()],
            body: 0,
        }),
    ))
}
