//! Contact tracking between a hand controller and interaction volumes.
//!
//! # Architecture
//!
//! 1. [`classify`] maps a volume name to a [`BodyPartCategory`]
//! 2. [`registry`] runs the classifier once per scene and caches the tag of
//!    every known volume
//! 3. [`tracker`] keeps the set of volumes a controller currently overlaps and
//!    answers which one has priority

pub mod classify;
pub mod registry;
pub mod tracker;

use crate::category::BodyPartCategory;

pub use self::classify::{NamePattern, VolumeClassifier};
pub use self::registry::ContactRegistry;
pub use self::tracker::ContactTracker;

/// Opaque identity of a proximity volume, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VolumeId(pub u64);

#[cfg(feature = "ecs")]
impl From<hecs::Entity> for VolumeId {
    fn from(entity: hecs::Entity) -> Self {
        Self(entity.to_bits().get())
    }
}

/// Classification of a volume: what part it covers and whose body it is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactTag {
    pub category: BodyPartCategory,
    /// Index of the target body the volume belongs to.
    pub body: usize,
}

impl ContactTag {
    pub fn new(category: BodyPartCategory, body: usize) -> Self {
        Self { category, body }
    }
}
