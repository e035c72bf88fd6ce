//! Immutable volume-to-tag table built once per scene.

use std::collections::HashMap;

use tracing::warn;

use super::classify::VolumeClassifier;
use super::{ContactTag, VolumeId};

/// A volume found on a target body during scene setup.
#[derive(Debug, Clone, Copy)]
pub struct VolumeDescriptor<'a> {
    pub id: VolumeId,
    pub name: &'a str,
    pub body: usize,
}

/// Cached classification of every interaction volume in the scene.
///
/// Built once; a volume's tag never changes afterwards. Volumes the
/// classifier does not recognise are logged and left out.
#[derive(Debug, Clone, Default)]
pub struct ContactRegistry {
    tags: HashMap<VolumeId, ContactTag>,
}

impl ContactRegistry {
    /// An empty registry. Every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every volume and cache the result.
    pub fn build<'a, I>(classifier: &VolumeClassifier, volumes: I) -> Self
    where
        I: IntoIterator<Item = VolumeDescriptor<'a>>,
    {
        let mut tags = HashMap::new();
        for volume in volumes {
            let Some(category) = classifier.classify(volume.name) else {
                warn!(name = volume.name, body = volume.body, "Unknown interaction volume");
                continue;
            };
            let tag = ContactTag::new(category, volume.body);
            if let Some(existing) = tags.get(&volume.id) {
                if *existing != tag {
                    warn!(
                        name = volume.name,
                        ?existing,
                        ?tag,
                        "Volume registered twice, keeping first tag"
                    );
                }
                continue;
            }
            tags.insert(volume.id, tag);
        }
        Self { tags }
    }

    #[inline]
    pub fn classify(&self, id: VolumeId) -> Option<ContactTag> {
        self.tags.get(&id).copied()
    }

    pub fn contains(&self, id: VolumeId) -> bool {
        self.tags.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VolumeId, ContactTag)> + '_ {
        self.tags.iter().map(|(id, tag)| (*id, *tag))
    }
}
