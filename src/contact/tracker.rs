//! Active contact set for one controller.

use std::sync::Arc;

use super::registry::ContactRegistry;
use super::{ContactTag, VolumeId};

/// Tracks which known volumes a controller currently overlaps.
///
/// Entries keep their insertion order, so priority ties resolve to the
/// earliest contact that is still active.
#[derive(Debug, Clone)]
pub struct ContactTracker {
    registry: Arc<ContactRegistry>,
    active: Vec<(VolumeId, ContactTag)>,
}

impl ContactTracker {
    pub fn new(registry: Arc<ContactRegistry>) -> Self {
        Self {
            registry,
            active: Vec::new(),
        }
    }

    /// Record an overlap with `id`.
    ///
    /// Unknown and already-active volumes are ignored. Returns `true` when
    /// the set went from empty to non-empty.
    pub fn enter(&mut self, id: VolumeId) -> bool {
        let Some(tag) = self.registry.classify(id) else {
            return false;
        };
        if self.active.iter().any(|(active, _)| *active == id) {
            return false;
        }
        let was_empty = self.active.is_empty();
        self.active.push((id, tag));
        was_empty
    }

    /// Forget an overlap. Returns whether `id` was active.
    pub fn exit(&mut self, id: VolumeId) -> bool {
        match self.active.iter().position(|(active, _)| *active == id) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The most specific active contact, if any.
    pub fn current_category(&self) -> Option<ContactTag> {
        self.active
            .iter()
            .map(|(_, tag)| *tag)
            .min_by_key(|tag| tag.category.priority())
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn registry(&self) -> &ContactRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::BodyPartCategory;
    use crate::contact::classify::VolumeClassifier;
    use crate::contact::registry::VolumeDescriptor;

    const BUST: VolumeId = VolumeId(1);
    const THIGH: VolumeId = VolumeId(2);
    const KOKAN: VolumeId = VolumeId(3);
    const ARM_L: VolumeId = VolumeId(4);
    const ARM_R: VolumeId = VolumeId(5);
    const UNKNOWN: VolumeId = VolumeId(99);

    fn tracker() -> ContactTracker {
        let names = [
            (BUST, "cf_hit_bust02_L", 0),
            (THIGH, "aibu_reaction_thighL", 0),
            (KOKAN, "aibu_hit_kokan", 0),
            (ARM_L, "cf_hit_arm_L", 0),
            (ARM_R, "cf_hit_arm_R", 1),
        ];
        let registry = ContactRegistry::build(
            &VolumeClassifier::default(),
            names.iter().map(|(id, name, body)| VolumeDescriptor {
                id: *id,
                name: *name,
                body: *body,
            }),
        );
        ContactTracker::new(Arc::new(registry))
    }

    #[test]
    fn test_enter_reports_first_contact_only() {
        let mut t = tracker();
        assert!(!t.is_active());
        assert!(t.enter(BUST));
        assert!(t.is_active());
        assert!(!t.enter(THIGH));
        assert!(!t.enter(BUST));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_unknown_volume_is_never_inserted() {
        let mut t = tracker();
        assert!(!t.enter(UNKNOWN));
        assert!(!t.is_active());
        assert!(!t.exit(UNKNOWN));
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn test_size_tracks_enters_minus_exits() {
        let mut t = tracker();
        let ops: [(bool, VolumeId); 9] = [
            (true, BUST),
            (true, THIGH),
            (false, BUST),
            (false, BUST),
            (true, KOKAN),
            (false, ARM_L),
            (true, ARM_L),
            (false, THIGH),
            (false, KOKAN),
        ];
        let mut expected: Vec<VolumeId> = Vec::new();
        for (is_enter, id) in ops {
            if is_enter {
                t.enter(id);
                if !expected.contains(&id) {
                    expected.push(id);
                }
            } else {
                t.exit(id);
                expected.retain(|e| *e != id);
            }
            assert_eq!(t.len(), expected.len());
        }
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_current_category_prefers_most_specific() {
        let mut t = tracker();
        assert_eq!(t.current_category(), None);

        t.enter(THIGH);
        t.enter(KOKAN);
        assert_eq!(
            t.current_category(),
            Some(ContactTag::new(BodyPartCategory::Crotch, 0))
        );

        t.exit(KOKAN);
        assert_eq!(
            t.current_category(),
            Some(ContactTag::new(BodyPartCategory::Thigh, 0))
        );
    }

    #[test]
    fn test_ties_resolve_to_earliest_contact() {
        let mut t = tracker();
        t.enter(ARM_R);
        t.enter(ARM_L);
        let first = t.current_category();
        assert_eq!(first, Some(ContactTag::new(BodyPartCategory::UpperArm, 1)));
        for _ in 0..5 {
            assert_eq!(t.current_category(), first);
        }

        t.exit(ARM_R);
        assert_eq!(
            t.current_category(),
            Some(ContactTag::new(BodyPartCategory::UpperArm, 0))
        );
    }

    #[test]
    fn test_clear() {
        let mut t = tracker();
        t.enter(BUST);
        t.enter(KOKAN);
        t.clear();
        assert!(!t.is_active());
        assert!(t.enter(BUST));
    }
}
