//! Undress target selection and gesture commit.

use glam::Vec3;
use tracing::{info, warn};

use crate::category::BodyPartCategory;
use crate::contact::ContactTag;
use crate::error::{CaressError, CaressResult};

use super::garment::{body_mut, body_ref, GarmentKind, TargetBodies, TargetBody};
use super::rules::{rules_for, UndressTarget, SKIRT_CROTCH};

/// Picks the next garment to remove for a touched body part.
///
/// Stateless: body state can change between gestures, so the target is
/// recomputed on every touchpad press.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndressResolver;

impl UndressResolver {
    pub fn new() -> Self {
        Self
    }

    /// Rule list for `category` on `body`, including the skirt override.
    pub fn rules(
        &self,
        category: BodyPartCategory,
        body: &dyn TargetBody,
    ) -> &'static [UndressTarget] {
        if category == BodyPartCategory::Crotch && body.has_soft_bottom() {
            &SKIRT_CROTCH
        } else {
            rules_for(category)
        }
    }

    /// First garment whose live state is admitted by a rule, in rule order.
    pub fn resolve_target(
        &self,
        category: BodyPartCategory,
        body: &dyn TargetBody,
    ) -> Option<GarmentKind> {
        self.rules(category, body)
            .iter()
            .find(|rule| {
                body.garment_state(rule.kind)
                    .is_some_and(|state| rule.admits(state))
            })
            .map(|rule| rule.kind)
    }

    /// Resolve against the body a contact belongs to.
    pub fn resolve_for(
        &self,
        tag: ContactTag,
        bodies: &dyn TargetBodies,
    ) -> CaressResult<Option<GarmentKind>> {
        let body = body_ref(bodies, tag.body)?;
        let target = self.resolve_target(tag.category, body);
        info!(
            category = %tag.category,
            body = tag.body,
            target = ?target,
            "Undress target"
        );
        Ok(target)
    }
}

/// An undress gesture between touchpad press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndressSession {
    pub body: usize,
    pub garment: GarmentKind,
    /// Controller position when the touchpad was pressed.
    pub anchor: Vec3,
}

/// What a committed gesture did to the garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndressCommit {
    /// Garment removed completely.
    Full { from: u8, to: u8 },
    /// Garment advanced one state.
    Step { from: u8, to: u8 },
    /// The garment disappeared while the gesture was open.
    Skipped,
}

/// State a garment moves to when a gesture commits.
#[inline]
pub fn committed_state(current: u8, removed: u8, full: bool) -> u8 {
    if full {
        removed
    } else {
        current.saturating_add(1).min(removed)
    }
}

impl UndressSession {
    pub fn new(body: usize, garment: GarmentKind, anchor: Vec3) -> Self {
        Self {
            body,
            garment,
            anchor,
        }
    }

    /// Whether releasing at `position` counts as a drag.
    #[inline]
    pub fn is_drag(&self, position: Vec3, threshold: f32) -> bool {
        (position - self.anchor).length_squared() > threshold * threshold
    }

    /// Apply the gesture to the body: a drag removes the garment, anything
    /// shorter advances it by one state.
    pub fn commit(
        self,
        position: Vec3,
        threshold: f32,
        bodies: &mut dyn TargetBodies,
    ) -> CaressResult<UndressCommit> {
        let body = body_mut(bodies, self.body)?;
        let Some(current) = body.garment_state(self.garment) else {
            warn!(
                body = self.body,
                garment = %self.garment,
                "Garment vanished before undress commit"
            );
            return Ok(UndressCommit::Skipped);
        };
        let removed = body.removed_state();
        let full = self.is_drag(position, threshold);
        let next = committed_state(current, removed, full);
        body.set_garment_state(self.garment, next)
            .map_err(|e| CaressError::collaborator("set_garment_state", e))?;

        info!(
            body = self.body,
            garment = %self.garment,
            from = current,
            to = next,
            full,
            "Undress committed"
        );
        Ok(if full {
            UndressCommit::Full { from: current, to: next }
        } else {
            UndressCommit::Step { from: current, to: next }
        })
    }
}
