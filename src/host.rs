//! Host collaborators
//!
//! Everything the interaction core needs from the surrounding application is
//! reached through the traits in this module. The host bundles one
//! implementation of each into a [`HostContext`] and passes it to every entry
//! point, the same way a frame context is handed to per-frame callbacks.

use crate::category::BodyPartCategory;
use crate::undress::garment::TargetBodies;

/// Identity of a physical hand controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub u32);

/// Exclusive ownership of a controller's input stream.
///
/// Not `Clone`: a holder owns exactly one handle and gives it back through
/// [`FocusProvider::release`].
#[must_use = "a dropped lock handle is never released"]
#[derive(Debug, PartialEq, Eq)]
pub struct LockHandle {
    controller: ControllerId,
    token: u64,
}

impl LockHandle {
    /// Create a handle. Only focus providers should call this.
    pub fn new(controller: ControllerId, token: u64) -> Self {
        Self { controller, token }
    }

    pub fn controller(&self) -> ControllerId {
        self.controller
    }

    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Lock/focus provider. Acquisition never blocks and may be denied.
pub trait FocusProvider {
    fn try_acquire(&mut self, controller: ControllerId) -> Option<LockHandle>;
    fn release(&mut self, handle: LockHandle);
}

/// Synthetic high-level input consumed by the game layer.
pub trait InputDispatch {
    /// Called once at the start of every session tick.
    fn begin_frame(&mut self) {}

    fn primary_down(&mut self) -> anyhow::Result<()>;
    fn primary_up(&mut self) -> anyhow::Result<()>;
    /// Advance to the next interaction variant (a wheel tick).
    fn cycle(&mut self, amount: f32) -> anyhow::Result<()>;
}

/// Controller vibration.
pub trait Haptics {
    fn pulse(&mut self, controller: ControllerId, intensity: u16);
}

/// Whether the enclosing scene currently allows the controller to hold a lock.
pub trait SessionGate {
    fn interaction_permitted(&self) -> bool;
}

impl SessionGate for bool {
    fn interaction_permitted(&self) -> bool {
        *self
    }
}

/// Receives the body part selected whenever priority is re-evaluated.
///
/// `None` clears the selection.
pub trait SelectionSink {
    fn set_selection(
        &mut self,
        body: usize,
        category: Option<BodyPartCategory>,
    ) -> anyhow::Result<()>;
}

/// A host with nothing to highlight.
impl SelectionSink for () {
    fn set_selection(&mut self, _: usize, _: Option<BodyPartCategory>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Collaborators passed to every entry point.
pub struct HostContext<'a> {
    pub focus: &'a mut dyn FocusProvider,
    pub dispatch: &'a mut dyn InputDispatch,
    pub haptics: &'a mut dyn Haptics,
    pub gate: &'a dyn SessionGate,
    pub bodies: &'a mut dyn TargetBodies,
    pub selection: &'a mut dyn SelectionSink,
}
