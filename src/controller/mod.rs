//! Per-controller interaction state machine.
//!
//! # Tick order
//!
//! Each tick runs the following steps. A failing step is logged and does not
//! stop the ones after it.
//!
//! 1. Release a pending automatic click
//! 2. Acquire or release the focus lock
//! 3. Trigger: touch down / touch up
//! 4. Menu release: cycle to the next interaction variant
//! 5. Touchpad: open or commit an undress gesture
//! 6. Re-evaluate the lock so no lock outlives its reason at the tick boundary

pub mod input;

use std::sync::Arc;

use glam::Vec3;
use tracing::{debug, error};

use crate::config::CaressConfig;
use crate::contact::{ContactRegistry, ContactTag, ContactTracker, VolumeId};
use crate::error::{CaressError, CaressResult};
use crate::host::{ControllerId, HostContext, LockHandle};
use crate::undress::{UndressResolver, UndressSession};

use self::input::{Button, ButtonEdges, ButtonTransitions, ControllerInput};

/// Conceptual controller state.
///
/// Touching and undressing are independent; when both are active the
/// controller reports `LockedUndressing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    LockedIdle,
    LockedTouching,
    LockedUndressing,
}

/// First-error collector for an isolated fault boundary.
struct Faults {
    controller: ControllerId,
    first: Option<CaressError>,
}

impl Faults {
    fn new(controller: ControllerId) -> Self {
        Self {
            controller,
            first: None,
        }
    }

    fn record(&mut self, step: &'static str, result: CaressResult<()>) {
        if let Err(err) = result {
            error!(controller = ?self.controller, step, %err, "Interaction step failed");
            if self.first.is_none() {
                self.first = Some(err);
            }
        }
    }

    fn dispatch(&mut self, step: &'static str, result: anyhow::Result<()>) {
        self.record(step, result.map_err(|e| CaressError::collaborator(step, e)));
    }

    fn into_result(self) -> CaressResult<()> {
        match self.first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Interaction logic for one physical hand controller.
#[derive(Debug)]
pub struct InteractionController {
    id: ControllerId,
    config: CaressConfig,
    contacts: ContactTracker,
    resolver: UndressResolver,
    /// `None` or a handle that is still outstanding.
    lock: Option<LockHandle>,
    /// Whether a touch is in progress. Always false without a lock.
    trigger_pressed: bool,
    undress: Option<UndressSession>,
    buttons: ButtonEdges,
    /// An automatic click whose button-up goes out next tick.
    pending_click_up: bool,
}

impl InteractionController {
    pub fn new(id: ControllerId, registry: Arc<ContactRegistry>, config: CaressConfig) -> Self {
        Self {
            id,
            config,
            contacts: ContactTracker::new(registry),
            resolver: UndressResolver::new(),
            lock: None,
            trigger_pressed: false,
            undress: None,
            buttons: ButtonEdges::new(),
            pending_click_up: false,
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn config(&self) -> &CaressConfig {
        &self.config
    }

    pub fn contacts(&self) -> &ContactTracker {
        &self.contacts
    }

    pub fn has_lock(&self) -> bool {
        self.lock.is_some()
    }

    pub fn is_touching(&self) -> bool {
        self.trigger_pressed
    }

    pub fn undress_session(&self) -> Option<&UndressSession> {
        self.undress.as_ref()
    }

    pub fn state(&self) -> ControllerState {
        if self.lock.is_none() {
            ControllerState::Idle
        } else if self.undress.is_some() {
            ControllerState::LockedUndressing
        } else if self.trigger_pressed {
            ControllerState::LockedTouching
        } else {
            ControllerState::LockedIdle
        }
    }

    /// Overlap with a volume began. Faults are logged, never returned.
    pub fn on_volume_enter(&mut self, volume: VolumeId, host: &mut HostContext<'_>) {
        let mut faults = Faults::new(self.id);
        let became_active = self.contacts.enter(volume);
        if !self.contacts.registry().contains(volume) {
            debug!(controller = ?self.id, ?volume, "Ignoring unclassified volume");
        }

        if became_active && host.gate.interaction_permitted() {
            host.haptics.pulse(self.id, self.config.haptic_pulse);
            if self.config.automatic_touching {
                self.automatic_click(host, &mut faults);
            }
        }
        self.update_lock(host, &mut faults);
    }

    /// Overlap with a volume ended. Faults are logged, never returned.
    pub fn on_volume_exit(&mut self, volume: VolumeId, host: &mut HostContext<'_>) {
        let mut faults = Faults::new(self.id);
        self.contacts.exit(volume);
        self.update_lock(host, &mut faults);
    }

    /// Run one frame. Every step runs; the first failure is returned.
    pub fn on_tick(
        &mut self,
        input: &ControllerInput,
        host: &mut HostContext<'_>,
    ) -> CaressResult<()> {
        let mut faults = Faults::new(self.id);
        let edges = self.buttons.update(input);

        if self.pending_click_up {
            self.pending_click_up = false;
            faults.dispatch("automatic_click_up", host.dispatch.primary_up());
        }

        self.update_lock(host, &mut faults);
        self.handle_trigger(&edges, host, &mut faults);
        self.handle_cycle(&edges, host, &mut faults);
        self.handle_undress(&edges, input.position, host, &mut faults);
        self.update_lock(host, &mut faults);

        faults.into_result()
    }

    /// Drop everything at the end of the enclosing session: release the
    /// lock, discard any undress gesture uncommitted and forget contacts.
    pub fn teardown(&mut self, host: &mut HostContext<'_>) -> CaressResult<()> {
        let mut faults = Faults::new(self.id);
        if self.pending_click_up {
            self.pending_click_up = false;
            faults.dispatch("automatic_click_up", host.dispatch.primary_up());
        }
        self.release_lock(host, &mut faults);
        self.undress = None;
        self.trigger_pressed = false;
        self.contacts.clear();
        self.buttons.reset();
        faults.into_result()
    }

    fn should_have_lock(&self, host: &HostContext<'_>) -> bool {
        (self.contacts.is_active() || self.undress.is_some()) && host.gate.interaction_permitted()
    }

    fn update_lock(&mut self, host: &mut HostContext<'_>, faults: &mut Faults) {
        let should = self.should_have_lock(host);
        if should && self.lock.is_none() {
            match host.focus.try_acquire(self.id) {
                Some(handle) => {
                    debug!(controller = ?self.id, token = handle.token(), "Lock acquired");
                    self.lock = Some(handle);
                }
                None => debug!(controller = ?self.id, "Lock contended, retrying next tick"),
            }
        } else if !should && self.lock.is_some() && !self.trigger_pressed {
            self.release_lock(host, faults);
        }
    }

    fn release_lock(&mut self, host: &mut HostContext<'_>, faults: &mut Faults) {
        let Some(handle) = self.lock.take() else {
            return;
        };
        faults.dispatch("clear_selection", host.selection.set_selection(0, None));
        if self.trigger_pressed {
            faults.dispatch("primary_up", host.dispatch.primary_up());
        }
        self.trigger_pressed = false;
        if let Some(session) = self.undress.take() {
            debug!(controller = ?self.id, ?session, "Undress gesture cancelled");
        }
        debug!(controller = ?self.id, token = handle.token(), "Lock released");
        host.focus.release(handle);
    }

    /// Publish the current priority contact to the selection sink.
    fn broadcast_selection(&self, host: &mut HostContext<'_>, faults: &mut Faults) {
        let result = match self.contacts.current_category() {
            Some(ContactTag { category, body }) => host.selection.set_selection(body, Some(category)),
            None => host.selection.set_selection(0, None),
        };
        faults.dispatch("set_selection", result);
    }

    fn automatic_click(&mut self, host: &mut HostContext<'_>, faults: &mut Faults) {
        let Some(tag) = self.contacts.current_category() else {
            return;
        };
        if self.trigger_pressed
            || self.pending_click_up
            || !tag
                .category
                .at_least_as_specific_as(self.config.auto_touch_min_category)
        {
            return;
        }
        self.broadcast_selection(host, faults);
        faults.dispatch("automatic_click_down", host.dispatch.primary_down());
        self.pending_click_up = true;
        debug!(controller = ?self.id, category = %tag.category, "Automatic touch");
    }

    fn handle_trigger(
        &mut self,
        edges: &ButtonTransitions,
        host: &mut HostContext<'_>,
        faults: &mut Faults,
    ) {
        if self.lock.is_none() {
            return;
        }
        if !self.trigger_pressed && edges.pressed(Button::Trigger) {
            self.broadcast_selection(host, faults);
            faults.dispatch("primary_down", host.dispatch.primary_down());
            host.haptics.pulse(self.id, self.config.haptic_pulse);
            self.trigger_pressed = true;
            debug!(controller = ?self.id, "Touch started");
        } else if self.trigger_pressed && edges.released(Button::Trigger) {
            faults.dispatch("primary_up", host.dispatch.primary_up());
            self.trigger_pressed = false;
            debug!(controller = ?self.id, "Touch ended");
            self.update_lock(host, faults);
        }
    }

    fn handle_cycle(
        &mut self,
        edges: &ButtonTransitions,
        host: &mut HostContext<'_>,
        faults: &mut Faults,
    ) {
        if self.lock.is_none() || !edges.released(Button::Menu) {
            return;
        }
        self.broadcast_selection(host, faults);
        faults.dispatch("cycle", host.dispatch.cycle(self.config.cycle_amount));
    }

    fn handle_undress(
        &mut self,
        edges: &ButtonTransitions,
        position: Vec3,
        host: &mut HostContext<'_>,
        faults: &mut Faults,
    ) {
        if self.lock.is_none() {
            return;
        }
        if self.undress.is_none() && edges.pressed(Button::Touchpad) {
            if let Some(tag) = self.contacts.current_category() {
                match self.resolver.resolve_for(tag, &*host.bodies) {
                    Ok(Some(garment)) => {
                        self.undress = Some(UndressSession::new(tag.body, garment, position));
                    }
                    Ok(None) => {}
                    Err(err) => faults.record("undress_target", Err(err)),
                }
            }
        }
        if edges.released(Button::Touchpad) {
            if let Some(session) = self.undress.take() {
                let result = session.commit(
                    position,
                    self.config.undress_drag_threshold,
                    &mut *host.bodies,
                );
                faults.record("undress_commit", result.map(|_| ()));
            }
        }
    }
}
