//! Enclosing interactive session.
//!
//! An [`InteractionSession`] spans one interactive scene. It owns the contact
//! registry built at scene setup and one [`InteractionController`] per
//! physical controller, routes overlap events and per-frame input to them,
//! and tears all of them down together when the scene ends.

use std::sync::Arc;

use tracing::{debug_span, info, warn};

use crate::config::CaressConfig;
use crate::contact::{ContactRegistry, VolumeId};
use crate::controller::input::ControllerInput;
use crate::controller::InteractionController;
use crate::error::{CaressError, CaressResult};
use crate::host::{ControllerId, HostContext};

pub struct InteractionSession {
    registry: Arc<ContactRegistry>,
    controllers: Vec<InteractionController>,
    /// Last input seen per controller, reused on frames that carry none.
    last_inputs: Vec<ControllerInput>,
    active: bool,
    frame: u64,
}

impl InteractionSession {
    /// Start a session for the given controllers.
    ///
    /// Fails on an invalid configuration or a repeated controller id.
    pub fn new(
        registry: impl Into<Arc<ContactRegistry>>,
        config: CaressConfig,
        ids: &[ControllerId],
    ) -> CaressResult<Self> {
        config.validate()?;
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(CaressError::InvalidConfig(format!(
                    "controller {id:?} registered twice"
                )));
            }
        }

        let registry = registry.into();
        let controllers = ids
            .iter()
            .map(|id| InteractionController::new(*id, Arc::clone(&registry), config.clone()))
            .collect();
        info!(
            volumes = registry.len(),
            controllers = ids.len(),
            "Interaction session started"
        );

        Ok(Self {
            registry,
            controllers,
            last_inputs: vec![ControllerInput::default(); ids.len()],
            active: true,
            frame: 0,
        })
    }

    pub fn registry(&self) -> &ContactRegistry {
        &self.registry
    }

    pub fn controllers(&self) -> &[InteractionController] {
        &self.controllers
    }

    pub fn controller(&self, id: ControllerId) -> Option<&InteractionController> {
        self.index_of(id).map(|i| &self.controllers[i])
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn index_of(&self, id: ControllerId) -> Option<usize> {
        self.controllers.iter().position(|c| c.id() == id)
    }

    pub fn on_volume_enter(
        &mut self,
        controller: ControllerId,
        volume: VolumeId,
        host: &mut HostContext<'_>,
    ) {
        if !self.active {
            return;
        }
        match self.index_of(controller) {
            Some(i) => self.controllers[i].on_volume_enter(volume, host),
            None => warn!(?controller, ?volume, "Overlap for unknown controller"),
        }
    }

    pub fn on_volume_exit(
        &mut self,
        controller: ControllerId,
        volume: VolumeId,
        host: &mut HostContext<'_>,
    ) {
        if !self.active {
            return;
        }
        match self.index_of(controller) {
            Some(i) => self.controllers[i].on_volume_exit(volume, host),
            None => warn!(?controller, ?volume, "Overlap for unknown controller"),
        }
    }

    /// Run one frame for every controller, in registration order.
    ///
    /// Does nothing once the session has been torn down. Every controller
    /// runs even if an earlier one fails; the first error is returned.
    pub fn on_tick(
        &mut self,
        inputs: &[(ControllerId, ControllerInput)],
        host: &mut HostContext<'_>,
    ) -> CaressResult<()> {
        if !self.active {
            return Ok(());
        }
        self.frame += 1;
        let _span = debug_span!("tick", frame = self.frame).entered();

        host.dispatch.begin_frame();

        for (id, input) in inputs {
            match self.index_of(*id) {
                Some(i) => self.last_inputs[i] = *input,
                None => warn!(controller = ?id, "Input for unknown controller"),
            }
        }

        let mut first = None;
        for (controller, input) in self.controllers.iter_mut().zip(&self.last_inputs) {
            if let Err(err) = controller.on_tick(input, host) {
                first.get_or_insert(err);
            }
        }
        first.map_or(Ok(()), Err)
    }

    /// End the session: release every lock and discard every open undress
    /// gesture without committing it. Calling it again is a no-op.
    pub fn teardown(&mut self, host: &mut HostContext<'_>) -> CaressResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut first = None;
        for controller in &mut self.controllers {
            if let Err(err) = controller.teardown(host) {
                first.get_or_insert(err);
            }
        }
        self.last_inputs.fill(ControllerInput::default());
        info!(frames = self.frame, "Interaction session ended");
        first.map_or(Ok(()), Err)
    }
}
