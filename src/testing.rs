//! Recording collaborators shared by unit tests.

use std::sync::Arc;

use anyhow::bail;

use crate::category::BodyPartCategory;
use crate::contact::{ContactRegistry, VolumeClassifier, VolumeId};
use crate::contact::registry::VolumeDescriptor;
use crate::dispatch::{QueuedDispatch, SyntheticInput};
use crate::focus::{FocusArbiter, FocusScope};
use crate::host::{ControllerId, Haptics, HostContext, InputDispatch, SelectionSink};
use crate::undress::Wardrobe;

pub const BUST: VolumeId = VolumeId(1);
pub const THIGH: VolumeId = VolumeId(2);
pub const KOKAN: VolumeId = VolumeId(3);
pub const SPINE: VolumeId = VolumeId(4);
/// Torso volume on a body the provider does not know about.
pub const STRAY: VolumeId = VolumeId(5);
pub const ARM_OTHER_BODY: VolumeId = VolumeId(6);
pub const UNKNOWN: VolumeId = VolumeId(99);

pub const LEFT: ControllerId = ControllerId(0);
pub const RIGHT: ControllerId = ControllerId(1);

pub fn registry() -> Arc<ContactRegistry> {
    let volumes = [
        (BUST, "cf_hit_bust02_L", 0),
        (THIGH, "aibu_reaction_thighL", 0),
        (KOKAN, "aibu_hit_kokan", 0),
        (SPINE, "cf_hit_spine01", 0),
        (STRAY, "cf_hit_berry", 7),
        (ARM_OTHER_BODY, "cf_hit_arm_L", 1),
        (UNKNOWN, "cf_hit_head", 0),
    ];
    Arc::new(ContactRegistry::build(
        &VolumeClassifier::default(),
        volumes.iter().map(|(id, name, body)| VolumeDescriptor {
            id: *id,
            name: *name,
            body: *body,
        }),
    ))
}

#[derive(Debug, Default)]
pub struct PulseLog(pub Vec<(ControllerId, u16)>);

impl Haptics for PulseLog {
    fn pulse(&mut self, controller: ControllerId, intensity: u16) {
        self.0.push((controller, intensity));
    }
}

#[derive(Debug, Default)]
pub struct SelectionLog {
    pub calls: Vec<(usize, Option<BodyPartCategory>)>,
    pub fail: bool,
}

impl SelectionSink for SelectionLog {
    fn set_selection(
        &mut self,
        body: usize,
        category: Option<BodyPartCategory>,
    ) -> anyhow::Result<()> {
        if self.fail {
            bail!("selection highlight unavailable");
        }
        self.calls.push((body, category));
        Ok(())
    }
}

/// Queued dispatch that can be told to reject button events.
#[derive(Debug, Default)]
pub struct TestDispatch {
    pub inner: QueuedDispatch,
    pub fail_buttons: bool,
    pub frames: usize,
}

impl TestDispatch {
    pub fn count(&self, event: SyntheticInput) -> usize {
        self.inner.events().iter().filter(|e| **e == event).count()
    }
}

impl InputDispatch for TestDispatch {
    fn begin_frame(&mut self) {
        self.frames += 1;
        self.inner.begin_frame();
    }

    fn primary_down(&mut self) -> anyhow::Result<()> {
        if self.fail_buttons {
            bail!("input queue closed");
        }
        self.inner.primary_down()
    }

    fn primary_up(&mut self) -> anyhow::Result<()> {
        if self.fail_buttons {
            bail!("input queue closed");
        }
        self.inner.primary_up()
    }

    fn cycle(&mut self, amount: f32) -> anyhow::Result<()> {
        self.inner.cycle(amount)
    }
}

pub struct TestHost {
    pub focus: FocusArbiter,
    pub dispatch: TestDispatch,
    pub haptics: PulseLog,
    pub gate: bool,
    pub bodies: Vec<Wardrobe>,
    pub selection: SelectionLog,
}

impl TestHost {
    pub fn new(bodies: Vec<Wardrobe>) -> Self {
        Self {
            focus: FocusArbiter::new(FocusScope::Global),
            dispatch: TestDispatch::default(),
            haptics: PulseLog::default(),
            gate: true,
            bodies,
            selection: SelectionLog::default(),
        }
    }

    pub fn ctx(&mut self) -> HostContext<'_> {
        HostContext {
            focus: &mut self.focus,
            dispatch: &mut self.dispatch,
            haptics: &mut self.haptics,
            gate: &self.gate,
            bodies: &mut self.bodies,
            selection: &mut self.selection,
        }
    }

    pub fn events(&self) -> &[SyntheticInput] {
        self.dispatch.inner.events()
    }
}
