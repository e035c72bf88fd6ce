use caress::ecs::prelude::*;
use caress::undress::TargetBody;
use caress::{
    BodyPartCategory, CaressConfig, ControllerId, ControllerInput, FocusArbiter, FocusScope,
    GarmentKind, Haptics, HostContext, InteractionSession, QueuedDispatch, SelectionSink,
    VolumeClassifier, VolumeId, Wardrobe,
};
use glam::Vec3;

const LEFT: ControllerId = ControllerId(0);
const RIGHT: ControllerId = ControllerId(1);

struct LogHaptics;

impl Haptics for LogHaptics {
    fn pulse(&mut self, controller: ControllerId, intensity: u16) {
        log::debug!("haptic pulse {intensity} on {controller:?}");
    }
}

struct LogSelection;

impl SelectionSink for LogSelection {
    fn set_selection(
        &mut self,
        body: usize,
        category: Option<BodyPartCategory>,
    ) -> anyhow::Result<()> {
        match category {
            Some(category) => log::info!("highlight {category} on body {body}"),
            None => log::info!("highlight cleared"),
        }
        Ok(())
    }
}

struct DemoHost {
    focus: FocusArbiter,
    dispatch: QueuedDispatch,
    haptics: LogHaptics,
    gate: bool,
    bodies: Vec<Wardrobe>,
    selection: LogSelection,
}

impl DemoHost {
    fn ctx(&mut self) -> HostContext<'_> {
        HostContext {
            focus: &mut self.focus,
            dispatch: &mut self.dispatch,
            haptics: &mut self.haptics,
            gate: &self.gate,
            bodies: &mut self.bodies,
            selection: &mut self.selection,
        }
    }
}

/// One scripted event.
enum Step {
    Enter(ControllerId, hecs::Entity),
    Exit(ControllerId, hecs::Entity),
    Input(ControllerId, ControllerInput),
    Gate(bool),
}

fn script(body0: &[hecs::Entity], body1: &[hecs::Entity]) -> Vec<Vec<Step>> {
    let (bust, spine, kokan) = (body0[0], body0[1], body0[2]);
    let arm = body1[0];
    let at = ControllerInput::at;

    vec![
        // Left hand reaches the chest and touches.
        vec![Step::Enter(LEFT, bust)],
        vec![Step::Input(LEFT, at(Vec3::ZERO).trigger(true))],
        vec![Step::Enter(LEFT, spine)],
        // Right hand is denied the lock while the left one holds it.
        vec![Step::Enter(RIGHT, arm)],
        vec![Step::Input(LEFT, at(Vec3::ZERO))],
        // Tap on the chest opens the top by one step.
        vec![Step::Input(LEFT, at(Vec3::ZERO).touchpad(true))],
        vec![Step::Input(LEFT, at(Vec3::new(0.05, 0.0, 0.0)))],
        // Cycle to the next interaction.
        vec![Step::Input(LEFT, at(Vec3::ZERO).menu(true))],
        vec![Step::Input(LEFT, at(Vec3::ZERO))],
        vec![Step::Exit(LEFT, bust), Step::Exit(LEFT, spine)],
        // Right hand gets the lock and drags the top off the second body.
        vec![Step::Input(RIGHT, at(Vec3::ZERO).touchpad(true))],
        vec![Step::Input(RIGHT, at(Vec3::new(0.0, -0.5, 0.0)))],
        vec![Step::Exit(RIGHT, arm)],
        // Gate closes mid-gesture; the gesture is dropped.
        vec![Step::Enter(LEFT, kokan)],
        vec![Step::Input(LEFT, at(Vec3::ZERO).touchpad(true))],
        vec![Step::Gate(false)],
        vec![Step::Input(LEFT, at(Vec3::ZERO))],
        vec![Step::Gate(true), Step::Input(LEFT, at(Vec3::ZERO).trigger(true))],
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut world = hecs::World::new();
    let (_, body0) = spawn_body(
        &mut world,
        0,
        &["cf_hit_bust02_L", "cf_hit_spine01", "aibu_hit_kokan", "cf_hit_head"],
    );
    let (_, body1) = spawn_body(&mut world, 1, &["cf_hit_arm_L", "cf_hit_spine03"]);
    let registry = scan_system(&world, &VolumeClassifier::default());

    let mut host = DemoHost {
        focus: FocusArbiter::new(FocusScope::Global),
        dispatch: QueuedDispatch::new(),
        haptics: LogHaptics,
        gate: true,
        bodies: vec![
            Wardrobe::fully_dressed().with_soft_bottom(true),
            Wardrobe::fully_dressed(),
        ],
        selection: LogSelection,
    };
    let config = CaressConfig::default().automatic_touching(true);
    let mut session = InteractionSession::new(registry, config, &[LEFT, RIGHT])?;

    for (frame, steps) in script(&body0, &body1).into_iter().enumerate() {
        let mut inputs = Vec::new();
        for step in steps {
            match step {
                Step::Enter(c, e) => session.on_volume_enter(c, VolumeId::from(e), &mut host.ctx()),
                Step::Exit(c, e) => session.on_volume_exit(c, VolumeId::from(e), &mut host.ctx()),
                Step::Input(c, input) => inputs.push((c, input)),
                Step::Gate(open) => host.gate = open,
            }
        }
        if let Err(err) = session.on_tick(&inputs, &mut host.ctx()) {
            log::warn!("frame {frame}: {err}");
        }
        for event in host.dispatch.drain() {
            println!("frame {frame:>2}: {event:?}");
        }
        if host.dispatch.scroll_delta() != 0.0 {
            println!("frame {frame:>2}: wheel {}", host.dispatch.scroll_delta());
        }
    }

    session.teardown(&mut host.ctx())?;
    for event in host.dispatch.drain() {
        println!("teardown: {event:?}");
    }

    for (i, body) in host.bodies.iter().enumerate() {
        let states: Vec<String> = GarmentKind::ALL
            .iter()
            .map(|kind| match body.garment_state(*kind) {
                Some(state) => format!("{kind}={state}"),
                None => format!("{kind}=-"),
            })
            .collect();
        println!("body {i}: {}", states.join(" "));
    }
    Ok(())
}
