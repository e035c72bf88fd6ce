//! Controller input snapshot and button edge detection.

use glam::Vec3;

/// Controller button used by the interaction core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Trigger,
    /// Secondary (application menu) button.
    Menu,
    Touchpad,
}

impl Button {
    const COUNT: usize = 3;

    #[inline]
    const fn index(self) -> usize {
        match self {
            Button::Trigger => 0,
            Button::Menu => 1,
            Button::Touchpad => 2,
        }
    }
}

/// Per-frame state of one controller as sampled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerInput {
    /// World-space controller position.
    pub position: Vec3,
    pub trigger: bool,
    pub menu: bool,
    pub touchpad: bool,
}

impl ControllerInput {
    /// No buttons held at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn trigger(mut self, pressed: bool) -> Self {
        self.trigger = pressed;
        self
    }

    pub fn menu(mut self, pressed: bool) -> Self {
        self.menu = pressed;
        self
    }

    pub fn touchpad(mut self, pressed: bool) -> Self {
        self.touchpad = pressed;
        self
    }

    /// Check if a button is held.
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Trigger => self.trigger,
            Button::Menu => self.menu,
            Button::Touchpad => self.touchpad,
        }
    }
}

/// Buttons that changed state between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonTransitions {
    down: [bool; Button::COUNT],
    up: [bool; Button::COUNT],
}

impl ButtonTransitions {
    /// Button went down this frame.
    pub fn pressed(&self, button: Button) -> bool {
        self.down[button.index()]
    }

    /// Button came up this frame.
    pub fn released(&self, button: Button) -> bool {
        self.up[button.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.down.iter().chain(self.up.iter()).any(|b| *b)
    }
}

/// Turns level samples into press/release edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonEdges {
    held: [bool; Button::COUNT],
}

impl ButtonEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `input` against the previous sample and remember it.
    pub fn update(&mut self, input: &ControllerInput) -> ButtonTransitions {
        let mut transitions = ButtonTransitions::default();
        for button in [Button::Trigger, Button::Menu, Button::Touchpad] {
            let i = button.index();
            let now = input.is_pressed(button);
            transitions.down[i] = now && !self.held[i];
            transitions.up[i] = !now && self.held[i];
            self.held[i] = now;
        }
        transitions
    }

    /// Forget every held button.
    pub fn reset(&mut self) {
        self.held = [false; Button::COUNT];
    }
}
