//! Interaction settings
//!
//! Configuration shared by every controller in a session.

use crate::category::BodyPartCategory;
use crate::error::{CaressError, CaressResult};

/// Settings for hand-controller interaction.
#[derive(Debug, Clone)]
pub struct CaressConfig {
    /// Controller displacement (scene units) above which releasing the
    /// touchpad removes the garment completely. Default: 0.3.
    pub undress_drag_threshold: f32,
    /// Click automatically when a controller first touches a body. Default: false.
    pub automatic_touching: bool,
    /// Least specific category that still triggers an automatic click.
    /// Default: `Torso` (every category).
    pub auto_touch_min_category: BodyPartCategory,
    /// Haptic intensity for contact and trigger pulses. Default: 1000.
    pub haptic_pulse: u16,
    /// Wheel amount sent when the secondary button is released. Default: 1.0.
    pub cycle_amount: f32,
}

impl Default for CaressConfig {
    fn default() -> Self {
        Self {
            undress_drag_threshold: 0.3,
            automatic_touching: false,
            auto_touch_min_category: BodyPartCategory::Torso,
            haptic_pulse: 1000,
            cycle_amount: 1.0,
        }
    }
}

impl CaressConfig {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the drag threshold for a full removal.
    pub fn undress_drag_threshold(mut self, threshold: f32) -> Self {
        self.undress_drag_threshold = threshold;
        self
    }

    /// Enable or disable automatic touching.
    pub fn automatic_touching(mut self, enabled: bool) -> Self {
        self.automatic_touching = enabled;
        self
    }

    /// Set the least specific category that auto-clicks.
    pub fn auto_touch_min_category(mut self, category: BodyPartCategory) -> Self {
        self.auto_touch_min_category = category;
        self
    }

    /// Set the haptic pulse intensity.
    pub fn haptic_pulse(mut self, intensity: u16) -> Self {
        self.haptic_pulse = intensity;
        self
    }

    /// Set the wheel amount for the cycle action.
    pub fn cycle_amount(mut self, amount: f32) -> Self {
        self.cycle_amount = amount;
        self
    }

    /// Check that every numeric setting is usable.
    pub fn validate(&self) -> CaressResult<()> {
        if !self.undress_drag_threshold.is_finite() || self.undress_drag_threshold <= 0.0 {
            return Err(CaressError::InvalidConfig(format!(
                "undress_drag_threshold must be positive and finite, got {}",
                self.undress_drag_threshold
            )));
        }
        if !self.cycle_amount.is_finite() {
            return Err(CaressError::InvalidConfig(format!(
                "cycle_amount must be finite, got {}",
                self.cycle_amount
            )));
        }
        Ok(())
    }
}
