//! Per-category undress rule tables.

use crate::category::BodyPartCategory;

use super::garment::GarmentKind::{self, Bottom, Bra, Shorts, Socks, Tights, Top};

/// A garment that may be removed while its state lies in `[min_state, max_state]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndressTarget {
    pub kind: GarmentKind,
    pub min_state: u8,
    pub max_state: u8,
}

impl UndressTarget {
    /// Target with the default range `[0, 2]`.
    pub const fn new(kind: GarmentKind) -> Self {
        Self::with_range(kind, 0, 2)
    }

    pub const fn with_range(kind: GarmentKind, min_state: u8, max_state: u8) -> Self {
        Self {
            kind,
            min_state,
            max_state,
        }
    }

    #[inline]
    pub fn admits(&self, state: u8) -> bool {
        self.min_state <= state && state <= self.max_state
    }
}

static LOWER_BODY: [UndressTarget; 3] = [
    UndressTarget::new(Bottom),
    UndressTarget::new(Tights),
    UndressTarget::new(Shorts),
];
static BREAST: [UndressTarget; 2] = [UndressTarget::new(Top), UndressTarget::new(Bra)];
static LEG: [UndressTarget; 2] = [
    UndressTarget::new(Socks),
    UndressTarget::with_range(Shorts, 2, 2),
];
static UPPER_BODY: [UndressTarget; 1] = [UndressTarget::new(Top)];
static THIGH: [UndressTarget; 3] = [
    UndressTarget::new(Tights),
    UndressTarget::new(Bottom),
    UndressTarget::new(Socks),
];

/// Crotch rules used when the bottom garment is a skirt: underwear layers
/// come before the outer garment.
pub static SKIRT_CROTCH: [UndressTarget; 3] = [
    UndressTarget::new(Tights),
    UndressTarget::new(Shorts),
    UndressTarget::new(Bottom),
];

/// Rules for `category`, highest priority first.
pub fn rules_for(category: BodyPartCategory) -> &'static [UndressTarget] {
    match category {
        BodyPartCategory::Crotch | BodyPartCategory::Groin => &LOWER_BODY,
        BodyPartCategory::Breast => &BREAST,
        BodyPartCategory::LegLeft | BodyPartCategory::LegRight => &LEG,
        BodyPartCategory::Forearm => &[],
        BodyPartCategory::UpperArm | BodyPartCategory::Torso => &UPPER_BODY,
        BodyPartCategory::Thigh => &THIGH,
    }
}
