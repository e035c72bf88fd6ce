//! Body-part categories for interaction volumes.

use std::cmp::Ordering;
use std::fmt;

/// A body part the controller can interact with.
///
/// Categories are totally ordered by [`priority`](Self::priority): a more
/// specific part has a lower priority value and wins when several volumes
/// are touched at once. The order is defined by `priority`, not by
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPartCategory {
    Crotch,
    Groin,
    Breast,
    LegLeft,
    LegRight,
    Forearm,
    UpperArm,
    Thigh,
    Torso,
}

impl BodyPartCategory {
    /// Every category, most specific first.
    pub const ALL: [BodyPartCategory; 9] = [
        BodyPartCategory::Crotch,
        BodyPartCategory::Groin,
        BodyPartCategory::Breast,
        BodyPartCategory::LegLeft,
        BodyPartCategory::LegRight,
        BodyPartCategory::Forearm,
        BodyPartCategory::UpperArm,
        BodyPartCategory::Thigh,
        BodyPartCategory::Torso,
    ];

    /// Interaction priority. Lower wins.
    pub const fn priority(self) -> u8 {
        match self {
            BodyPartCategory::Crotch => 0,
            BodyPartCategory::Groin => 1,
            BodyPartCategory::Breast => 2,
            BodyPartCategory::LegLeft => 3,
            BodyPartCategory::LegRight => 4,
            BodyPartCategory::Forearm => 5,
            BodyPartCategory::UpperArm => 6,
            BodyPartCategory::Thigh => 7,
            BodyPartCategory::Torso => 8,
        }
    }

    /// Whether this category is at least as specific as `threshold`.
    #[inline]
    pub fn at_least_as_specific_as(self, threshold: BodyPartCategory) -> bool {
        self.priority() <= threshold.priority()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BodyPartCategory::Crotch => "crotch",
            BodyPartCategory::Groin => "groin",
            BodyPartCategory::Breast => "breast",
            BodyPartCategory::LegLeft => "leg-left",
            BodyPartCategory::LegRight => "leg-right",
            BodyPartCategory::Forearm => "forearm",
            BodyPartCategory::UpperArm => "upper-arm",
            BodyPartCategory::Thigh => "thigh",
            BodyPartCategory::Torso => "torso",
        }
    }
}

impl PartialOrd for BodyPartCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BodyPartCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for BodyPartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
