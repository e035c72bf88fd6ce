//! Garment slots and the target-body collaborator interface.

use std::fmt;

use anyhow::bail;

use crate::error::{CaressError, CaressResult};

/// Garment state of a fully removed garment. Worn is `0`.
pub const GARMENT_REMOVED: u8 = 3;

/// A removable garment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GarmentKind {
    Top,
    Bottom,
    /// Underwear top layer.
    Bra,
    /// Underwear bottom layer.
    Shorts,
    /// Leggings, tights and pantyhose.
    Tights,
    Socks,
}

impl GarmentKind {
    pub const COUNT: usize = 6;

    pub const ALL: [GarmentKind; GarmentKind::COUNT] = [
        GarmentKind::Top,
        GarmentKind::Bottom,
        GarmentKind::Bra,
        GarmentKind::Shorts,
        GarmentKind::Tights,
        GarmentKind::Socks,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            GarmentKind::Top => 0,
            GarmentKind::Bottom => 1,
            GarmentKind::Bra => 2,
            GarmentKind::Shorts => 3,
            GarmentKind::Tights => 4,
            GarmentKind::Socks => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GarmentKind::Top => "top",
            GarmentKind::Bottom => "bottom",
            GarmentKind::Bra => "bra",
            GarmentKind::Shorts => "shorts",
            GarmentKind::Tights => "tights",
            GarmentKind::Socks => "socks",
        }
    }
}

impl fmt::Display for GarmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live garment state of one target body, implemented by the host.
pub trait TargetBody {
    /// Current state of `kind`, or `None` if the body has no such garment.
    fn garment_state(&self, kind: GarmentKind) -> Option<u8>;

    fn set_garment_state(&mut self, kind: GarmentKind, state: u8) -> anyhow::Result<()>;

    /// Whether the bottom garment carries a soft attachment (a skirt).
    fn has_soft_bottom(&self) -> bool;

    /// State of a fully removed garment.
    fn removed_state(&self) -> u8 {
        GARMENT_REMOVED
    }
}

/// Indexed collection of target bodies in the scene.
pub trait TargetBodies {
    fn body_count(&self) -> usize;
    fn body(&self, index: usize) -> Option<&dyn TargetBody>;
    fn body_mut(&mut self, index: usize) -> Option<&mut dyn TargetBody>;
}

impl<T: TargetBody> TargetBodies for Vec<T> {
    fn body_count(&self) -> usize {
        self.len()
    }

    fn body(&self, index: usize) -> Option<&dyn TargetBody> {
        self.get(index).map(|b| b as &dyn TargetBody)
    }

    fn body_mut(&mut self, index: usize) -> Option<&mut dyn TargetBody> {
        self.get_mut(index).map(|b| b as &mut dyn TargetBody)
    }
}

/// Look up a body, turning a bad index into a contract violation.
pub(crate) fn body_ref(bodies: &dyn TargetBodies, index: usize) -> CaressResult<&dyn TargetBody> {
    let count = bodies.body_count();
    bodies
        .body(index)
        .ok_or(CaressError::UnknownBody { index, count })
}

pub(crate) fn body_mut(
    bodies: &mut dyn TargetBodies,
    index: usize,
) -> CaressResult<&mut dyn TargetBody> {
    let count = bodies.body_count();
    bodies
        .body_mut(index)
        .ok_or(CaressError::UnknownBody { index, count })
}

/// In-memory garment state for a single body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wardrobe {
    states: [Option<u8>; GarmentKind::COUNT],
    soft_bottom: bool,
}

impl Wardrobe {
    /// A body wearing nothing that can be removed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A body wearing every garment kind, fully dressed.
    pub fn fully_dressed() -> Self {
        Self {
            states: [Some(0); GarmentKind::COUNT],
            soft_bottom: false,
        }
    }

    /// Add (or replace) a garment at the given state.
    pub fn with_garment(mut self, kind: GarmentKind, state: u8) -> Self {
        self.states[kind.index()] = Some(state.min(GARMENT_REMOVED));
        self
    }

    /// Drop a garment slot entirely.
    pub fn without_garment(mut self, kind: GarmentKind) -> Self {
        self.states[kind.index()] = None;
        self
    }

    /// Mark the bottom garment as a skirt.
    pub fn with_soft_bottom(mut self, soft: bool) -> Self {
        self.soft_bottom = soft;
        self
    }
}

impl TargetBody for Wardrobe {
    fn garment_state(&self, kind: GarmentKind) -> Option<u8> {
        self.states[kind.index()]
    }

    fn set_garment_state(&mut self, kind: GarmentKind, state: u8) -> anyhow::Result<()> {
        if state > GARMENT_REMOVED {
            bail!("garment state {state} out of range 0..={GARMENT_REMOVED}");
        }
        match &mut self.states[kind.index()] {
            Some(current) => {
                *current = state;
                Ok(())
            }
            None => bail!("body has no {kind} garment"),
        }
    }

    fn has_soft_bottom(&self) -> bool {
        self.soft_bottom
    }
}
