//! Target body and proximity volume components.

/// Root of a target body's hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRoot {
    /// Index of the body in the host's body provider.
    pub index: usize,
}

/// A trigger volume a controller can overlap, identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProximityVolume {
    pub name: String,
}

impl ProximityVolume {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
