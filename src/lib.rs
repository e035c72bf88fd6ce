//! Caress
//!
//! Hand-controller interaction core for VR scenes: contact tracking, focus
//! locking, touch and undress gestures.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **category** - Body part categories and their priority order
//! 2. **contact** - Volume classification, registry and per-controller contact set
//! 3. **undress** - Garment state, rule tables and undress gestures
//! 4. **host** - Collaborator traits the host implements
//! 5. **focus** / **dispatch** - Reference lock provider and input dispatch
//! 6. **controller** - Per-controller interaction state machine
//! 7. **session** - Enclosing scene session and teardown
//! 8. **ecs** - hecs scene scan (feature = "ecs")

pub mod category;
pub mod config;
pub mod contact;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod focus;
pub mod host;
pub mod session;
pub mod undress;

#[cfg(feature = "ecs")]
pub mod ecs;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use category::BodyPartCategory;
pub use config::CaressConfig;
pub use contact::{ContactRegistry, ContactTag, ContactTracker, VolumeClassifier, VolumeId};
pub use controller::input::{Button, ControllerInput};
pub use controller::{ControllerState, InteractionController};
pub use dispatch::{QueuedDispatch, ScrollAccumulator, SyntheticInput};
pub use error::{CaressError, CaressResult};
pub use focus::{FocusArbiter, FocusScope};
pub use host::{
    ControllerId, FocusProvider, Haptics, HostContext, InputDispatch, LockHandle, SelectionSink,
    SessionGate,
};
pub use session::InteractionSession;
pub use undress::{GarmentKind, TargetBodies, TargetBody, UndressSession, Wardrobe};

pub use glam;
