//! Progressive undress gesture.
//!
//! A touchpad press on a touched body part picks a garment through the
//! per-category rule tables; the release commits either a single state step
//! or, after a long enough drag, a full removal.

pub mod garment;
pub mod resolver;
pub mod rules;

pub use self::garment::{GarmentKind, TargetBodies, TargetBody, Wardrobe, GARMENT_REMOVED};
pub use self::resolver::{committed_state, UndressCommit, UndressResolver, UndressSession};
pub use self::rules::{rules_for, UndressTarget, SKIRT_CROTCH};
