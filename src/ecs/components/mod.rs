//! ECS components (body hierarchy, proximity volumes).

pub mod body;
pub mod hierarchy;

pub use body::*;
pub use hierarchy::*;
