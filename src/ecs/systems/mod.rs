//! ECS systems (scene scan).

pub mod scan;

pub use scan::scan_system;
