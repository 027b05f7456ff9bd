//! Command handlers - the application-layer entry points.

pub mod assistant;
pub mod session;
