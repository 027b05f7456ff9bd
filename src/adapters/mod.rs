//! Adapters - concrete implementations of the ports.

pub mod assistant;
pub mod storage;
