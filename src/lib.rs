//! Protokollant - Live Meeting Protocol Session Engine
//!
//! This crate drives a formal owners'-assembly meeting item by item:
//! session lifecycle, agenda navigation, per-item record keeping, vote
//! tallying with decision derivation, and the contract with an external
//! text-drafting assistant.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
