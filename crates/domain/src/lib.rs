//! # sensorsim-domain
//!
//! Pure domain model for the environment sensor simulator.
//!
//! ## Responsibilities
//! - Foundational types: node identifier, timestamps
//! - Define **Readings** (one temperature / humidity / motion sample)
//! - Define **Records** (telemetry, simulated sensor error, lifecycle) and
//!   their JSON wire shape
//! - Contain the threshold rules deriving status, level and alert
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Randomness and output are expressed as traits in the `app` crate (ports).

pub mod node;
pub mod time;

pub mod reading;
pub mod record;
