//! # sensorsim-app
//!
//! Application layer — the generator use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `RandomSource` — uniform, Gaussian and Bernoulli draws
//!   - `RecordSink` — emit one record to the outside world
//! - Provide the `SensorGenerator`, which samples readings around fixed
//!   baselines and turns them into domain records
//! - Provide the scheduler loop (`runner`) that drives the generator on a
//!   fixed interval until cooperative shutdown
//!
//! ## Dependency rule
//! Depends on `sensorsim-domain` only (plus `tokio::time` for the interval wait).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod generator;
pub mod ports;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;
