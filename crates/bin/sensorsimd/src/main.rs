//! # sensorsimd — sensor simulator daemon
//!
//! Composition root that wires the generator to its adapters and runs it.
//!
//! ## Responsibilities
//! - Parse configuration (env vars)
//! - Initialise diagnostics (`tracing`, written to stderr)
//! - Construct the random source and the stdout record sink (adapters)
//! - Construct the generator, injecting the random source
//! - Run the scheduler loop until SIGINT/SIGTERM, then exit cleanly
//!
//! ## Output channels
//! stdout carries the record stream only, one JSON document per line.
//! Everything else goes to stderr.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::future::Future;

use sensorsim_adapter_rand::RngSource;
use sensorsim_adapter_stdout::JsonLinesSink;
use sensorsim_app::generator::SensorGenerator;
use sensorsim_app::runner;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.log_filter);

    tracing::info!(node_id = %config.node_id, "starting sensor simulator");
    tracing::info!(
        interval_secs = config.sample_interval.as_secs(),
        "sample interval configured"
    );

    // Handlers are installed here, before the first cycle, so an early
    // interrupt still produces a shutdown record.
    let shutdown = shutdown_signal()?;

    let mut generator = SensorGenerator::new(config.node_id, RngSource::from_entropy());
    let mut sink = JsonLinesSink::stdout();

    let summary = runner::run(&mut generator, &mut sink, config.sample_interval, shutdown).await?;
    tracing::debug!(
        lines = sink.lines(),
        telemetry_records = summary.telemetry_records,
        "record stream closed"
    );

    Ok(())
}

fn init_tracing(filter: &str) {
    let (filter, invalid) = match EnvFilter::try_new(filter) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = invalid {
        tracing::warn!(error = %err, "invalid log filter, falling back to info");
    }
}

/// Resolve on SIGINT (Ctrl-C) or SIGTERM.
#[cfg(unix)]
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::info!("received SIGINT"),
            _ = terminate.recv() => tracing::info!("received SIGTERM"),
        }
    })
}

/// Resolve on Ctrl-C.
#[cfg(windows)]
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    let mut ctrl_c = tokio::signal::windows::ctrl_c()?;

    Ok(async move {
        ctrl_c.recv().await;
        tracing::info!("received ctrl-c");
    })
}
