//! Scheduler loop — drives a [`SensorGenerator`] on a fixed interval.
//!
//! Shutdown is cooperative: the `shutdown` future is only raced against the
//! wait between cycles, so a cycle that has started always completes and is
//! followed by exactly one shutdown record.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use sensorsim_domain::record::Record;

use crate::generator::SensorGenerator;
use crate::ports::{EmitError, RandomSource, RecordSink};

/// Counters describing a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Completed sampling cycles.
    pub cycles: u64,
    /// Telemetry records emitted (one per cycle).
    pub telemetry_records: u64,
    /// Telemetry records that carried an alert.
    pub alerts: u64,
    /// Simulated sensor error records emitted.
    pub sensor_errors: u64,
}

/// Run the simulation until `shutdown` resolves.
///
/// Emits a startup record, then each cycle one telemetry record and possibly
/// one simulated error record, then waits `interval`. When `shutdown`
/// resolves during the wait, emits a shutdown record and returns.
///
/// # Errors
///
/// Returns the first [`EmitError`] raised by `sink`; the run stops there.
pub async fn run<R, S, F>(
    generator: &mut SensorGenerator<R>,
    sink: &mut S,
    interval: Duration,
    shutdown: F,
) -> Result<RunSummary, EmitError>
where
    R: RandomSource,
    S: RecordSink,
    F: Future<Output = ()>,
{
    let mut shutdown = pin!(shutdown);
    let mut summary = RunSummary::default();

    sink.emit(&Record::from(generator.startup_record()))?;
    tracing::info!(
        node_id = %generator.node_id(),
        interval_secs = interval.as_secs(),
        temperature_baseline = generator.temperature_baseline(),
        humidity_baseline = generator.humidity_baseline(),
        "sensor simulator started"
    );

    loop {
        run_cycle(generator, sink, &mut summary)?;

        tokio::select! {
            biased;
            () = &mut shutdown => break,
            () = tokio::time::sleep(interval) => {}
        }
    }

    sink.emit(&Record::from(generator.shutdown_record()))?;
    tracing::info!(
        node_id = %generator.node_id(),
        cycles = summary.cycles,
        alerts = summary.alerts,
        sensor_errors = summary.sensor_errors,
        "sensor simulator stopped"
    );

    Ok(summary)
}

fn run_cycle<R, S>(
    generator: &mut SensorGenerator<R>,
    sink: &mut S,
    summary: &mut RunSummary,
) -> Result<(), EmitError>
where
    R: RandomSource,
    S: RecordSink,
{
    let telemetry = generator.build_telemetry_record();
    if let Some(alert) = telemetry.alert {
        tracing::debug!(
            %alert,
            temperature = telemetry.metrics.temperature_celsius,
            humidity = telemetry.metrics.humidity_percent,
            "telemetry alert"
        );
        summary.alerts += 1;
    }
    sink.emit(&Record::from(telemetry))?;
    summary.telemetry_records += 1;

    if let Some(error) = generator.maybe_build_error_record() {
        tracing::debug!(error_type = %error.error_type, "simulated sensor error");
        sink.emit(&Record::from(error))?;
        summary.sensor_errors += 1;
    }

    summary.cycles += 1;
    Ok(())
}
