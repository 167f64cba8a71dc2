//! Sensor record generator — samples readings around fixed baselines.
//!
//! A generator is parameterised by two baselines drawn once at construction.
//! Every sample is independent given those baselines; the only state that
//! advances between calls is the owned [`RandomSource`].

use sensorsim_domain::node::NodeId;
use sensorsim_domain::reading::{Readings, clamp_humidity, round2};
use sensorsim_domain::record::{
    LifecycleRecord, SensorErrorKind, SensorErrorRecord, TelemetryRecord,
};
use sensorsim_domain::time;

use crate::ports::RandomSource;

/// Range the temperature baseline is drawn from, in °C.
pub const TEMPERATURE_BASELINE_RANGE: (f64, f64) = (18.0, 24.0);
/// Range the humidity baseline is drawn from, in %.
pub const HUMIDITY_BASELINE_RANGE: (f64, f64) = (40.0, 60.0);
/// Standard deviation of per-sample temperature drift.
pub const TEMPERATURE_DRIFT_STD_DEV: f64 = 0.5;
/// Standard deviation of per-sample humidity drift.
pub const HUMIDITY_DRIFT_STD_DEV: f64 = 2.0;
/// Probability that a temperature sample carries a spike.
pub const SPIKE_PROBABILITY: f64 = 0.05;
/// Range of the upward spike added to a temperature sample, in °C.
pub const SPIKE_RANGE: (f64, f64) = (2.0, 5.0);
/// Probability that the PIR sensor reports motion.
pub const MOTION_PROBABILITY: f64 = 0.1;
/// Probability that a cycle also produces a simulated sensor error.
pub const SENSOR_ERROR_PROBABILITY: f64 = 0.02;

/// Produces telemetry, simulated error and lifecycle records for one node.
#[derive(Debug)]
pub struct SensorGenerator<R> {
    node_id: NodeId,
    random: R,
    temperature_baseline: f64,
    humidity_baseline: f64,
    motion_probability: f64,
}

impl<R: RandomSource> SensorGenerator<R> {
    /// Create a generator, drawing the temperature then the humidity baseline
    /// from `random`.
    pub fn new(node_id: NodeId, mut random: R) -> Self {
        let (t_low, t_high) = TEMPERATURE_BASELINE_RANGE;
        let (h_low, h_high) = HUMIDITY_BASELINE_RANGE;
        let temperature_baseline = random.uniform(t_low, t_high);
        let humidity_baseline = random.uniform(h_low, h_high);
        Self::with_baselines(node_id, random, temperature_baseline, humidity_baseline)
    }

    /// Create a generator with fixed baselines.
    pub fn with_baselines(
        node_id: NodeId,
        random: R,
        temperature_baseline: f64,
        humidity_baseline: f64,
    ) -> Self {
        Self {
            node_id,
            random,
            temperature_baseline,
            humidity_baseline,
            motion_probability: MOTION_PROBABILITY,
        }
    }

    #[must_use]
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    #[must_use]
    pub fn temperature_baseline(&self) -> f64 {
        self.temperature_baseline
    }

    #[must_use]
    pub fn humidity_baseline(&self) -> f64 {
        self.humidity_baseline
    }

    /// Baseline plus Gaussian drift, occasionally plus an upward spike.
    ///
    /// Not clamped: out-of-range values are what trigger alerts downstream.
    pub fn sample_temperature(&mut self) -> f64 {
        let mut temperature = self
            .random
            .gaussian(self.temperature_baseline, TEMPERATURE_DRIFT_STD_DEV);
        if self.random.chance(SPIKE_PROBABILITY) {
            let (low, high) = SPIKE_RANGE;
            temperature += self.random.uniform(low, high);
        }
        round2(temperature)
    }

    /// Baseline plus Gaussian drift, clamped to `[0, 100]`.
    pub fn sample_humidity(&mut self) -> f64 {
        let humidity = self
            .random
            .gaussian(self.humidity_baseline, HUMIDITY_DRIFT_STD_DEV);
        round2(clamp_humidity(humidity))
    }

    pub fn sample_motion(&mut self) -> bool {
        self.random.chance(self.motion_probability)
    }

    /// Sample every sensor once and assess the result.
    pub fn build_telemetry_record(&mut self) -> TelemetryRecord {
        let readings = Readings {
            temperature_celsius: self.sample_temperature(),
            humidity_percent: self.sample_humidity(),
            motion_detected: self.sample_motion(),
        };
        TelemetryRecord::assess(time::now(), self.node_id.clone(), readings)
    }

    /// With a small probability, produce a simulated sensor error of a
    /// uniformly chosen kind.
    pub fn maybe_build_error_record(&mut self) -> Option<SensorErrorRecord> {
        if !self.random.chance(SENSOR_ERROR_PROBABILITY) {
            return None;
        }
        let index = self.random.pick(SensorErrorKind::ALL.len());
        let kind = SensorErrorKind::ALL
            .get(index)
            .copied()
            .unwrap_or(SensorErrorKind::SensorTimeout);
        Some(SensorErrorRecord::new(time::now(), self.node_id.clone(), kind))
    }

    #[must_use]
    pub fn startup_record(&self) -> LifecycleRecord {
        LifecycleRecord::startup(time::now(), self.node_id.clone())
    }

    #[must_use]
    pub fn shutdown_record(&self) -> LifecycleRecord {
        LifecycleRecord::shutdown(time::now(), self.node_id.clone())
    }
}
