//! Telemetry record — one environment sample plus the status and alert
//! derived from it.

use serde::Serialize;

use crate::node::NodeId;
use crate::reading::Readings;
use crate::record::Level;
use crate::time::{Timestamp, serialize_iso8601};

/// Sensor-category tag carried by every telemetry record.
pub const SENSOR_TYPE: &str = "environment";
/// Event tag added when the PIR sensor fired.
pub const MOTION_EVENT: &str = "motion_detected";

/// Lowest temperature still reported with [`Status::Normal`].
pub const NORMAL_MIN_CELSIUS: f64 = 15.0;
/// Highest temperature still reported with [`Status::Normal`].
pub const NORMAL_MAX_CELSIUS: f64 = 30.0;
/// Temperatures strictly above this raise [`Alert::HighTemperature`].
pub const HIGH_TEMPERATURE_ALERT_CELSIUS: f64 = 28.0;
/// Temperatures strictly below this raise [`Alert::LowTemperature`].
pub const LOW_TEMPERATURE_ALERT_CELSIUS: f64 = 16.0;
/// Humidity strictly above this raises [`Alert::HighHumidity`].
pub const HIGH_HUMIDITY_ALERT_PERCENT: f64 = 70.0;

/// Coarse health of a sample, derived from temperature only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Warning,
}

impl Status {
    /// `Warning` iff the temperature lies outside `[15, 30]`.
    #[must_use]
    pub fn from_temperature(celsius: f64) -> Self {
        if (NORMAL_MIN_CELSIUS..=NORMAL_MAX_CELSIUS).contains(&celsius) {
            Self::Normal
        } else {
            Self::Warning
        }
    }
}

/// Alert attached to a telemetry record, serialized as its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alert {
    #[serde(rename = "High temperature detected")]
    HighTemperature,
    #[serde(rename = "Low temperature detected")]
    LowTemperature,
    #[serde(rename = "High humidity detected")]
    HighHumidity,
}

impl Alert {
    /// Human-readable alert message.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::HighTemperature => "High temperature detected",
            Self::LowTemperature => "Low temperature detected",
            Self::HighHumidity => "High humidity detected",
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// One environment telemetry line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: Timestamp,
    pub node_id: NodeId,
    pub sensor_type: &'static str,
    pub metrics: Readings,
    pub status: Status,
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<&'static str>,
}

impl TelemetryRecord {
    /// Build a record from a sample, deriving status, level, alert and event.
    ///
    /// Checks run in a fixed order: high temperature, else low temperature,
    /// then high humidity, then motion. There is a single alert slot, so a
    /// humidity alert replaces a temperature alert raised by the same sample.
    #[must_use]
    pub fn assess(timestamp: Timestamp, node_id: NodeId, metrics: Readings) -> Self {
        let temperature = metrics.temperature_celsius;
        let mut level = Level::Info;
        let mut alert = None;

        if temperature > HIGH_TEMPERATURE_ALERT_CELSIUS {
            level = Level::Warning;
            alert = Some(Alert::HighTemperature);
        } else if temperature < LOW_TEMPERATURE_ALERT_CELSIUS {
            level = Level::Warning;
            alert = Some(Alert::LowTemperature);
        }

        if metrics.humidity_percent > HIGH_HUMIDITY_ALERT_PERCENT {
            level = Level::Warning;
            alert = Some(Alert::HighHumidity);
        }

        Self {
            timestamp,
            node_id,
            sensor_type: SENSOR_TYPE,
            metrics,
            status: Status::from_temperature(temperature),
            level,
            alert,
            event: metrics.motion_detected.then_some(MOTION_EVENT),
        }
    }
}
