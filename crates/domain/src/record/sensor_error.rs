//! Simulated sensor malfunction records.
//!
//! These are synthetic data for the log pipeline, not failures of the
//! simulator itself.

use serde::Serialize;

use crate::node::NodeId;
use crate::record::Level;
use crate::time::{Timestamp, serialize_iso8601};

/// Message carried by every simulated sensor error.
pub const SENSOR_ERROR_MESSAGE: &str = "Sensor communication failed, retrying...";

/// Category of a simulated sensor malfunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorErrorKind {
    SensorTimeout,
    SensorDisconnected,
    InvalidReading,
    CalibrationError,
}

impl SensorErrorKind {
    /// Every kind, in the order used for uniform selection.
    pub const ALL: [Self; 4] = [
        Self::SensorTimeout,
        Self::SensorDisconnected,
        Self::InvalidReading,
        Self::CalibrationError,
    ];

    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SensorTimeout => "sensor_timeout",
            Self::SensorDisconnected => "sensor_disconnected",
            Self::InvalidReading => "invalid_reading",
            Self::CalibrationError => "calibration_error",
        }
    }
}

impl std::fmt::Display for SensorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One simulated sensor error line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorErrorRecord {
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: Timestamp,
    pub node_id: NodeId,
    pub level: Level,
    pub error_type: SensorErrorKind,
    pub message: &'static str,
}

impl SensorErrorRecord {
    #[must_use]
    pub fn new(timestamp: Timestamp, node_id: NodeId, kind: SensorErrorKind) -> Self {
        Self {
            timestamp,
            node_id,
            level: Level::Error,
            error_type: kind,
            message: SENSOR_ERROR_MESSAGE,
        }
    }
}
