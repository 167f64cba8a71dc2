//! Records — the structured log lines emitted by a simulated node.
//!
//! Every record serializes to a flat JSON object carrying at least
//! `timestamp`, `node_id` and `level`. Optional fields are omitted rather
//! than written as `null`.

mod level;
mod lifecycle;
mod sensor_error;
mod telemetry;

pub use level::Level;
pub use lifecycle::{LifecycleEvent, LifecycleRecord};
pub use sensor_error::{SENSOR_ERROR_MESSAGE, SensorErrorKind, SensorErrorRecord};
pub use telemetry::{
    Alert, HIGH_HUMIDITY_ALERT_PERCENT, HIGH_TEMPERATURE_ALERT_CELSIUS,
    LOW_TEMPERATURE_ALERT_CELSIUS, MOTION_EVENT, NORMAL_MAX_CELSIUS, NORMAL_MIN_CELSIUS,
    SENSOR_TYPE, Status, TelemetryRecord,
};

use serde::Serialize;

use crate::node::NodeId;
use crate::time::Timestamp;

/// Any record the simulator emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Telemetry(TelemetryRecord),
    SensorError(SensorErrorRecord),
    Lifecycle(LifecycleRecord),
}

impl Record {
    /// Severity of the record.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Telemetry(r) => r.level,
            Self::SensorError(_) => Level::Error,
            Self::Lifecycle(_) => Level::Info,
        }
    }

    /// Node the record was produced for.
    #[must_use]
    pub fn node_id(&self) -> &NodeId {
        match self {
            Self::Telemetry(r) => &r.node_id,
            Self::SensorError(r) => &r.node_id,
            Self::Lifecycle(r) => &r.node_id,
        }
    }

    /// When the record was produced.
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Telemetry(r) => r.timestamp,
            Self::SensorError(r) => r.timestamp,
            Self::Lifecycle(r) => r.timestamp,
        }
    }
}

impl From<TelemetryRecord> for Record {
    fn from(record: TelemetryRecord) -> Self {
        Self::Telemetry(record)
    }
}

impl From<SensorErrorRecord> for Record {
    fn from(record: SensorErrorRecord) -> Self {
        Self::SensorError(record)
    }
}

impl From<LifecycleRecord> for Record {
    fn from(record: LifecycleRecord) -> Self {
        Self::Lifecycle(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn node() -> NodeId {
        NodeId::new("rpi-01")
    }

    #[test]
    fn should_report_error_level_for_sensor_errors() {
        let record: Record =
            SensorErrorRecord::new(now(), node(), SensorErrorKind::SensorTimeout).into();
        assert_eq!(record.level(), Level::Error);
    }

    #[test]
    fn should_report_info_level_for_lifecycle_records() {
        let record: Record = LifecycleRecord::startup(now(), node()).into();
        assert_eq!(record.level(), Level::Info);
        assert_eq!(record.node_id().as_str(), "rpi-01");
    }

    #[test]
    fn should_serialize_without_variant_tag() {
        let record: Record = LifecycleRecord::shutdown(now(), node()).into();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["event"], "sensor_shutdown");
        assert!(json.get("Lifecycle").is_none());
    }
}
