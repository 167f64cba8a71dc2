//! Startup and shutdown markers bracketing a simulator run.

use serde::Serialize;

use crate::node::NodeId;
use crate::record::Level;
use crate::time::{Timestamp, serialize_iso8601};

/// Which end of the run a lifecycle record marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleEvent {
    #[serde(rename = "sensor_startup")]
    Startup,
    #[serde(rename = "sensor_shutdown")]
    Shutdown,
}

/// One lifecycle line. Always logged at [`Level::Info`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifecycleRecord {
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: Timestamp,
    pub node_id: NodeId,
    pub level: Level,
    pub event: LifecycleEvent,
    pub message: String,
}

impl LifecycleRecord {
    #[must_use]
    pub fn startup(timestamp: Timestamp, node_id: NodeId) -> Self {
        let message = format!("Sensor simulator started on {node_id}");
        Self::new(timestamp, node_id, LifecycleEvent::Startup, message)
    }

    #[must_use]
    pub fn shutdown(timestamp: Timestamp, node_id: NodeId) -> Self {
        let message = format!("Sensor simulator stopped on {node_id}");
        Self::new(timestamp, node_id, LifecycleEvent::Shutdown, message)
    }

    fn new(timestamp: Timestamp, node_id: NodeId, event: LifecycleEvent, message: String) -> Self {
        Self {
            timestamp,
            node_id,
            level: Level::Info,
            event,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_build_startup_record() {
        let record = LifecycleRecord::startup(crate::time::now(), NodeId::new("rpi-01"));
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.event, LifecycleEvent::Startup);
        assert_eq!(record.message, "Sensor simulator started on rpi-01");
    }

    #[test]
    fn should_build_shutdown_record() {
        let record = LifecycleRecord::shutdown(crate::time::now(), NodeId::default());
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.event, LifecycleEvent::Shutdown);
        assert_eq!(record.message, "Sensor simulator stopped on rpi-unknown");
    }

    #[test]
    fn should_serialize_in_wire_shape() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = LifecycleRecord::startup(ts, NodeId::new("rpi-01"));
        assert_eq!(
            serde_json::to_value(record).unwrap(),
            serde_json::json!({
                "timestamp": "2024-03-01T12:00:00.000000Z",
                "node_id": "rpi-01",
                "level": "info",
                "event": "sensor_startup",
                "message": "Sensor simulator started on rpi-01",
            })
        );
    }
}
