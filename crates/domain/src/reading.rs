//! Sensor readings — one sample of every simulated sensor on a node.

use serde::Serialize;

/// Lower bound of a relative-humidity reading, in percent.
pub const HUMIDITY_MIN_PERCENT: f64 = 0.0;
/// Upper bound of a relative-humidity reading, in percent.
pub const HUMIDITY_MAX_PERCENT: f64 = 100.0;

/// One sample of the temperature, humidity and PIR motion sensors.
///
/// Serialized as the `metrics` object of a telemetry record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readings {
    /// Temperature in °C, rounded to two decimals. Never clamped.
    pub temperature_celsius: f64,
    /// Relative humidity in %, rounded to two decimals, within `[0, 100]`.
    pub humidity_percent: f64,
    /// Whether the PIR sensor fired during this sample.
    pub motion_detected: bool,
}

/// Round to two decimals.
///
/// Rounds the exact binary value, breaking exact ties toward the even digit,
/// so `2.675` (stored as `2.67499…`) gives `2.67` and `0.125` gives `0.12`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Clamp a raw humidity value into `[0, 100]`.
#[must_use]
pub fn clamp_humidity(raw: f64) -> f64 {
    raw.clamp(HUMIDITY_MIN_PERCENT, HUMIDITY_MAX_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_to_two_decimals() {
        assert!((round2(21.234_9) - 21.23).abs() < f64::EPSILON);
        assert!((round2(21.235_1) - 21.24).abs() < f64::EPSILON);
        assert!((round2(-3.456) - -3.46).abs() < f64::EPSILON);
    }

    #[test]
    fn should_round_stored_value_not_decimal_literal() {
        assert!((round2(2.675) - 2.67).abs() < f64::EPSILON);
        assert!((round2(1.005) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_break_exact_ties_toward_even() {
        assert!((round2(0.125) - 0.12).abs() < f64::EPSILON);
        assert!((round2(0.375) - 0.38).abs() < f64::EPSILON);
    }

    #[test]
    fn should_not_push_28_005_over_alert_threshold() {
        assert!((round2(28.005) - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_leave_in_range_humidity_untouched() {
        assert!((clamp_humidity(85.0) - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_clamp_humidity_above_hundred() {
        assert!((clamp_humidity(110.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_clamp_negative_humidity_to_zero() {
        assert!(clamp_humidity(-4.2).abs() < f64::EPSILON);
    }

    #[test]
    fn should_serialize_with_wire_field_names() {
        let readings = Readings {
            temperature_celsius: 20.5,
            humidity_percent: 48.0,
            motion_detected: true,
        };
        let json = serde_json::to_value(readings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "temperature_celsius": 20.5,
                "humidity_percent": 48.0,
                "motion_detected": true,
            })
        );
    }
}
