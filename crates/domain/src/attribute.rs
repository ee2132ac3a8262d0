//! Typed attribute values and the assemblers that build auxiliary display
//! maps from a telemetry snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::snapshot::TelemetrySnapshot;
use crate::time::Timestamp;
use crate::{ATTRIBUTION, INTEGRATION_ID};

/// A single typed attribute value.
///
/// `Null` is a first-class value: absent optional fields serialize to JSON
/// `null` rather than disappearing from the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Timestamp(Timestamp),
    String(String),
    Json(serde_json::Value),
}

/// Flat attribute name → value mapping attached to a sensor reading.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// The entries every composite map carries.
fn base_attributes() -> AttributeMap {
    let mut attrs = AttributeMap::new();
    attrs.insert(
        "attribution".to_string(),
        AttributeValue::String(ATTRIBUTION.to_string()),
    );
    attrs.insert(
        "integration".to_string(),
        AttributeValue::String(INTEGRATION_ID.to_string()),
    );
    attrs
}

/// Attributes for the energy sensors.
///
/// The total difference is measured against the previous refresh's total,
/// supplied by the caller; without one the difference reads `0.0`.
#[must_use]
pub fn energy_attributes(
    snapshot: &TelemetrySnapshot,
    previous_total_kwh: Option<f64>,
) -> AttributeMap {
    let difference = previous_total_kwh
        .map_or(0.0, |previous| snapshot.total_energy_kwh - previous);

    let mut attrs = base_attributes();
    attrs.insert("id".to_string(), AttributeValue::Int(snapshot.pod_id));
    attrs.insert(
        "suggested_area".to_string(),
        snapshot
            .suggested_area
            .clone()
            .map_or(AttributeValue::Null, AttributeValue::String),
    );
    attrs.insert(
        "current_kwh".to_string(),
        AttributeValue::Float(snapshot.current_energy_kwh),
    );
    attrs.insert(
        "total_kwh".to_string(),
        AttributeValue::Float(snapshot.total_energy_kwh),
    );
    attrs.insert(
        "total_kwh_difference".to_string(),
        AttributeValue::Float(difference),
    );
    attrs
}

/// Attributes for the signal-strength sensor.
#[must_use]
pub fn signal_attributes(snapshot: &TelemetrySnapshot) -> AttributeMap {
    let mut attrs = base_attributes();
    attrs.insert(
        "signal_strength".to_string(),
        AttributeValue::Int(i64::from(snapshot.signal_strength)),
    );
    attrs.insert(
        "connection_quality".to_string(),
        AttributeValue::Int(i64::from(snapshot.connection_quality)),
    );
    attrs
}

/// Attributes for the last-message sensor.
#[must_use]
pub fn last_message_attributes(snapshot: &TelemetrySnapshot) -> AttributeMap {
    let mut attrs = base_attributes();
    attrs.insert(
        "last_message_received".to_string(),
        snapshot
            .last_message_at
            .map_or(AttributeValue::Null, AttributeValue::Timestamp),
    );
    attrs
}

/// Attributes for the override sensors: the serialized override record, or
/// `null` when no override is in force.
#[must_use]
pub fn override_attributes(snapshot: &TelemetrySnapshot) -> AttributeMap {
    let value = match &snapshot.charge_override {
        Some(ovr) => serde_json::to_value(ovr).map_or(AttributeValue::Null, AttributeValue::Json),
        None => AttributeValue::Null,
    };

    let mut attrs = AttributeMap::new();
    attrs.insert("charge_override".to_string(), value);
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge_override::ChargeOverride;
    use crate::snapshot::TelemetrySnapshot;
    use crate::time::now;
    use chrono::Duration;

    fn snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot::builder()
            .pod_id(12_234)
            .unit_id("PSL-123456")
            .model("S7-UC-03-ACA")
            .suggested_area("Outside")
            .build()
            .unwrap()
    }

    #[test]
    fn should_serialize_null_variant_as_json_null() {
        let json = serde_json::to_string(&AttributeValue::Null).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn should_serialize_string_variant_as_plain_string() {
        let val = AttributeValue::String("hello".to_string());
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "\"hello\"");
    }

    #[test]
    fn should_serialize_int_and_float_variants_as_numbers() {
        assert_eq!(serde_json::to_string(&AttributeValue::Int(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&AttributeValue::Float(21.5)).unwrap(),
            "21.5"
        );
    }

    #[test]
    fn should_serialize_timestamp_variant_as_rfc3339_string() {
        let ts = now();
        let json = serde_json::to_string(&AttributeValue::Timestamp(ts)).unwrap();
        assert!(json.starts_with('"'));
        assert!(json.contains('T'));
    }

    #[test]
    fn should_include_attribution_and_integration_in_energy_attributes() {
        let attrs = energy_attributes(&snapshot(), None);
        assert_eq!(
            attrs.get("attribution"),
            Some(&AttributeValue::String(ATTRIBUTION.to_string()))
        );
        assert_eq!(
            attrs.get("integration"),
            Some(&AttributeValue::String("podwatch".to_string()))
        );
        assert_eq!(attrs.get("id"), Some(&AttributeValue::Int(12_234)));
        assert_eq!(
            attrs.get("suggested_area"),
            Some(&AttributeValue::String("Outside".to_string()))
        );
        assert_eq!(attrs.get("current_kwh"), Some(&AttributeValue::Float(0.0)));
        assert_eq!(attrs.get("total_kwh"), Some(&AttributeValue::Float(0.0)));
        assert_eq!(
            attrs.get("total_kwh_difference"),
            Some(&AttributeValue::Float(0.0))
        );
        assert_eq!(attrs.len(), 7);
    }

    #[test]
    fn should_compute_total_difference_against_previous_refresh() {
        let mut snap = snapshot();
        snap.total_energy_kwh = 12.5;
        let attrs = energy_attributes(&snap, Some(10.0));
        assert_eq!(
            attrs.get("total_kwh_difference"),
            Some(&AttributeValue::Float(2.5))
        );
    }

    #[test]
    fn should_default_difference_to_zero_without_previous_total() {
        let mut snap = snapshot();
        snap.total_energy_kwh = 12.5;
        let attrs = energy_attributes(&snap, None);
        assert_eq!(
            attrs.get("total_kwh_difference"),
            Some(&AttributeValue::Float(0.0))
        );
    }

    #[test]
    fn should_expose_signal_fields() {
        let mut snap = snapshot();
        snap.signal_strength = -62;
        snap.connection_quality = 3;
        let attrs = signal_attributes(&snap);
        assert_eq!(
            attrs.get("signal_strength"),
            Some(&AttributeValue::Int(-62))
        );
        assert_eq!(
            attrs.get("connection_quality"),
            Some(&AttributeValue::Int(3))
        );
        assert_eq!(attrs.len(), 4);
    }

    #[test]
    fn should_report_null_when_no_message_seen() {
        let attrs = last_message_attributes(&snapshot());
        assert_eq!(
            attrs.get("last_message_received"),
            Some(&AttributeValue::Null)
        );
    }

    #[test]
    fn should_report_timestamp_when_message_seen() {
        let mut snap = snapshot();
        let ts = now();
        snap.last_message_at = Some(ts);
        let attrs = last_message_attributes(&snap);
        assert_eq!(
            attrs.get("last_message_received"),
            Some(&AttributeValue::Timestamp(ts))
        );
    }

    #[test]
    fn should_report_null_override_when_absent() {
        let attrs = override_attributes(&snapshot());
        assert_eq!(attrs.get("charge_override"), Some(&AttributeValue::Null));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn should_serialize_override_record_when_present() {
        let mut snap = snapshot();
        let ts = now();
        snap.charge_override = Some(ChargeOverride {
            requested_at: ts,
            received_at: ts,
            ends_at: ts + Duration::hours(3),
        });

        let attrs = override_attributes(&snap);
        match attrs.get("charge_override") {
            Some(AttributeValue::Json(value)) => {
                assert!(value.get("requested_at").is_some());
                assert!(value.get("ends_at").is_some());
            }
            other => panic!("expected serialized override, got {other:?}"),
        }
    }
}
