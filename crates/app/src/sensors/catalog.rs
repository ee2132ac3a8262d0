//! Per-sensor derivation — pure constructors turning one snapshot into the
//! panel of readings.

use podwatch_domain::INTEGRATION_ID;
use podwatch_domain::attribute::{
    AttributeValue, energy_attributes, last_message_attributes, override_attributes,
    signal_attributes,
};
use podwatch_domain::duration::format_duration;
use podwatch_domain::icon;
use podwatch_domain::money::Money;
use podwatch_domain::snapshot::TelemetrySnapshot;

use super::SensorPanel;
use super::reading::{SensorKind, SensorReading};

/// Unit label for energy readings.
const UNIT_KWH: &str = "kWh";

/// Derive the full panel from one snapshot.
///
/// `previous_total_kwh` is the total-energy figure from the previous refresh
/// (if any), used for the total-difference attribute.
#[must_use]
pub fn build_panel(
    snapshot: &TelemetrySnapshot,
    currency: &str,
    previous_total_kwh: Option<f64>,
) -> SensorPanel {
    let readings = vec![
        status_reading(snapshot),
        charge_time_reading(snapshot),
        total_energy_reading(snapshot, previous_total_kwh),
        current_energy_reading(snapshot, previous_total_kwh),
        signal_reading(snapshot),
        last_message_reading(snapshot),
        charge_mode_reading(snapshot),
        total_cost_reading(snapshot, currency),
        last_charge_cost_reading(snapshot, currency),
        override_end_reading(snapshot),
        balance_reading(snapshot, currency),
    ];
    SensorPanel::new(snapshot.captured_at, readings)
}

fn unique_id(snapshot: &TelemetrySnapshot, kind: SensorKind) -> String {
    format!(
        "{INTEGRATION_ID}_{}_{}_{}",
        snapshot.pod_id,
        snapshot.unit_id,
        kind.slug()
    )
}

fn reading(snapshot: &TelemetrySnapshot, kind: SensorKind) -> SensorReading {
    SensorReading {
        kind,
        unique_id: unique_id(snapshot, kind),
        name: kind.display_name(),
        value: AttributeValue::Null,
        unit: None,
        icon: icon::TIMER,
        entity_picture: None,
        attributes: None,
    }
}

/// The primary status indicator: current charge state, plug icon, artwork.
#[must_use]
pub fn status_reading(snapshot: &TelemetrySnapshot) -> SensorReading {
    let resolved = icon::resolve_status_icon(snapshot.status, &snapshot.model);
    SensorReading {
        value: AttributeValue::String(snapshot.status.as_str().to_string()),
        icon: resolved.icon,
        entity_picture: Some(resolved.image_path),
        ..reading(snapshot, SensorKind::Status)
    }
}

/// Cumulative completed charge time, with both display forms as attributes.
#[must_use]
pub fn charge_time_reading(snapshot: &TelemetrySnapshot) -> SensorReading {
    let duration = format_duration(snapshot.total_charge_seconds);
    SensorReading {
        value: AttributeValue::Int(
            i64::try_from(snapshot.total_charge_seconds).unwrap_or(i64::MAX),
        ),
        icon: icon::TIMER,
        attributes: Some(duration.attributes()),
        ..reading(snapshot, SensorKind::ChargeTime)
    }
}

/// Lifetime energy delivered. The icon fills in while a charge is active.
#[must_use]
pub fn total_energy_reading(
    snapshot: &TelemetrySnapshot,
    previous_total_kwh: Option<f64>,
) -> SensorReading {
    SensorReading {
        value: AttributeValue::Float(snapshot.total_energy_kwh),
        unit: Some(UNIT_KWH.to_string()),
        icon: icon::energy_icon(snapshot.status),
        attributes: Some(energy_attributes(snapshot, previous_total_kwh)),
        ..reading(snapshot, SensorKind::TotalEnergy)
    }
}

/// Energy delivered by the charge in progress.
#[must_use]
pub fn current_energy_reading(
    snapshot: &TelemetrySnapshot,
    previous_total_kwh: Option<f64>,
) -> SensorReading {
    SensorReading {
        value: AttributeValue::Float(snapshot.current_energy_kwh),
        unit: Some(UNIT_KWH.to_string()),
        icon: icon::vehicle_icon(snapshot.status),
        attributes: Some(energy_attributes(snapshot, previous_total_kwh)),
        ..reading(snapshot, SensorKind::CurrentEnergy)
    }
}

/// Radio signal strength with the quality bucket as an attribute.
#[must_use]
pub fn signal_reading(snapshot: &TelemetrySnapshot) -> SensorReading {
    SensorReading {
        value: AttributeValue::Int(i64::from(snapshot.signal_strength)),
        icon: icon::signal_icon(snapshot.connection_quality),
        attributes: Some(signal_attributes(snapshot)),
        ..reading(snapshot, SensorKind::SignalStrength)
    }
}

/// When the pod last phoned home; `null` until it has.
#[must_use]
pub fn last_message_reading(snapshot: &TelemetrySnapshot) -> SensorReading {
    SensorReading {
        value: snapshot
            .last_message_at
            .map_or(AttributeValue::Null, AttributeValue::Timestamp),
        icon: icon::LAST_MESSAGE,
        attributes: Some(last_message_attributes(snapshot)),
        ..reading(snapshot, SensorKind::LastMessage)
    }
}

/// Whether the pod is following its smart schedule or a manual override.
#[must_use]
pub fn charge_mode_reading(snapshot: &TelemetrySnapshot) -> SensorReading {
    SensorReading {
        value: AttributeValue::String(snapshot.charge_mode().as_str().to_string()),
        icon: icon::CHARGE_MODE,
        attributes: Some(override_attributes(snapshot)),
        ..reading(snapshot, SensorKind::ChargeMode)
    }
}

/// Lifetime charging cost in major units.
#[must_use]
pub fn total_cost_reading(snapshot: &TelemetrySnapshot, currency: &str) -> SensorReading {
    let money = Money::from_minor_units(snapshot.total_cost, currency);
    SensorReading {
        value: AttributeValue::Float(money.amount),
        unit: Some(money.currency.clone()),
        icon: icon::CASH_TOTAL,
        attributes: Some(money.attributes()),
        ..reading(snapshot, SensorKind::TotalCost)
    }
}

/// Cost of the last completed charge in major units.
#[must_use]
pub fn last_charge_cost_reading(snapshot: &TelemetrySnapshot, currency: &str) -> SensorReading {
    let money = Money::from_minor_units(snapshot.last_charge_cost, currency);
    SensorReading {
        value: AttributeValue::Float(money.amount),
        unit: Some(money.currency.clone()),
        icon: icon::CASH,
        attributes: Some(money.attributes()),
        ..reading(snapshot, SensorKind::LastChargeCost)
    }
}

/// When the active override window ends; `null` without one.
#[must_use]
pub fn override_end_reading(snapshot: &TelemetrySnapshot) -> SensorReading {
    SensorReading {
        value: snapshot
            .charge_override
            .as_ref()
            .map_or(AttributeValue::Null, |ovr| {
                AttributeValue::Timestamp(ovr.ends_at)
            }),
        icon: icon::OVERRIDE_END,
        attributes: Some(override_attributes(snapshot)),
        ..reading(snapshot, SensorKind::OverrideEndTime)
    }
}

/// Account balance in major units. Keyed by the account id, not the pod.
#[must_use]
pub fn balance_reading(snapshot: &TelemetrySnapshot, currency: &str) -> SensorReading {
    let money = Money::from_minor_units(snapshot.account_balance, currency);
    SensorReading {
        unique_id: snapshot.account_id.to_string(),
        value: AttributeValue::Float(money.amount),
        unit: Some(money.currency.clone()),
        icon: icon::ACCOUNT_CASH,
        ..reading(snapshot, SensorKind::AccountBalance)
    }
}
