//! Sensor readings — one derived value plus its presentation metadata.

use podwatch_domain::attribute::{AttributeMap, AttributeValue};

/// The fixed set of sensors a pod exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Status,
    ChargeTime,
    TotalEnergy,
    CurrentEnergy,
    SignalStrength,
    LastMessage,
    ChargeMode,
    TotalCost,
    LastChargeCost,
    OverrideEndTime,
    AccountBalance,
}

impl SensorKind {
    /// Every sensor kind, in presentation order.
    pub const ALL: [Self; 11] = [
        Self::Status,
        Self::ChargeTime,
        Self::TotalEnergy,
        Self::CurrentEnergy,
        Self::SignalStrength,
        Self::LastMessage,
        Self::ChargeMode,
        Self::TotalCost,
        Self::LastChargeCost,
        Self::OverrideEndTime,
        Self::AccountBalance,
    ];

    /// Stable identifier fragment used in unique ids.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::ChargeTime => "charge_time",
            Self::TotalEnergy => "total_energy",
            Self::CurrentEnergy => "current_charge_energy",
            Self::SignalStrength => "signal_strength",
            Self::LastMessage => "last_message_at",
            Self::ChargeMode => "charge_mode",
            Self::TotalCost => "total_cost",
            Self::LastChargeCost => "last_complete_charge_cost",
            Self::OverrideEndTime => "override_end_time",
            Self::AccountBalance => "account_balance",
        }
    }

    /// Human-readable sensor name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::ChargeTime => "Completed Charge Time",
            Self::TotalEnergy => "Total Energy",
            Self::CurrentEnergy => "Current Energy",
            Self::SignalStrength => "Signal Strength",
            Self::LastMessage => "Last Message Received",
            Self::ChargeMode => "Charge Mode",
            Self::TotalCost => "Total Cost",
            Self::LastChargeCost => "Last Completed Charge Cost",
            Self::OverrideEndTime => "Charge Override End Time",
            Self::AccountBalance => "Account Balance",
        }
    }
}

/// A single derived sensor value with its presentation metadata.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SensorReading {
    /// Which sensor this is.
    pub kind: SensorKind,
    /// Stable identifier, unique across the account.
    pub unique_id: String,
    /// Human-readable name.
    pub name: &'static str,
    /// The derived value shown as the sensor state.
    pub value: AttributeValue,
    /// Unit of measurement, when the value carries one (e.g. `"kWh"`).
    pub unit: Option<String>,
    /// Icon identifier, e.g. `"mdi:timer"`.
    pub icon: &'static str,
    /// Static artwork path, only set on the primary status sensor.
    pub entity_picture: Option<String>,
    /// Auxiliary attribute map, when the sensor carries one.
    pub attributes: Option<AttributeMap>,
}
