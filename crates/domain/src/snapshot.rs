//! Telemetry snapshot — one immutable read of pod and account state.
//!
//! A snapshot is constructed fresh on every refresh pulled from the device;
//! derived presentation values are recomputed on demand and nothing is
//! cached between refreshes.

use serde::{Deserialize, Serialize};

use crate::charge_override::{ChargeMode, ChargeOverride};
use crate::error::{PodwatchError, ValidationError};
use crate::id::AccountId;
use crate::model::PodModel;
use crate::status::ChargeStatus;
use crate::time::Timestamp;

/// Raw pod and account telemetry at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Numeric pod identifier.
    pub pod_id: i64,
    /// Pod unit name, e.g. `"PSL-123456"`. Never empty.
    pub unit_id: String,
    /// Account the pod bills against.
    pub account_id: AccountId,
    /// Model identifier, e.g. `"S7-UC-03-ACA"`.
    pub model: PodModel,
    /// Current charge state.
    pub status: ChargeStatus,
    /// Area hint for the collaborator's UI.
    pub suggested_area: Option<String>,
    /// Cumulative seconds spent charging across completed charges.
    pub total_charge_seconds: u64,
    /// Lifetime energy delivered, kWh.
    pub total_energy_kwh: f64,
    /// Energy delivered during the charge in progress, kWh.
    pub current_energy_kwh: f64,
    /// Lifetime cost in minor currency units.
    pub total_cost: i32,
    /// Cost of the last completed charge in minor currency units.
    pub last_charge_cost: i32,
    /// Radio signal strength, dBm.
    pub signal_strength: i32,
    /// Connection quality bucket reported by the pod.
    pub connection_quality: u8,
    /// Account balance in minor currency units. May be negative.
    pub account_balance: i32,
    /// Manual override window, if one is in force.
    pub charge_override: Option<ChargeOverride>,
    /// When the pod last phoned home.
    pub last_message_at: Option<Timestamp>,
    /// When this snapshot was taken.
    pub captured_at: Timestamp,
}

impl TelemetrySnapshot {
    /// Create a builder for constructing a [`TelemetrySnapshot`].
    #[must_use]
    pub fn builder() -> TelemetrySnapshotBuilder {
        TelemetrySnapshotBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PodwatchError::Validation`] when `unit_id` or the model
    /// identifier is empty.
    pub fn validate(&self) -> Result<(), PodwatchError> {
        if self.unit_id.is_empty() {
            return Err(ValidationError::EmptyUnitId.into());
        }
        if self.model.name().is_empty() {
            return Err(ValidationError::EmptyModel.into());
        }
        Ok(())
    }

    /// How the pod is currently deciding when to charge.
    #[must_use]
    pub fn charge_mode(&self) -> ChargeMode {
        if self.charge_override.is_some() {
            ChargeMode::Override
        } else {
            ChargeMode::Smart
        }
    }
}

/// Step-by-step builder for [`TelemetrySnapshot`].
#[derive(Debug, Default)]
pub struct TelemetrySnapshotBuilder {
    pod_id: Option<i64>,
    unit_id: Option<String>,
    account_id: Option<AccountId>,
    model: Option<PodModel>,
    status: Option<ChargeStatus>,
    suggested_area: Option<String>,
    total_charge_seconds: u64,
    total_energy_kwh: f64,
    current_energy_kwh: f64,
    total_cost: i32,
    last_charge_cost: i32,
    signal_strength: i32,
    connection_quality: u8,
    account_balance: i32,
    charge_override: Option<ChargeOverride>,
    last_message_at: Option<Timestamp>,
    captured_at: Option<Timestamp>,
}

impl TelemetrySnapshotBuilder {
    #[must_use]
    pub fn pod_id(mut self, pod_id: i64) -> Self {
        self.pod_id = Some(pod_id);
        self
    }

    #[must_use]
    pub fn unit_id(mut self, unit_id: impl Into<String>) -> Self {
        self.unit_id = Some(unit_id.into());
        self
    }

    #[must_use]
    pub fn account_id(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(PodModel::new(model));
        self
    }

    #[must_use]
    pub fn status(mut self, status: ChargeStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn suggested_area(mut self, area: impl Into<String>) -> Self {
        self.suggested_area = Some(area.into());
        self
    }

    #[must_use]
    pub fn total_charge_seconds(mut self, seconds: u64) -> Self {
        self.total_charge_seconds = seconds;
        self
    }

    #[must_use]
    pub fn total_energy_kwh(mut self, kwh: f64) -> Self {
        self.total_energy_kwh = kwh;
        self
    }

    #[must_use]
    pub fn current_energy_kwh(mut self, kwh: f64) -> Self {
        self.current_energy_kwh = kwh;
        self
    }

    #[must_use]
    pub fn total_cost(mut self, minor_units: i32) -> Self {
        self.total_cost = minor_units;
        self
    }

    #[must_use]
    pub fn last_charge_cost(mut self, minor_units: i32) -> Self {
        self.last_charge_cost = minor_units;
        self
    }

    #[must_use]
    pub fn signal_strength(mut self, dbm: i32) -> Self {
        self.signal_strength = dbm;
        self
    }

    #[must_use]
    pub fn connection_quality(mut self, quality: u8) -> Self {
        self.connection_quality = quality;
        self
    }

    #[must_use]
    pub fn account_balance(mut self, minor_units: i32) -> Self {
        self.account_balance = minor_units;
        self
    }

    #[must_use]
    pub fn charge_override(mut self, charge_override: ChargeOverride) -> Self {
        self.charge_override = Some(charge_override);
        self
    }

    #[must_use]
    pub fn last_message_at(mut self, at: Timestamp) -> Self {
        self.last_message_at = Some(at);
        self
    }

    #[must_use]
    pub fn captured_at(mut self, at: Timestamp) -> Self {
        self.captured_at = Some(at);
        self
    }

    /// Consume the builder, validate, and return a [`TelemetrySnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`PodwatchError::Validation`] if `unit_id` or the model
    /// identifier is missing or empty.
    pub fn build(self) -> Result<TelemetrySnapshot, PodwatchError> {
        let snapshot = TelemetrySnapshot {
            pod_id: self.pod_id.unwrap_or_default(),
            unit_id: self.unit_id.unwrap_or_default(),
            account_id: self.account_id.unwrap_or_default(),
            model: self.model.unwrap_or_else(|| PodModel::new("")),
            status: self.status.unwrap_or_default(),
            suggested_area: self.suggested_area,
            total_charge_seconds: self.total_charge_seconds,
            total_energy_kwh: self.total_energy_kwh,
            current_energy_kwh: self.current_energy_kwh,
            total_cost: self.total_cost,
            last_charge_cost: self.last_charge_cost,
            signal_strength: self.signal_strength,
            connection_quality: self.connection_quality,
            account_balance: self.account_balance,
            charge_override: self.charge_override,
            last_message_at: self.last_message_at,
            captured_at: self.captured_at.unwrap_or_else(crate::time::now),
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;
    use chrono::Duration;

    fn valid_builder() -> TelemetrySnapshotBuilder {
        TelemetrySnapshot::builder()
            .pod_id(12_234)
            .unit_id("PSL-123456")
            .model("S7-UC-03-ACA")
    }

    #[test]
    fn should_build_snapshot_with_defaults() {
        let snapshot = valid_builder().build().unwrap();
        assert_eq!(snapshot.pod_id, 12_234);
        assert_eq!(snapshot.unit_id, "PSL-123456");
        assert_eq!(snapshot.status, ChargeStatus::Unavailable);
        assert_eq!(snapshot.total_charge_seconds, 0);
        assert!(snapshot.charge_override.is_none());
        assert!(snapshot.last_message_at.is_none());
    }

    #[test]
    fn should_reject_empty_unit_id() {
        let result = TelemetrySnapshot::builder().model("S7-UC-03-ACA").build();
        assert!(matches!(
            result,
            Err(PodwatchError::Validation(ValidationError::EmptyUnitId))
        ));
    }

    #[test]
    fn should_reject_empty_model() {
        let result = TelemetrySnapshot::builder().unit_id("PSL-123456").build();
        assert!(matches!(
            result,
            Err(PodwatchError::Validation(ValidationError::EmptyModel))
        ));
    }

    #[test]
    fn should_build_snapshot_with_all_fields() {
        let ts = now();
        let snapshot = valid_builder()
            .account_id(AccountId::new())
            .status(ChargeStatus::Charging)
            .suggested_area("Outside")
            .total_charge_seconds(9945)
            .total_energy_kwh(120.5)
            .current_energy_kwh(7.2)
            .total_cost(9945)
            .last_charge_cost(61)
            .signal_strength(-58)
            .connection_quality(4)
            .account_balance(173)
            .last_message_at(ts)
            .captured_at(ts)
            .build()
            .unwrap();

        assert_eq!(snapshot.status, ChargeStatus::Charging);
        assert_eq!(snapshot.total_charge_seconds, 9945);
        assert_eq!(snapshot.account_balance, 173);
        assert_eq!(snapshot.last_message_at, Some(ts));
        assert_eq!(snapshot.captured_at, ts);
    }

    #[test]
    fn should_derive_smart_mode_without_override() {
        let snapshot = valid_builder().build().unwrap();
        assert_eq!(snapshot.charge_mode(), ChargeMode::Smart);
    }

    #[test]
    fn should_derive_override_mode_when_override_present() {
        let ts = now();
        let snapshot = valid_builder()
            .charge_override(ChargeOverride {
                requested_at: ts,
                received_at: ts,
                ends_at: ts + Duration::hours(3),
            })
            .build()
            .unwrap();
        assert_eq!(snapshot.charge_mode(), ChargeMode::Override);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let snapshot = valid_builder()
            .status(ChargeStatus::Charging)
            .total_cost(9945)
            .build()
            .unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.unit_id, snapshot.unit_id);
        assert_eq!(parsed.status, snapshot.status);
        assert_eq!(parsed.total_cost, snapshot.total_cost);
    }
}
