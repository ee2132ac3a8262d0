//! Charge status — the current operational state reported by a pod.

use serde::{Deserialize, Serialize};

/// Discrete charge state of a pod.
///
/// The wire form (and `Display`) uses the kebab-case vocabulary the pod
/// reports, e.g. `"connected-waiting-for-schedule"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeStatus {
    Available,
    #[default]
    Unavailable,
    Charging,
    OutOfService,
    WaitingForSchedule,
    ConnectedWaitingForSchedule,
    SuspendedEv,
    SuspendedEvse,
    Idle,
    Pending,
}

impl ChargeStatus {
    /// Every status a pod can report, in presentation order.
    pub const ALL: [Self; 10] = [
        Self::Available,
        Self::Unavailable,
        Self::Charging,
        Self::OutOfService,
        Self::WaitingForSchedule,
        Self::ConnectedWaitingForSchedule,
        Self::SuspendedEv,
        Self::SuspendedEvse,
        Self::Idle,
        Self::Pending,
    ];

    /// Whether a charge is actively delivering energy right now.
    ///
    /// Gates the "active" icon variants on the energy and vehicle sensors.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Charging)
    }

    /// The kebab-case label, matching the serde wire form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Charging => "charging",
            Self::OutOfService => "out-of-service",
            Self::WaitingForSchedule => "waiting-for-schedule",
            Self::ConnectedWaitingForSchedule => "connected-waiting-for-schedule",
            Self::SuspendedEv => "suspended-ev",
            Self::SuspendedEvse => "suspended-evse",
            Self::Idle => "idle",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_active_only_when_charging() {
        assert!(ChargeStatus::Charging.is_active());
        for status in ChargeStatus::ALL {
            if status != ChargeStatus::Charging {
                assert!(!status.is_active(), "{status} should not be active");
            }
        }
    }

    #[test]
    fn should_default_to_unavailable() {
        assert_eq!(ChargeStatus::default(), ChargeStatus::Unavailable);
    }

    #[test]
    fn should_display_kebab_case_labels() {
        assert_eq!(ChargeStatus::Charging.to_string(), "charging");
        assert_eq!(ChargeStatus::OutOfService.to_string(), "out-of-service");
        assert_eq!(
            ChargeStatus::ConnectedWaitingForSchedule.to_string(),
            "connected-waiting-for-schedule"
        );
        assert_eq!(ChargeStatus::SuspendedEvse.to_string(), "suspended-evse");
    }

    #[test]
    fn should_list_all_statuses_in_presentation_order() {
        let labels: Vec<&str> = ChargeStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            labels,
            [
                "available",
                "unavailable",
                "charging",
                "out-of-service",
                "waiting-for-schedule",
                "connected-waiting-for-schedule",
                "suspended-ev",
                "suspended-evse",
                "idle",
                "pending",
            ]
        );
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        for status in ChargeStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
            let parsed: ChargeStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn should_deserialize_suspended_variants() {
        let ev: ChargeStatus = serde_json::from_str("\"suspended-ev\"").unwrap();
        let evse: ChargeStatus = serde_json::from_str("\"suspended-evse\"").unwrap();
        assert_eq!(ev, ChargeStatus::SuspendedEv);
        assert_eq!(evse, ChargeStatus::SuspendedEvse);
    }
}
