//! Charge overrides — manual "charge now" windows that pre-empt the smart
//! schedule until they expire.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// An active override window reported by the pod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeOverride {
    /// When the user asked for the override.
    pub requested_at: Timestamp,
    /// When the pod acknowledged it.
    pub received_at: Timestamp,
    /// When the override expires and smart scheduling resumes.
    pub ends_at: Timestamp,
}

impl ChargeOverride {
    /// Whether the override is still in force at `at`.
    #[must_use]
    pub fn is_active(&self, at: Timestamp) -> bool {
        self.ends_at > at
    }
}

/// How the pod decides when to deliver energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargeMode {
    /// Schedule-driven charging.
    #[default]
    Smart,
    /// A manual override window is in force.
    Override,
}

impl ChargeMode {
    /// Display label, e.g. for an enumeration sensor.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smart => "Smart",
            Self::Override => "Override",
        }
    }
}

impl std::fmt::Display for ChargeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;
    use chrono::Duration;

    fn override_ending_in(hours: i64) -> ChargeOverride {
        let ts = now();
        ChargeOverride {
            requested_at: ts,
            received_at: ts,
            ends_at: ts + Duration::hours(hours),
        }
    }

    #[test]
    fn should_be_active_before_it_ends() {
        let ovr = override_ending_in(3);
        assert!(ovr.is_active(now()));
    }

    #[test]
    fn should_be_inactive_after_it_ends() {
        let ovr = override_ending_in(-1);
        assert!(!ovr.is_active(now()));
    }

    #[test]
    fn should_default_to_smart_mode() {
        assert_eq!(ChargeMode::default(), ChargeMode::Smart);
    }

    #[test]
    fn should_display_mode_labels() {
        assert_eq!(ChargeMode::Smart.to_string(), "Smart");
        assert_eq!(ChargeMode::Override.to_string(), "Override");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let ovr = override_ending_in(2);
        let json = serde_json::to_string(&ovr).unwrap();
        let parsed: ChargeOverride = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ovr);
    }
}
