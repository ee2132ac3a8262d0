//! Sensor catalogue — the fixed panel of read-only sensors a pod exposes.

pub mod catalog;
pub mod reading;

pub use catalog::build_panel;
pub use reading::{SensorKind, SensorReading};

use podwatch_domain::time::Timestamp;

/// One derived panel: every sensor reading for a single snapshot.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SensorPanel {
    /// When the underlying snapshot was taken.
    pub refreshed_at: Timestamp,
    readings: Vec<SensorReading>,
}

impl SensorPanel {
    /// Assemble a panel from already-derived readings.
    #[must_use]
    pub fn new(refreshed_at: Timestamp, readings: Vec<SensorReading>) -> Self {
        Self {
            refreshed_at,
            readings,
        }
    }

    /// All readings, in presentation order.
    #[must_use]
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    /// Look up a reading by kind.
    #[must_use]
    pub fn get(&self, kind: SensorKind) -> Option<&SensorReading> {
        self.readings.iter().find(|reading| reading.kind == kind)
    }

    /// Number of readings in the panel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the panel holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
