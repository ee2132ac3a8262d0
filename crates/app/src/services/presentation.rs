//! Presentation service — pulls one snapshot through the telemetry port and
//! derives the sensor panel from it.

use podwatch_domain::error::PodwatchError;
use podwatch_domain::money::DEFAULT_CURRENCY;

use crate::ports::TelemetrySource;
use crate::sensors::{SensorPanel, build_panel};

/// Application service deriving sensor panels from a telemetry source.
///
/// The service itself stays thin: all derivation is pure and lives in the
/// domain crate and the sensor catalogue. The only state carried across
/// refreshes is the previous total-energy figure, which feeds the
/// total-difference attribute.
pub struct PresentationService<S> {
    source: S,
    currency: String,
    previous_total_kwh: Option<f64>,
}

impl<S: TelemetrySource> PresentationService<S> {
    /// Create a new service backed by the given telemetry source.
    pub fn new(source: S, currency: impl Into<String>) -> Self {
        Self {
            source,
            currency: currency.into(),
            previous_total_kwh: None,
        }
    }

    /// Create a service using the default currency code.
    pub fn with_default_currency(source: S) -> Self {
        Self::new(source, DEFAULT_CURRENCY)
    }

    /// Name of the underlying telemetry source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch one snapshot and derive the full panel from it.
    ///
    /// # Errors
    ///
    /// Returns [`PodwatchError::Source`] when the telemetry source fails;
    /// derivation itself cannot fail.
    #[tracing::instrument(skip(self), fields(source = self.source.name()))]
    pub async fn refresh(&mut self) -> Result<SensorPanel, PodwatchError> {
        let snapshot = self.source.fetch().await?;
        let panel = build_panel(&snapshot, &self.currency, self.previous_total_kwh);
        self.previous_total_kwh = Some(snapshot.total_energy_kwh);

        tracing::debug!(
            status = %snapshot.status,
            readings = panel.len(),
            "derived sensor panel"
        );
        Ok(panel)
    }
}
