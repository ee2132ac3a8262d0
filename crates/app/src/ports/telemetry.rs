//! Telemetry port — how snapshots reach the presentation layer.
//!
//! The collaborator on the far side of this port owns polling cadence,
//! transport, credentials, and retries. This layer only ever sees one
//! immutable [`TelemetrySnapshot`] per fetch and never mutates or stores it.

use std::future::Future;

use podwatch_domain::error::PodwatchError;
use podwatch_domain::snapshot::TelemetrySnapshot;

/// A source of pod telemetry.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`). Every
/// call returns a fresh snapshot; the port makes no freshness or ordering
/// guarantees beyond what the underlying device provides.
pub trait TelemetrySource: Send + Sync {
    /// Unique name identifying this source (e.g. `"virtual"`).
    fn name(&self) -> &'static str;

    /// Read one snapshot of pod and account state.
    fn fetch(&self) -> impl Future<Output = Result<TelemetrySnapshot, PodwatchError>> + Send;
}
