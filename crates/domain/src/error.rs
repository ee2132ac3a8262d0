//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PodwatchError`] via `#[from]` — no `String` variants.

/// Top-level error for the podwatch workspace.
#[derive(Debug, thiserror::Error)]
pub enum PodwatchError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A telemetry source failed to produce a snapshot.
    #[error("telemetry source error")]
    Source(#[from] SourceError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A snapshot was built without a unit id.
    #[error("unit id must not be empty")]
    EmptyUnitId,
    /// A snapshot was built without a model identifier.
    #[error("model identifier must not be empty")]
    EmptyModel,
}

/// Failure reported by a telemetry source.
#[derive(Debug, thiserror::Error)]
#[error("telemetry source '{source_name}' failed: {message}")]
pub struct SourceError {
    /// Name of the source that failed (e.g. `"virtual"`).
    pub source_name: &'static str,
    /// Human-readable failure description.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_podwatch_error() {
        let err: PodwatchError = ValidationError::EmptyUnitId.into();
        assert!(matches!(
            err,
            PodwatchError::Validation(ValidationError::EmptyUnitId)
        ));
    }

    #[test]
    fn should_convert_source_error_into_podwatch_error() {
        let err: PodwatchError = SourceError {
            source_name: "virtual",
            message: "unreachable".to_string(),
        }
        .into();
        assert!(matches!(err, PodwatchError::Source(_)));
    }

    #[test]
    fn should_describe_source_failure() {
        let err = SourceError {
            source_name: "virtual",
            message: "timed out".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "telemetry source 'virtual' failed: timed out"
        );
    }
}
