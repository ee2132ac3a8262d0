//! # podwatch-domain
//!
//! Pure domain model for the podwatch charge-point telemetry system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **`TelemetrySnapshot`** (one immutable read of pod/account state)
//! - Define the **`ChargeStatus`** enumeration and the **`ChargeOverride`** record
//! - Derive presentation values from raw telemetry:
//!   - duration formatting (`H:MM:SS` and human phrases)
//!   - monetary formatting (minor units → major units + display string)
//!   - icon and image resolution (by model family and status thresholds)
//!   - attribute-map assembly for auxiliary display
//!
//! Every operation here is a total, synchronous, side-effect-free function of
//! its inputs. Nothing is cached between calls.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod attribute;
pub mod charge_override;
pub mod duration;
pub mod icon;
pub mod model;
pub mod money;
pub mod snapshot;
pub mod status;

/// Integration identifier stamped into attribute maps and unique ids.
pub const INTEGRATION_ID: &str = "podwatch";

/// Attribution line included in every composite attribute map.
pub const ATTRIBUTION: &str = "Data provided by https://podwatch.energy/";
