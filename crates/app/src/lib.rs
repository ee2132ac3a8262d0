//! # podwatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`TelemetrySource`** port that telemetry adapters implement
//! - Define the **sensor catalogue**: the fixed panel of read-only sensors a
//!   pod exposes, each with a unique id, display name, icon, and attributes
//! - Provide the **`PresentationService`** that pulls one snapshot through
//!   the port and derives the full panel
//!
//! ## Dependency rule
//! Depends on `podwatch-domain` only. Never imports adapter crates —
//! adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod sensors;
pub mod services;
