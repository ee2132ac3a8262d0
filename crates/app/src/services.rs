//! Application services — use-cases orchestrating ports and domain logic.

pub mod presentation;

pub use presentation::PresentationService;
