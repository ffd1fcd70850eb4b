//! Incident normalizer — deterministic schema reconciliation for incident exports.
//!
//! Takes a loosely-structured JSON payload (arbitrary key naming, mixed date
//! formats, free-text statuses, several coordinate encodings) and produces an
//! [`IncidentSet`] of canonical [`Incident`] records plus derived views.
//!
//! No network, no I/O in the library besides optional reader decoding.

pub mod collection;
pub mod config;
pub mod coords;
pub mod date;
pub mod digest;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod status;
pub mod transform;
pub mod types;

pub use collection::IncidentSet;
pub use config::{Config, FieldCandidates};
pub use engine::Normalizer;
pub use error::NormalizeError;
pub use types::{Coordinates, Incident, Report, Status, StatusCounts};
