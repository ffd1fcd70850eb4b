//! Core types for the normalizer (JSON contracts + canonical models).

use serde::{Deserialize, Serialize};

/// Fallback title when a record carries no province.
pub const UNKNOWN_LOCATION: &str = "Lokasi tidak diketahui";

// ---------------------------------------------------------------------------
// Canonical incident
// ---------------------------------------------------------------------------

/// Canonical record every raw variant converges to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
  pub id: String,
  pub title: String,
  pub province: String,
  pub city: String,
  /// Free-text incident kind ("type" on the wire).
  #[serde(rename = "type")]
  pub kind: String,
  pub status: String,
  /// `""` or `YYYY-MM-DD`.
  pub date: String,
  #[serde(default)]
  pub updated_at: String,
  pub lat: f64,
  pub lng: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default)]
  pub description: String,
}

impl Incident {
  pub fn coordinates(&self) -> Coordinates {
    Coordinates {
      lat: self.lat,
      lng: self.lng,
    }
  }
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
  pub lat: f64,
  pub lng: f64,
}

impl Coordinates {
  pub fn nan() -> Self {
    Self {
      lat: f64::NAN,
      lng: f64::NAN,
    }
  }

  pub fn is_finite(&self) -> bool {
    self.lat.is_finite() && self.lng.is_finite()
  }
}

// ---------------------------------------------------------------------------
// Canonical status labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
  Selesai,
  Rencana,
  SedangBerlangsung,
}

impl Status {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Selesai => "SELESAI",
      Self::Rencana => "RENCANA",
      Self::SedangBerlangsung => "SEDANG BERLANGSUNG",
    }
  }

  /// Exact match against a stored (already canonical) label.
  pub fn from_label(label: &str) -> Option<Self> {
    match label {
      "SELESAI" => Some(Self::Selesai),
      "RENCANA" => Some(Self::Rencana),
      "SEDANG BERLANGSUNG" => Some(Self::SedangBerlangsung),
      _ => None,
    }
  }
}

impl std::fmt::Display for Status {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
  pub total: usize,
  pub berlangsung: usize,
  pub selesai: usize,
  pub rencana: usize,
}

/// Everything a dashboard needs from one build, in one JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
  pub incidents: Vec<Incident>,
  pub unique_types: Vec<String>,
  pub unique_statuses: Vec<String>,
  pub status_counts: StatusCounts,
  pub digest: String,
  /// Per-incident fingerprints, parallel to `incidents`.
  pub fingerprints: Vec<String>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for payloads that could not be read or decoded.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
