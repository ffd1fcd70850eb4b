//! Normalizer configuration with sane defaults.
//!
//! [`FieldCandidates`] holds the ordered candidate lists used to resolve each
//! canonical field. The defaults cover every naming convention seen in the
//! upstream exports, including the paired `_last` / `_continue` schema. A JSON
//! override file only needs the lists it changes.

use std::path::Path;

use serde::Deserialize;

use crate::error::NormalizeError;
use crate::resolve::normalize_key;

/// Environment variable naming the upstream payload URL.
pub const SOURCE_URL_ENV: &str = "INCIDENT_SOURCE_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
  /// Ordered candidate key lists per canonical field.
  pub candidates: FieldCandidates,
  /// Where the caller fetches the raw payload from. Never used by the core.
  pub source_url: Option<String>,
}

impl Config {
  pub fn from_env() -> Self {
    Self {
      candidates: FieldCandidates::default(),
      source_url: std::env::var(SOURCE_URL_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty()),
    }
  }

  /// Replace the candidate lists with those in a JSON file (missing lists keep defaults).
  pub fn with_candidates_file(mut self, path: impl AsRef<Path>) -> Result<Self, NormalizeError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    self.candidates = FieldCandidates::from_json(&raw)?;
    Ok(self)
  }
}

/// Ordered candidate names per field. Earlier names win.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldCandidates {
  pub latitude: Vec<String>,
  pub longitude: Vec<String>,
  /// Combined "lat,lng" string or `[lat, lng]` pair.
  pub lat_lng: Vec<String>,
  pub province: Vec<String>,
  pub city: Vec<String>,
  pub kind: Vec<String>,
  pub status: Vec<String>,
  pub date: Vec<String>,
  pub updated_at: Vec<String>,
  pub description: Vec<String>,
  pub facility_type: Vec<String>,
  pub facility_detail: Vec<String>,
  pub url: Vec<String>,
  pub id: Vec<String>,
}

fn list(names: &[&str]) -> Vec<String> {
  names.iter().map(|s| s.to_string()).collect()
}

impl Default for FieldCandidates {
  fn default() -> Self {
    Self {
      latitude: list(&["lat", "latitude", "lintang"]),
      longitude: list(&["lng", "lon", "long", "longitude", "bujur"]),
      lat_lng: list(&["latlon", "lat_long", "latlng"]),
      province: list(&["provinsi", "province", "prov"]),
      city: list(&["kabkot", "kota", "kabupaten", "kab/kota", "kota/kabupaten", "city"]),
      kind: list(&[
        "event_last",
        "event_continue",
        "event",
        "jenis kejadian",
        "jenis",
        "type",
        "kejadian",
        "insiden",
        "peristiwa",
        "aksi",
      ]),
      status: list(&["status_last", "status_continue", "status", "keterangan_status", "state"]),
      date: list(&["tanggal", "date", "waktu", "created_at"]),
      updated_at: list(&["last_updated", "update terakhir", "updated_at", "update"]),
      description: list(&["keterangan", "deskripsi"]),
      facility_type: list(&[
        "fasum_terdampak_last",
        "fasum_terdampak_continue",
        "fasilitas terdampak",
        "fasum_terdampak",
      ]),
      facility_detail: list(&["fasum_detail_last", "fasum_detail_continue", "fasum_detail"]),
      url: list(&["link_article_last", "link_article_continue", "article_url", "url", "link"]),
      id: list(&["id", "kode", "articleId_last", "articleId_continue"]),
    }
  }
}

impl FieldCandidates {
  /// Parse overrides from JSON and reject names that normalize to nothing.
  pub fn from_json(raw: &str) -> Result<Self, NormalizeError> {
    let candidates: Self = serde_json::from_str(raw)?;
    candidates.validate()?;
    Ok(candidates)
  }

  /// A name with no `[a-z0-9]` content would "contain"-match every key.
  pub fn validate(&self) -> Result<(), NormalizeError> {
    for (field, names) in self.lists() {
      if let Some(bad) = names.iter().find(|n| normalize_key(n).is_empty()) {
        return Err(NormalizeError::config(format!(
          "{}: candidate {:?} has no alphanumeric characters",
          field, bad
        )));
      }
    }
    Ok(())
  }

  fn lists(&self) -> [(&'static str, &[String]); 14] {
    [
      ("latitude", self.latitude.as_slice()),
      ("longitude", self.longitude.as_slice()),
      ("lat_lng", self.lat_lng.as_slice()),
      ("province", self.province.as_slice()),
      ("city", self.city.as_slice()),
      ("kind", self.kind.as_slice()),
      ("status", self.status.as_slice()),
      ("date", self.date.as_slice()),
      ("updated_at", self.updated_at.as_slice()),
      ("description", self.description.as_slice()),
      ("facility_type", self.facility_type.as_slice()),
      ("facility_detail", self.facility_detail.as_slice()),
      ("url", self.url.as_slice()),
      ("id", self.id.as_slice()),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_valid() {
    assert!(FieldCandidates::default().validate().is_ok());
  }

  #[test]
  fn partial_override_keeps_other_defaults() {
    let c = FieldCandidates::from_json(r#"{"province": ["wilayah"]}"#).unwrap();
    assert_eq!(c.province, vec!["wilayah".to_string()]);
    assert_eq!(c.city, FieldCandidates::default().city);
  }

  #[test]
  fn punctuation_only_candidate_is_rejected() {
    let err = FieldCandidates::from_json(r#"{"city": ["kota", "--"]}"#).unwrap_err();
    assert!(err.to_string().contains("city"));
  }

  #[test]
  fn unknown_list_type_is_a_json_error() {
    let err = FieldCandidates::from_json(r#"{"city": "kota"}"#).unwrap_err();
    assert!(matches!(err, NormalizeError::Json(_)));
  }
}
