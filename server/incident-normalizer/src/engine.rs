//! Normalizer facade: holds configuration, turns payloads into IncidentSets.

use std::io::Read;

use serde_json::Value;

use crate::collection::IncidentSet;
use crate::config::Config;
use crate::error::NormalizeError;
use crate::transform;
use crate::types::Incident;

/// Stateless between calls; each build owns its working set.
pub struct Normalizer {
  config: Config,
}

impl Normalizer {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Canonicalize a single raw record (no coordinate filtering).
  pub fn transform(&self, record: &Value) -> Incident {
    transform::transform(record, &self.config.candidates)
  }

  /// Build the set from an already-decoded payload. Never fails.
  pub fn build(&self, payload: &Value) -> IncidentSet {
    IncidentSet::build(payload, &self.config.candidates)
  }

  /// Decode JSON text, then build. Blank input is an empty payload.
  pub fn build_from_str(&self, raw: &str) -> Result<IncidentSet, NormalizeError> {
    if raw.trim().is_empty() {
      return Ok(IncidentSet::default());
    }
    let payload: Value = serde_json::from_str(raw)?;
    Ok(self.build(&payload))
  }

  pub fn build_from_reader(&self, mut reader: impl Read) -> Result<IncidentSet, NormalizeError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    self.build_from_str(&raw)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::FieldCandidates;
  use serde_json::json;

  #[test]
  fn blank_text_is_an_empty_set() {
    let n = Normalizer::with_defaults();
    assert!(n.build_from_str("").unwrap().is_empty());
    assert!(n.build_from_str("  \n").unwrap().is_empty());
  }

  #[test]
  fn malformed_json_is_an_error() {
    let err = Normalizer::with_defaults().build_from_str("{not json").unwrap_err();
    assert!(matches!(err, NormalizeError::Json(_)));
  }

  #[test]
  fn reader_and_value_paths_agree() {
    let n = Normalizer::with_defaults();
    let text = r#"[{"lat": 1, "lng": 2, "provinsi": "Aceh"}]"#;
    let from_reader = n.build_from_reader(text.as_bytes()).unwrap();
    let payload: Value = serde_json::from_str(text).unwrap();
    assert_eq!(from_reader, n.build(&payload));
  }

  #[test]
  fn custom_candidates_are_used() {
    let config = Config {
      candidates: FieldCandidates {
        province: vec!["wilayah".into()],
        ..FieldCandidates::default()
      },
      ..Config::default()
    };
    let incident = Normalizer::new(config).transform(&json!({"Wilayah": "NTB", "provinsi": "x"}));
    assert_eq!(incident.province, "NTB");
  }

  #[test]
  fn repeated_builds_are_identical() {
    let n = Normalizer::with_defaults();
    let payload = json!({"data": [{"provinsi": "Bali", "latlng": [1, 2]}]});
    let a = n.build(&payload);
    let b = n.build(&payload);
    assert_eq!(a, b);
    assert_eq!(a.digest(), b.digest());
  }
}
