//! IncidentSet: the validated result of one batch, plus derived views.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::FieldCandidates;
use crate::digest;
use crate::transform::transform;
use crate::types::{Incident, Report, Status, StatusCounts};

/// Top-level payload shape the records were found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
  /// `[record, ...]`
  Array,
  /// `{"data": [record, ...]}`
  Data,
  /// `{"a": [record, ...], "b": [record, ...]}`, flattened one level.
  Grouped,
  /// Scalars, null: no records.
  Unrecognized,
}

/// Locate the raw records inside a payload.
pub fn unwrap_envelope(payload: &Value) -> (Envelope, Vec<&Value>) {
  match payload {
    Value::Array(rows) => (Envelope::Array, rows.iter().collect()),
    Value::Object(map) => match map.get("data") {
      Some(Value::Array(rows)) => (Envelope::Data, rows.iter().collect()),
      _ => {
        let rows = map
          .values()
          .filter_map(Value::as_array)
          .flatten()
          .collect();
        (Envelope::Grouped, rows)
      }
    },
    _ => (Envelope::Unrecognized, Vec::new()),
  }
}

/// Ordered, immutable set of incidents with finite coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentSet {
  incidents: Vec<Incident>,
}

impl IncidentSet {
  /// Transform every record in the payload and keep the placeable ones.
  pub fn build(payload: &Value, candidates: &FieldCandidates) -> Self {
    let (envelope, rows) = unwrap_envelope(payload);
    let received = rows.len();

    let incidents: Vec<Incident> = rows
      .into_iter()
      .map(|row| transform(row, candidates))
      .filter(|incident| {
        let keep = incident.coordinates().is_finite();
        if !keep {
          debug!(id = %incident.id, "dropping record without finite coordinates");
        }
        keep
      })
      .collect();

    info!(
      ?envelope,
      received,
      kept = incidents.len(),
      dropped = received - incidents.len(),
      "built incident set"
    );
    Self { incidents }
  }

  pub fn incidents(&self) -> &[Incident] {
    &self.incidents
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Incident> {
    self.incidents.iter()
  }

  pub fn len(&self) -> usize {
    self.incidents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.incidents.is_empty()
  }

  /// Distinct non-empty incident types, sorted.
  pub fn unique_types(&self) -> Vec<String> {
    distinct_sorted(self.incidents.iter().map(|i| i.kind.as_str()))
  }

  /// Distinct non-empty status labels, sorted.
  pub fn unique_statuses(&self) -> Vec<String> {
    distinct_sorted(self.incidents.iter().map(|i| i.status.as_str()))
  }

  /// Counts per canonical status. Stored statuses are already canonical, so
  /// they are matched exactly rather than reclassified.
  pub fn status_counts(&self) -> StatusCounts {
    let mut counts = StatusCounts {
      total: self.incidents.len(),
      ..StatusCounts::default()
    };
    for incident in &self.incidents {
      match Status::from_label(&incident.status) {
        Some(Status::SedangBerlangsung) => counts.berlangsung += 1,
        Some(Status::Selesai) => counts.selesai += 1,
        Some(Status::Rencana) => counts.rencana += 1,
        None => {}
      }
    }
    counts
  }

  /// Incidents whose type equals `kind` (trimmed comparison).
  pub fn by_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Incident> + 'a {
    let kind = kind.trim();
    self.incidents.iter().filter(move |i| i.kind == kind)
  }

  /// Incidents whose stored status equals `status`.
  pub fn by_status<'a>(&'a self, status: &'a str) -> impl Iterator<Item = &'a Incident> + 'a {
    let status = status.trim();
    self.incidents.iter().filter(move |i| i.status == status)
  }

  /// Stable content digest of the whole set; see [`digest::set_digest`].
  pub fn digest(&self) -> String {
    digest::set_digest(&self.incidents)
  }

  /// Bundle the set and all derived views.
  pub fn into_report(self) -> Report {
    Report {
      unique_types: self.unique_types(),
      unique_statuses: self.unique_statuses(),
      status_counts: self.status_counts(),
      digest: self.digest(),
      fingerprints: self.incidents.iter().map(digest::fingerprint).collect(),
      incidents: self.incidents,
    }
  }
}

impl<'a> IntoIterator for &'a IncidentSet {
  type Item = &'a Incident;
  type IntoIter = std::slice::Iter<'a, Incident>;

  fn into_iter(self) -> Self::IntoIter {
    self.incidents.iter()
  }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  values
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .collect::<BTreeSet<_>>()
    .into_iter()
    .map(str::to_string)
    .collect()
}
