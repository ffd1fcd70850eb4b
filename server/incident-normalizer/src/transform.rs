//! Build one canonical Incident from one raw record.
//!
//! Never fails: every field miss degrades to `""` or `NaN`. Records whose
//! coordinates stay non-finite are dropped later by the collection.

use serde_json::Value;

use crate::config::FieldCandidates;
use crate::coords;
use crate::date::{parse_date, parse_datetime};
use crate::resolve::{format_number, value_to_string, KeyIndex};
use crate::status::normalize_status;
use crate::types::{Incident, UNKNOWN_LOCATION};

pub fn transform(record: &Value, candidates: &FieldCandidates) -> Incident {
  let index = KeyIndex::from_value(record);
  let text = |names: &[String]| index.resolve_string(names).unwrap_or_default();

  let coords = coords::extract(&index, candidates);

  let province = text(&candidates.province);
  let city = text(&candidates.city);
  let kind = text(&candidates.kind);
  let status = normalize_status(&text(&candidates.status));
  let date = parse_date(&text(&candidates.date));
  let updated_at = parse_datetime(&text(&candidates.updated_at));

  let description = index.resolve_string(&candidates.description).unwrap_or_else(|| {
    let facility = index.resolve_string(&candidates.facility_type);
    let detail = index.resolve_string(&candidates.facility_detail);
    match (facility, detail) {
      (Some(f), Some(d)) => format!("{}: {}", f, d),
      (Some(one), None) | (None, Some(one)) => one,
      (None, None) => String::new(),
    }
  });

  let url = match index.resolve(&candidates.url) {
    Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
    _ => None,
  };

  // The unknown-location text stands in for the province only.
  let place = if province.is_empty() { UNKNOWN_LOCATION } else { province.as_str() };
  let title = if city.is_empty() {
    place.to_string()
  } else {
    format!("{}, {}", place, city)
  };

  // Natural id when present; otherwise synthesized from the content so
  // re-fetching the same record yields the same id.
  let id = index
    .resolve(&candidates.id)
    .map(value_to_string)
    .filter(|s| !s.is_empty())
    .unwrap_or_else(|| {
      format!(
        "{}-{}-{}-{}-{}-{}",
        province,
        city,
        kind,
        date,
        format_number(coords.lat),
        format_number(coords.lng)
      )
    });

  Incident {
    id,
    title,
    province,
    city,
    kind,
    status,
    date,
    updated_at,
    lat: coords.lat,
    lng: coords.lng,
    url,
    description,
  }
}
