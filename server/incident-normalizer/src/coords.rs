//! Latitude/longitude extraction from several encodings.
//!
//! Order: separate lat/lng fields, then a combined `"lat,lng"` string or
//! `[lat, lng]` pair. Unresolvable coordinates are `NaN`.

use serde_json::Value;

use crate::config::FieldCandidates;
use crate::resolve::{parse_number, to_number, KeyIndex};
use crate::types::Coordinates;

pub fn extract(index: &KeyIndex<'_>, candidates: &FieldCandidates) -> Coordinates {
  let lat = index.resolve(&candidates.latitude).map_or(f64::NAN, to_number);
  let lng = index.resolve(&candidates.longitude).map_or(f64::NAN, to_number);
  let separate = Coordinates { lat, lng };
  if separate.is_finite() {
    return separate;
  }

  match index.resolve(&candidates.lat_lng) {
    Some(Value::String(s)) => {
      let mut parts = s.split(',');
      Coordinates {
        lat: parts.next().map_or(f64::NAN, parse_number),
        lng: parts.next().map_or(f64::NAN, parse_number),
      }
    }
    Some(Value::Array(items)) => Coordinates {
      lat: items.first().map_or(f64::NAN, to_number),
      lng: items.get(1).map_or(f64::NAN, to_number),
    },
    _ => Coordinates::nan(),
  }
}
