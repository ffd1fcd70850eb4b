//! Stable content digests for incidents and incident sets.
//!
//! A polling caller compares the digest of a fresh build with the previous
//! one to tell whether the upstream data changed. Uses blake3 for a fast,
//! deterministic hash. Not used for deduplication.

use crate::resolve::format_number;
use crate::types::Incident;

fn field_hasher(incident: &Incident) -> blake3::Hasher {
  let mut hasher = blake3::Hasher::new();
  let url = incident.url.as_deref().unwrap_or("");
  let lat = format_number(incident.lat);
  let lng = format_number(incident.lng);
  let fields = [
    incident.id.as_str(),
    incident.title.as_str(),
    incident.province.as_str(),
    incident.city.as_str(),
    incident.kind.as_str(),
    incident.status.as_str(),
    incident.date.as_str(),
    incident.updated_at.as_str(),
    lat.as_str(),
    lng.as_str(),
    url,
    incident.description.as_str(),
  ];
  for field in fields {
    // Length prefix keeps ("ab", "c") distinct from ("a", "bc").
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
  }
  hasher
}

/// 32-hex-char fingerprint of every field of one incident.
pub fn fingerprint(incident: &Incident) -> String {
  let hex = field_hasher(incident).finalize().to_hex();
  hex[..32].to_string()
}

/// Order-sensitive digest over all incidents, prefixed `set-`.
pub fn set_digest(incidents: &[Incident]) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(&(incidents.len() as u64).to_le_bytes());
  for incident in incidents {
    hasher.update(field_hasher(incident).finalize().as_bytes());
  }
  let hex = hasher.finalize().to_hex();
  format!("set-{}", &hex[..32])
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make(id: &str, status: &str) -> Incident {
    Incident {
      id: id.into(),
      title: "Aceh".into(),
      province: "Aceh".into(),
      city: String::new(),
      kind: "Banjir".into(),
      status: status.into(),
      date: "2024-01-01".into(),
      updated_at: String::new(),
      lat: 1.0,
      lng: 2.0,
      url: None,
      description: String::new(),
    }
  }

  #[test]
  fn same_input_same_fingerprint() {
    assert_eq!(fingerprint(&make("a", "SELESAI")), fingerprint(&make("a", "SELESAI")));
  }

  #[test]
  fn any_field_change_changes_fingerprint() {
    assert_ne!(fingerprint(&make("a", "SELESAI")), fingerprint(&make("a", "RENCANA")));
    let mut moved = make("a", "SELESAI");
    moved.lng = 2.5;
    assert_ne!(fingerprint(&make("a", "SELESAI")), fingerprint(&moved));
  }

  #[test]
  fn fingerprint_is_32_hex_chars() {
    let fp = fingerprint(&make("a", "SELESAI"));
    assert_eq!(fp.len(), 32);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
  }

  #[test]
  fn set_digest_is_order_sensitive_and_stable() {
    let a = make("a", "SELESAI");
    let b = make("b", "SELESAI");
    let ab = set_digest(&[a.clone(), b.clone()]);
    assert_eq!(ab, set_digest(&[a.clone(), b.clone()]));
    assert_ne!(ab, set_digest(&[b, a]));
    assert!(ab.starts_with("set-"));
  }

  #[test]
  fn empty_set_has_a_digest() {
    assert_eq!(set_digest(&[]).len(), "set-".len() + 32);
  }
}
