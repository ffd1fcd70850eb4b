//! Status canonicalization: free-text phrases to canonical labels.

use crate::types::Status;

/// Keyword rules in priority order; first rule with a matching keyword wins.
const RULES: &[(Status, &[&str])] = &[
  (Status::Selesai, &["selesai", "resolved", "done"]),
  (Status::Rencana, &["rencana", "plan"]),
  (Status::SedangBerlangsung, &["sedang", "berlangsung", "ongoing", "on going"]),
];

/// Classify free text into a canonical status, if any rule matches.
pub fn classify(text: &str) -> Option<Status> {
  let lower = text.to_lowercase();
  RULES
    .iter()
    .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
    .map(|(status, _)| *status)
}

/// Canonical label, or the input uppercased when no rule matches.
pub fn normalize_status(text: &str) -> String {
  match classify(text) {
    Some(status) => status.as_str().to_string(),
    None => text.to_uppercase(),
  }
}
