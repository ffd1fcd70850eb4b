//! Fuzzy field resolution over schema-less records.
//!
//! Keys and candidate names are compared in normalized form: lower-cased with
//! everything outside `[a-z0-9]` removed, so `"Event Last"`, `"event_last"`
//! and `"eventLast"` all become `eventlast`.
//!
//! Resolution runs two passes over the ordered candidate list:
//! 1. exact match on the normalized key;
//! 2. normalized key *contains* the normalized candidate.
//!
//! The first usable value wins. Candidate order decides priority; record key
//! order only breaks ties between keys matching the same candidate.

use serde_json::{Map, Value};

/// Lower-case and strip everything outside `[a-z0-9]`.
pub fn normalize_key(key: &str) -> String {
  key
    .chars()
    .flat_map(char::to_lowercase)
    .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    .collect()
}

/// Null and blank / `"null"` / `"undefined"` strings are not usable.
pub fn is_usable(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::String(s) => {
      let t = s.trim();
      !t.is_empty() && !t.eq_ignore_ascii_case("null") && !t.eq_ignore_ascii_case("undefined")
    }
    _ => true,
  }
}

/// A record with its keys normalized once, for repeated lookups.
pub struct KeyIndex<'a> {
  entries: Vec<(String, &'a Value)>,
}

impl<'a> KeyIndex<'a> {
  pub fn new(record: &'a Map<String, Value>) -> Self {
    Self {
      entries: record.iter().map(|(k, v)| (normalize_key(k), v)).collect(),
    }
  }

  /// Index over an arbitrary value; non-objects have no keys.
  pub fn from_value(value: &'a Value) -> Self {
    match value {
      Value::Object(map) => Self::new(map),
      _ => Self {
        entries: Vec::new(),
      },
    }
  }

  pub fn resolve<S: AsRef<str>>(&self, candidates: &[S]) -> Option<&'a Value> {
    let tokens: Vec<String> = candidates
      .iter()
      .map(|c| normalize_key(c.as_ref()))
      .filter(|t| !t.is_empty())
      .collect();

    self
      .first_usable(&tokens, |key, token| key == token)
      .or_else(|| self.first_usable(&tokens, |key, token| key.contains(token)))
  }

  /// Resolve and stringify; `None` when absent or blank after trimming.
  pub fn resolve_string<S: AsRef<str>>(&self, candidates: &[S]) -> Option<String> {
    self
      .resolve(candidates)
      .map(value_to_string)
      .filter(|s| !s.is_empty())
  }

  fn first_usable(&self, tokens: &[String], matches: impl Fn(&str, &str) -> bool) -> Option<&'a Value> {
    tokens.iter().find_map(|token| {
      self
        .entries
        .iter()
        .filter(|(key, _)| matches(key.as_str(), token.as_str()))
        .map(|(_, v)| *v)
        .find(|v| is_usable(v))
    })
  }
}

/// One-shot resolution; prefer [`KeyIndex`] for several lookups on one record.
pub fn resolve<'a, S: AsRef<str>>(record: &'a Map<String, Value>, candidates: &[S]) -> Option<&'a Value> {
  KeyIndex::new(record).resolve(candidates)
}

/// Render a value as display text (trimmed). Sequences join with `,`.
pub fn value_to_string(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => match (n.as_i64(), n.as_u64()) {
      (Some(i), _) => i.to_string(),
      (_, Some(u)) => u.to_string(),
      _ => format_number(n.as_f64().unwrap_or(f64::NAN)),
    },
    Value::String(s) => s.trim().to_string(),
    Value::Array(items) => items.iter().map(value_to_string).collect::<Vec<_>>().join(","),
    Value::Object(_) => value.to_string(),
  }
}

/// Strict numeric coercion: numbers as-is, strings only when the whole
/// trimmed text is a finite number. Everything else is `NaN`.
pub fn to_number(value: &Value) -> f64 {
  match value {
    Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
    Value::String(s) => parse_number(s),
    _ => f64::NAN,
  }
}

pub fn parse_number(s: &str) -> f64 {
  s.trim()
    .parse::<f64>()
    .ok()
    .filter(|n| n.is_finite())
    .unwrap_or(f64::NAN)
}

/// Shortest round-trip rendering; integral values print without a fraction.
pub fn format_number(n: f64) -> String {
  if n.is_nan() {
    "NaN".to_string()
  } else if n == f64::INFINITY {
    "Infinity".to_string()
  } else if n == f64::NEG_INFINITY {
    "-Infinity".to_string()
  } else {
    n.to_string()
  }
}
