//! Structured error types for the normalizer.
//!
//! Malformed record *content* never produces an error; only decoding the
//! payload or loading configuration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
  #[error("config: {reason}")]
  Config { reason: String },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl NormalizeError {
  pub fn config(reason: impl Into<String>) -> Self {
    Self::Config {
      reason: reason.into(),
    }
  }
}
