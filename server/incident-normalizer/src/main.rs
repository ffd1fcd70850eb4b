//! Binary entrypoint: read one JSON payload, write one Report JSON object.
//!
//! Usage:
//!   incident-normalizer [payload.json] [--candidates overrides.json]
//!
//! Without a payload path the payload is read from stdin. On failure a
//! structured ErrorOutput is written to stdout and the exit code is 1.
//! Logs go to stderr; set RUST_LOG to adjust verbosity.

use std::fs::File;
use std::io::{self, BufReader, Write};

use incident_normalizer::types::ErrorOutput;
use incident_normalizer::{Config, NormalizeError, Normalizer};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Args {
  payload: Option<String>,
  candidates: Option<String>,
}

fn parse_args() -> Result<Args, NormalizeError> {
  let mut args = Args {
    payload: None,
    candidates: None,
  };
  let mut it = std::env::args().skip(1);
  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--candidates" => {
        let path = it
          .next()
          .ok_or_else(|| NormalizeError::config("--candidates requires a file path"))?;
        args.candidates = Some(path);
      }
      flag if flag.starts_with("--") => {
        return Err(NormalizeError::config(format!("unknown flag {}", flag)));
      }
      path if args.payload.is_none() => args.payload = Some(path.to_string()),
      extra => return Err(NormalizeError::config(format!("unexpected argument {}", extra))),
    }
  }
  Ok(args)
}

fn run() -> Result<(), NormalizeError> {
  let args = parse_args()?;

  let mut config = Config::from_env();
  if let Some(path) = &args.candidates {
    config = config.with_candidates_file(path)?;
  }
  if let Some(url) = &config.source_url {
    info!(source_url = %url, "payload source");
  }

  let normalizer = Normalizer::new(config);
  let set = match &args.payload {
    Some(path) => normalizer.build_from_reader(BufReader::new(File::open(path)?))?,
    None => normalizer.build_from_reader(io::stdin().lock())?,
  };

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  serde_json::to_writer(&mut out, &set.into_report())?;
  writeln!(out)?;
  out.flush()?;
  Ok(())
}

fn main() {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  if let Err(e) = run() {
    let err = ErrorOutput::new(e.to_string());
    let _ = serde_json::to_writer(io::stdout(), &err);
    let _ = writeln!(io::stdout());
    std::process::exit(1);
  }
}
