//! Date normalization for free-form export dates.
//!
//! Recognized forms:
//! - `YYYY-MM-DD` / `YYYY/MM/DD` (1–2 digit month and day)
//! - `D[D] <month> YYYY`, month as a number or an Indonesian month name
//! - datetimes `YYYY-MM-DD[ T]HH:MM[:SS]` and standard timestamps (datetime only)
//!
//! Anything else normalizes to `""`; a bad date never fails a batch.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;

static YMD_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$").expect("valid regex"));
static DMY_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(\d{1,2})\s+([A-Za-z.]+|\d{1,2})\s+(\d{4})").expect("valid regex")
});
static DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[ T](\d{2}):(\d{2})(?::(\d{2}))?$").expect("valid regex")
});

/// Indonesian month name (full or abbreviated, periods ignored) to 1..=12.
pub fn month_from_name(name: &str) -> Option<u32> {
  let key: String = name.chars().filter(|c| *c != '.').collect::<String>().to_lowercase();
  let month = match key.as_str() {
    "januari" | "jan" => 1,
    "februari" | "febuari" | "feb" | "peb" => 2,
    "maret" | "mar" => 3,
    "april" | "apr" => 4,
    "mei" => 5,
    "juni" | "jun" => 6,
    "juli" | "jul" => 7,
    "agustus" | "agu" | "agt" | "ags" | "agus" => 8,
    "september" | "sep" | "sept" => 9,
    "oktober" | "okt" => 10,
    "november" | "nov" | "nop" => 11,
    "desember" | "des" => 12,
    _ => return None,
  };
  Some(month)
}

/// Zero-padded `YYYY-MM-DD`. Parts are not checked against the calendar.
fn format_ymd(year: &str, month: &str, day: &str) -> String {
  format!("{}-{:0>2}-{:0>2}", year, month, day)
}

/// Normalize a date to `YYYY-MM-DD`, or `""` when unrecognized.
pub fn parse_date(raw: &str) -> String {
  let raw = raw.trim();
  if raw.is_empty() {
    return String::new();
  }

  if let Some(caps) = YMD_RE.captures(raw) {
    return format_ymd(&caps[1], &caps[2], &caps[3]);
  }

  if let Some(caps) = DMY_RE.captures(raw) {
    let month_part = &caps[2];
    let month = month_from_name(month_part).or_else(|| {
      month_part
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
    });
    if let Some(month) = month {
      return format_ymd(&caps[3], &month.to_string(), &caps[1]);
    }
  }

  String::new()
}

/// True when `raw` is a timestamp in a standard interchange format.
fn is_standard_timestamp(raw: &str) -> bool {
  DateTime::parse_from_rfc3339(raw).is_ok()
    || DateTime::parse_from_rfc2822(raw).is_ok()
    || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
    || NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").is_ok()
}

/// Normalize a datetime to `YYYY-MM-DD HH:MM[:SS]`; standard timestamps pass
/// through unchanged; otherwise falls back to [`parse_date`].
pub fn parse_datetime(raw: &str) -> String {
  let raw = raw.trim();
  if raw.is_empty() {
    return String::new();
  }

  if let Some(caps) = DATETIME_RE.captures(raw) {
    let mut out = format!("{}-{}-{} {}:{}", &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]);
    if let Some(s) = caps.get(6) {
      out.push(':');
      out.push_str(s.as_str());
    }
    return out;
  }

  if is_standard_timestamp(raw) {
    return raw.to_string();
  }

  parse_date(raw)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn iso_like_dates_are_zero_padded() {
    assert_eq!(parse_date("2024-3-5"), "2024-03-05");
    assert_eq!(parse_date("2024/12/01"), "2024-12-01");
    assert_eq!(parse_date(" 2024-03-05 "), "2024-03-05");
  }

  #[test]
  fn indonesian_month_names() {
    assert_eq!(parse_date("5 Maret 2024"), "2024-03-05");
    assert_eq!(parse_date("12 Januari 2023"), "2023-01-12");
    assert_eq!(parse_date("1 febuari 2022"), "2022-02-01");
    assert_eq!(parse_date("1 Februari 2022"), "2022-02-01");
    assert_eq!(parse_date("17 AGUSTUS 1945"), "1945-08-17");
    assert_eq!(parse_date("3 Des. 2021"), "2021-12-03");
    assert_eq!(parse_date("3 okt 2021"), "2021-10-03");
  }

  #[test]
  fn numeric_month_with_spaces() {
    assert_eq!(parse_date("5 3 2024"), "2024-03-05");
    assert_eq!(parse_date("5 13 2024"), "");
  }

  #[test]
  fn trailing_time_after_year_is_ignored() {
    assert_eq!(parse_date("12 Januari 2023 10:00"), "2023-01-12");
  }

  #[test]
  fn unrecognized_dates_are_empty() {
    assert_eq!(parse_date("garbage"), "");
    assert_eq!(parse_date(""), "");
    assert_eq!(parse_date("5 Smarch 2024"), "");
    assert_eq!(parse_date("March 5, 2024"), "");
  }

  #[test]
  fn out_of_range_parts_are_padded_not_dropped() {
    assert_eq!(parse_date("2024-13-01"), "2024-13-01");
    assert_eq!(parse_date("2024-2-30"), "2024-02-30");
    assert_eq!(parse_date("31 Februari 2024"), "2024-02-31");
    assert_eq!(parse_datetime("2024-03-05 25:00"), "2024-03-05 25:00");
    assert_eq!(parse_datetime("2024-02-30T10:61:00"), "2024-02-30 10:61:00");
  }

  #[test]
  fn parse_date_is_idempotent() {
    for input in ["2024-3-5", "5 Maret 2024", "2024/1/31", "9 9 1999", "2024-13-1"] {
      let once = parse_date(input);
      assert!(!once.is_empty(), "{input}");
      assert_eq!(parse_date(&once), once);
    }
  }

  #[test]
  fn datetime_forms() {
    assert_eq!(parse_datetime("2024-03-05 10:20"), "2024-03-05 10:20");
    assert_eq!(parse_datetime("2024-03-05T10:20:30"), "2024-03-05 10:20:30");
    assert_eq!(parse_datetime("2024-03-05T10:20:30Z"), "2024-03-05T10:20:30Z");
    assert_eq!(
      parse_datetime("Tue, 5 Mar 2024 10:20:30 +0700"),
      "Tue, 5 Mar 2024 10:20:30 +0700"
    );
    assert_eq!(parse_datetime("2024-03-05T10:20:30.250"), "2024-03-05T10:20:30.250");
  }

  #[test]
  fn datetime_falls_back_to_date() {
    assert_eq!(parse_datetime("5 Maret 2024"), "2024-03-05");
    assert_eq!(parse_datetime("2024-3-5"), "2024-03-05");
    assert_eq!(parse_datetime("nope"), "");
  }
}
