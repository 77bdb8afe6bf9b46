//! Error types for calendar lookups and reference data loading.

/// Failures raised by the calendar table and everything built on it.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
  /// A month number outside `1..=12`.
  #[error("month out of range: {month} (must be 1..=12)")]
  OutOfRange { month: i64 },

  /// A day number that does not exist in the given month.
  #[error("invalid day: {day} for month {month} (max {max_day})")]
  InvalidDay { month: u8, day: u8, max_day: u8 },

  /// A month table that breaks one of the table invariants.
  #[error("invalid month table: {reason}")]
  InvalidTable { reason: String },

  #[error("could not read month table")]
  Json(#[from] serde_json::Error),
}

/// Failures while reading the bookmarks text.
#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
  #[error("line {line}: reading listed before any [bookmark] header")]
  NoSection { line: usize },

  #[error("line {line}: expected `<Mon> <day>: <reference>`, found {text:?}")]
  Malformed { line: usize, text: String },

  #[error("line {line}: unknown month {name:?}")]
  UnknownMonth { line: usize, name: String },

  #[error("line {line}: {source}")]
  Day {
    line: usize,
    #[source]
    source: CalendarError,
  },

  #[error("line {line}: {bookmark:?} already has a reading for {date}")]
  Duplicate { line: usize, bookmark: String, date: String },

  #[error("bookmark {bookmark:?} has no reading for {date}")]
  Missing { bookmark: String, date: String },
}

/// Failures while loading the daily quote arrays.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
  #[error("{name}: expected {expected} entries, found {found}")]
  Length { name: &'static str, expected: usize, found: usize },

  #[error("{name}: unexpected JSON shape")]
  Json {
    name: &'static str,
    #[source]
    source: serde_json::Error,
  },
}

/// Failures while reading command-line options.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
  #[error("unknown option: {key}")]
  Unknown { key: String },

  #[error("option {key} needs a value")]
  MissingValue { key: String },

  #[error("option {key} does not take a value")]
  UnexpectedValue { key: String },

  #[error("option {key}: {value:?} is not a valid number")]
  InvalidNumber { key: String, value: String },
}
