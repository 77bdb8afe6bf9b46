//! Parser for the bookmarks text: one section per bookmark, one reading per day.
//!
//! ```text
//! # Comment lines start with a hash.
//! [Gospels]
//! Jan 1: Matthew 1
//! Jan 2: Matthew 2-3
//!
//! [Psalms]
//! Jan 1: Psalms 1
//! ```

use std::collections::BTreeMap;

use crate::calendar::CalendarTable;
use crate::calendar::DateRef;
use crate::error::BookmarkError;

/// One reading track.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bookmark {
  pub name: String,
  pub readings: BTreeMap<DateRef, String>,
}

/// Every bookmark, in file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bookmarks {
  pub bookmarks: Vec<Bookmark>,
}

impl Bookmarks {
  pub fn parse(text: &str, table: &CalendarTable) -> Result<Self, BookmarkError> {
    let mut bookmarks: Vec<Bookmark> = Vec::new();
    for (i, raw) in text.lines().enumerate() {
      let line = i + 1;
      let trimmed = raw.trim();
      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }
      if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        bookmarks.push(Bookmark { name: name.trim().to_string(), readings: BTreeMap::new() });
        continue;
      }
      let bookmark = bookmarks.last_mut().ok_or(BookmarkError::NoSection { line })?;
      let malformed = || BookmarkError::Malformed { line, text: trimmed.to_string() };

      let (when, reference) = trimmed.split_once(':').ok_or_else(malformed)?;
      let (month_name, day) = when.trim().split_once(char::is_whitespace).ok_or_else(malformed)?;
      let day: u8 = day.trim().parse().map_err(|_| malformed())?;
      let reference = reference.trim();
      if reference.is_empty() {
        return Err(malformed());
      }
      let month = table
        .find_month(month_name)
        .ok_or_else(|| BookmarkError::UnknownMonth { line, name: month_name.to_string() })?;
      let date = table.date(month, day).map_err(|source| BookmarkError::Day { line, source })?;
      if bookmark.readings.insert(date, reference.to_string()).is_some() {
        return Err(BookmarkError::Duplicate {
          line,
          bookmark: bookmark.name.clone(),
          date: date.to_string(),
        });
      }
    }
    Ok(Self { bookmarks })
  }

  /// The reading of every bookmark for one day, in bookmark order.
  pub fn readings(&self, date: DateRef) -> Result<Vec<&str>, BookmarkError> {
    self
      .bookmarks
      .iter()
      .map(|b| {
        b.readings.get(&date).map(String::as_str).ok_or_else(|| BookmarkError::Missing {
          bookmark: b.name.clone(),
          date: date.to_string(),
        })
      })
      .collect()
  }

  /// Check that every bookmark lists a reading for every day of the table.
  pub fn check_complete(&self, table: &CalendarTable) -> Result<(), BookmarkError> {
    table.year().try_for_each(|date| self.readings(date).map(|_| ()))
  }
}
