//! The fixed month table every page is laid out against.
//!
//! The table always describes a 365-day year: February has 28 days no matter which year is being
//! generated. Leap years only influence where weekdays fall, see [`crate::YearContext`].

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::CalendarError;
use crate::iter::DayIter;

/// Number of day slots in the table.
pub const DAYS_IN_TABLE: u16 = 365;

/// One calendar day slot, independent of year.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct DateRef {
  month: u8,
  day: u8,
}

impl DateRef {
  /// Only for values already known to be valid against the table.
  pub(crate) const fn new_unchecked(month: u8, day: u8) -> Self {
    Self { month, day }
  }

  /// Returns the month number, starting from 1.
  #[inline]
  pub const fn month(&self) -> u8 {
    self.month
  }

  /// Returns the day of the month, starting from 1.
  #[inline]
  pub const fn day(&self) -> u8 {
    self.day
  }
}

impl fmt::Debug for DateRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}-{:02}", self.month, self.day)
  }
}

impl fmt::Display for DateRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

/// Name and length of a single month.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MonthInfo {
  pub number: u8,
  pub name: String,
  pub short_name: String,
  pub days: u8,
}

/// Immutable month reference data: names, abbreviations and expected lengths.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarTable {
  months: Vec<MonthInfo>,
}

/// On-disk form of the table (`months.json`).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MonthsFile {
  month_names: Vec<String>,
  short_month_names: Vec<String>,
  expected_month_length: Vec<u8>,
}

macro_rules! standard_months {
  ($($num:literal => $short:ident ~ $long:ident ~ $days:literal)*) => {
    vec![$(MonthInfo {
      number: $num,
      name: stringify!($long).to_string(),
      short_name: stringify!($short).to_string(),
      days: $days,
    },)*]
  }
}

impl CalendarTable {
  /// The English month table.
  pub fn standard() -> Self {
    Self {
      months: standard_months! {
         1 => Jan ~ January   ~ 31
         2 => Feb ~ February  ~ 28
         3 => Mar ~ March     ~ 31
         4 => Apr ~ April     ~ 30
         5 => May ~ May       ~ 31
         6 => Jun ~ June      ~ 30
         7 => Jul ~ July      ~ 31
         8 => Aug ~ August    ~ 31
         9 => Sep ~ September ~ 30
        10 => Oct ~ October   ~ 31
        11 => Nov ~ November  ~ 30
        12 => Dec ~ December  ~ 31
      },
    }
  }

  /// Load a table from its JSON form, checking that it still describes a 365-day year.
  pub fn from_json(json: &str) -> Result<Self, CalendarError> {
    let file: MonthsFile = serde_json::from_str(json)?;
    for (field, len) in [
      ("monthNames", file.month_names.len()),
      ("shortMonthNames", file.short_month_names.len()),
      ("expectedMonthLength", file.expected_month_length.len()),
    ] {
      if len != 12 {
        return Err(CalendarError::InvalidTable { reason: format!("{field} has {len} entries") });
      }
    }
    let months: Vec<MonthInfo> = (1..=12)
      .zip(file.month_names)
      .zip(file.short_month_names)
      .zip(file.expected_month_length)
      .map(|(((number, name), short_name), days)| MonthInfo { number, name, short_name, days })
      .collect();
    if let Some(m) = months.iter().find(|m| !(28..=31).contains(&m.days)) {
      return Err(CalendarError::InvalidTable {
        reason: format!("{} has {} days", m.name, m.days),
      });
    }
    let total: u16 = months.iter().map(|m| m.days as u16).sum();
    if total != DAYS_IN_TABLE {
      return Err(CalendarError::InvalidTable { reason: format!("months add up to {total} days") });
    }
    Ok(Self { months })
  }

  /// Look up a month by number.
  pub fn month(&self, month: u8) -> Result<&MonthInfo, CalendarError> {
    match month {
      1..=12 => Ok(&self.months[month as usize - 1]),
      _ => Err(CalendarError::OutOfRange { month: month.into() }),
    }
  }

  /// Month lookup for values already validated by a `DateRef`.
  pub(crate) fn info(&self, month: u8) -> &MonthInfo {
    &self.months[month as usize - 1]
  }

  /// All twelve months in order.
  pub fn months(&self) -> &[MonthInfo] {
    &self.months
  }

  /// The expected number of days in the month.
  pub fn days_in_month(&self, month: u8) -> Result<u8, CalendarError> {
    Ok(self.month(month)?.days)
  }

  /// The month's full name, e.g. `January`.
  pub fn name(&self, month: u8) -> Result<&str, CalendarError> {
    Ok(&self.month(month)?.name)
  }

  /// The month's abbreviated name, e.g. `Jan`.
  pub fn short_name(&self, month: u8) -> Result<&str, CalendarError> {
    Ok(&self.month(month)?.short_name)
  }

  /// Find a month number from its full or abbreviated name, ignoring case.
  pub fn find_month(&self, name: &str) -> Option<u8> {
    self
      .months
      .iter()
      .find(|m| m.short_name.eq_ignore_ascii_case(name) || m.name.eq_ignore_ascii_case(name))
      .map(|m| m.number)
  }

  /// Validate a month and day against the table.
  pub fn date(&self, month: u8, day: u8) -> Result<DateRef, CalendarError> {
    let max_day = self.days_in_month(month)?;
    match day >= 1 && day <= max_day {
      true => Ok(DateRef::new_unchecked(month, day)),
      false => Err(CalendarError::InvalidDay { month, day, max_day }),
    }
  }

  /// The first slot of the table (January 1).
  pub const fn first(&self) -> DateRef {
    DateRef::new_unchecked(1, 1)
  }

  /// The last slot of the table (December 31).
  pub fn last(&self) -> DateRef {
    DateRef::new_unchecked(12, self.months[11].days)
  }

  /// Every day of one month, in order.
  pub fn days(&self, month: u8) -> Result<DayIter<'_>, CalendarError> {
    let days = self.days_in_month(month)?;
    Ok(DayIter::new(self, DateRef::new_unchecked(month, 1), DateRef::new_unchecked(month, days)))
  }

  /// Every day of the table, January 1 through December 31.
  pub fn year(&self) -> DayIter<'_> {
    DayIter::new(self, self.first(), self.last())
  }

  /// Zero-based position of the slot within the table. Range: `[0, 364]`
  pub fn day_of_year_0(&self, date: DateRef) -> u16 {
    let before: u16 = self.months[..date.month as usize - 1].iter().map(|m| m.days as u16).sum();
    before + date.day as u16 - 1
  }
}

impl Default for CalendarTable {
  fn default() -> Self {
    Self::standard()
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;
  use assert2::let_assert;

  use super::*;

  #[test]
  fn test_standard_table() {
    let table = CalendarTable::standard();
    check!(table.months().len() == 12);
    check!(table.months().iter().map(|m| m.days as u16).sum::<u16>() == DAYS_IN_TABLE);
    check!(table.name(1).unwrap() == "January");
    check!(table.short_name(9).unwrap() == "Sep");
    check!(table.days_in_month(2).unwrap() == 28);
    check!(table.days_in_month(12).unwrap() == 31);
    check!(table.last() == DateRef::new_unchecked(12, 31));
  }

  #[test]
  fn test_out_of_range() {
    let table = CalendarTable::standard();
    for month in [0, 13, 255] {
      let_assert!(Err(CalendarError::OutOfRange { month: m }) = table.month(month));
      check!(m == month as i64);
    }
    let_assert!(Err(CalendarError::InvalidDay { max_day: 30, .. }) = table.date(4, 31));
    let_assert!(Err(CalendarError::InvalidDay { .. }) = table.date(4, 0));
    check!(table.date(4, 30).is_ok());
  }

  #[test]
  fn test_find_month() {
    let table = CalendarTable::standard();
    check!(table.find_month("jan") == Some(1));
    check!(table.find_month("DEC") == Some(12));
    check!(table.find_month("September") == Some(9));
    check!(table.find_month("Sept").is_none());
  }

  #[test]
  fn test_day_of_year() {
    let table = CalendarTable::standard();
    check!(table.day_of_year_0(DateRef::new_unchecked(1, 1)) == 0);
    check!(table.day_of_year_0(DateRef::new_unchecked(2, 1)) == 31);
    check!(table.day_of_year_0(DateRef::new_unchecked(3, 1)) == 59);
    check!(table.day_of_year_0(DateRef::new_unchecked(12, 31)) == 364);
    for (i, date) in table.year().enumerate() {
      check!(table.day_of_year_0(date) as usize == i);
    }
  }

  #[test]
  fn test_from_json() -> Result<(), CalendarError> {
    let json = r#"{
      "monthNames": ["Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                     "September", "Oktober", "November", "Dezember"],
      "shortMonthNames": ["Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt",
                          "Nov", "Dez"],
      "expectedMonthLength": [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    }"#;
    let table = CalendarTable::from_json(json)?;
    check!(table.name(3)? == "März");
    check!(table.find_month("dez") == Some(12));
    Ok(())
  }

  #[test]
  fn test_from_json_rejects_leap_table() {
    let json = r#"{
      "monthNames": ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"],
      "shortMonthNames": ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"],
      "expectedMonthLength": [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    }"#;
    let_assert!(Err(CalendarError::InvalidTable { reason }) = CalendarTable::from_json(json));
    check!(reason.contains("366"));

    let json = r#"{"monthNames": [], "shortMonthNames": [], "expectedMonthLength": []}"#;
    let_assert!(Err(CalendarError::InvalidTable { .. }) = CalendarTable::from_json(json));
    let_assert!(Err(CalendarError::Json(_)) = CalendarTable::from_json("{}"));
  }
}
