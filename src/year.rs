//! Per-run facts about the year being generated.

use serde::Serialize;

use crate::calendar::CalendarTable;
use crate::calendar::DateRef;
use crate::date::Date;
use crate::utils;

/// Which weekday January 1 falls on, counted from Monday. Range: `[0, 6]`
///
/// ## Examples
///
/// ```
/// // January 1, 2024 was a Monday.
/// assert_eq!(canon_daily::day_of_week_offset(2024), 0);
/// ```
pub const fn day_of_week_offset(year: i16) -> u8 {
  Date::new(year, 1, 1).weekday().monday_first_index()
}

/// Whether the year has a February 29 under the Gregorian rule.
pub const fn is_leap_year(year: i16) -> bool {
  utils::is_leap_year(year)
}

/// The year a run generates pages for, computed once and shared read-only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct YearContext {
  pub year: i16,
  pub day_of_week_offset: u8,
  pub leap_year: bool,
}

impl YearContext {
  pub const fn new(year: i16) -> Self {
    Self { year, day_of_week_offset: day_of_week_offset(year), leap_year: is_leap_year(year) }
  }

  /// The context for the current year, in UTC.
  pub fn current() -> Self {
    Self::new(Date::today_utc().year())
  }

  /// Monday-first weekday index of the first day of `month` in this year.
  ///
  /// The table never lists February 29, but in a leap year it still pushes every later month one
  /// weekday further along.
  pub fn month_start_offset(&self, table: &CalendarTable, month: u8) -> u8 {
    let first = DateRef::new_unchecked(month, 1);
    let leap_day = (self.leap_year && month > 2) as u16;
    ((self.day_of_week_offset as u16 + table.day_of_year_0(first) + leap_day) % 7) as u8
  }

  /// The month laid out as Monday-first weeks. Cells before day 1 and after the last day are
  /// `None`.
  pub fn month_weeks(&self, table: &CalendarTable, month: u8) -> Vec<[Option<u8>; 7]> {
    let blanks = self.month_start_offset(table, month) as usize;
    let days = table.info(month).days as usize;
    let mut weeks = vec![[None; 7]; (blanks + days).div_ceil(7)];
    for day in 1..=days {
      let cell = blanks + day - 1;
      weeks[cell / 7][cell % 7] = Some(day as u8);
    }
    weeks
  }
}
