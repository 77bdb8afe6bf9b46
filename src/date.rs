//! A minimal proleptic Gregorian date, used to work out the year being generated and where its
//! weekdays fall.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use crate::utils;
use crate::weekday::Weekday;

/// A single calendar date, stored as the number of days elapsed since 1970-01-01.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
  /// Construct a new `Date` from the provided year, month, and day.
  ///
  /// ## Examples
  ///
  /// ```
  /// use canon_daily::Date;
  /// let date = Date::new(2012, 4, 21);
  /// assert_eq!(date.year(), 2012);
  /// ```
  ///
  /// ## Panic
  ///
  /// This function panics if it receives "out-of-bounds" values (e.g. "March 32" or "February
  /// 30").
  pub const fn new(year: i16, month: u8, day: u8) -> Self {
    const MONTH_DAYS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    assert!(month >= 1 && month <= 12, "Month out-of-bounds");
    assert!(day >= 1 && day <= MONTH_DAYS[month as usize - 1], "Day out-of-bounds");
    if month == 2 && day == 29 {
      assert!(utils::is_leap_year(year), "February 29 only occurs on leap years")
    }

    // Days from civil, per https://howardhinnant.github.io/date_algorithms.html#days_from_civil
    let year = year as i32 - if month <= 2 { 1 } else { 0 };
    let month = month as i32;
    let day = day as i32;
    let era: i32 = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    Self(era * 146097 + day_of_era - 719468)
  }

  /// Construct a new `Date` based on the Unix timestamp.
  pub const fn from_timestamp(unix_timestamp: i64) -> Self {
    Self(unix_timestamp.div_euclid(86_400) as i32)
  }

  /// The date representing today, in UTC.
  ///
  /// ## Panic
  ///
  /// This function will panic if the system clock is set to a time prior to January 1, 1970.
  pub fn today_utc() -> Self {
    let now = now().duration_since(UNIX_EPOCH).expect("system time set prior to 1970").as_secs();
    Self::from_timestamp(now as i64)
  }

  /// Returns the year number in the calendar date.
  pub const fn year(&self) -> i16 {
    // The year half of civil-from-days, per
    // https://howardhinnant.github.io/date_algorithms.html#civil_from_days
    let shifted = self.0 + 719468; // Days from March 1, 0 A.D.
    let era = if shifted >= 0 { shifted } else { shifted - 146_096 } / 146_097;
    let doe = shifted - era * 146_097; // day of era: [0, 146_097)
    let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    // Years here begin on March 1; the 306th day onwards is January or February of the next one.
    (year_of_era + era * 400 + (day_of_year >= 306) as i32) as i16
  }

  /// Return the weekday corresponding to the given date.
  #[inline]
  pub const fn weekday(&self) -> Weekday {
    match (self.0 + 4) % 7 {
      0 => Weekday::Sunday,
      1 | -6 => Weekday::Monday,
      2 | -5 => Weekday::Tuesday,
      3 | -4 => Weekday::Wednesday,
      4 | -3 => Weekday::Thursday,
      5 | -2 => Weekday::Friday,
      6 | -1 => Weekday::Saturday,
      #[cfg(not(tarpaulin_include))]
      _ => panic!("Unreachable: Anything % 7 must be within -6 to 6"),
    }
  }
}

#[cfg(not(test))]
fn now() -> SystemTime {
  SystemTime::now()
}

#[cfg(test)]
use tests::now;

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::time::Duration;

  use assert2::check;

  use super::*;

  thread_local! {
    static MOCK_TIME: RefCell<Option<SystemTime>> = const { RefCell::new(None) };
  }

  fn set_now(time: SystemTime) {
    MOCK_TIME.with(|cell| *cell.borrow_mut() = Some(time));
  }

  fn clear_now() {
    MOCK_TIME.with(|cell| *cell.borrow_mut() = None);
  }

  pub(super) fn now() -> SystemTime {
    MOCK_TIME.with(|cell| cell.borrow().as_ref().cloned().unwrap_or_else(SystemTime::now))
  }

  #[test]
  fn test_internal_repr() {
    check!(Date::new(1969, 12, 31).0 == -1);
    check!(Date::new(1970, 1, 1).0 == 0);
    check!(Date::new(1970, 1, 2).0 == 1);
  }

  #[test]
  fn test_year_readback() {
    for (y, m, d) in [(2012, 4, 21), (2024, 2, 29), (1900, 3, 1), (1969, 12, 31), (2100, 1, 1)] {
      check!(Date::new(y, m, d).year() == y);
    }
    for year in [1600, 1999, 2000, 2023, 2024, 2400] {
      check!(Date::new(year, 1, 1).year() == year);
      check!(Date::new(year, 2, 28).year() == year);
      check!(Date::new(year, 3, 1).year() == year);
      check!(Date::new(year, 12, 31).year() == year);
    }
  }

  #[test]
  #[should_panic]
  fn test_overflow_panic_ly() {
    Date::new(2100, 2, 29);
  }

  #[test]
  fn test_weekday() {
    check!(Date::new(1900, 1, 1).weekday() == Weekday::Monday);
    check!(Date::new(2000, 1, 1).weekday() == Weekday::Saturday);
    check!(Date::new(2023, 1, 1).weekday() == Weekday::Sunday);
    check!(Date::new(2024, 1, 1).weekday() == Weekday::Monday);
    check!(Date::new(1969, 12, 31).weekday() == Weekday::Wednesday);
  }

  #[test]
  fn test_today() {
    set_now(SystemTime::UNIX_EPOCH + Duration::from_secs(86_400));
    check!(Date::today_utc() == Date::new(1970, 1, 2));
    set_now(SystemTime::UNIX_EPOCH + Duration::from_secs(1_704_067_200)); // 2024-01-01
    check!(Date::today_utc().year() == 2024);
    clear_now();
  }
}
