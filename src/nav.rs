//! Previous/next day navigation across month and year boundaries.

use crate::calendar::CalendarTable;
use crate::calendar::DateRef;

/// Where a navigation link points.
///
/// Links that wrap around the end of the year are kept distinct from ordinary links so pages can
/// mark them, but they still carry the day they land on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Link {
  /// An adjacent day within the same year.
  Day(DateRef),
  /// January 1 going back to December 31.
  PreviousYear(DateRef),
  /// December 31 going forward to January 1.
  NextYear(DateRef),
}

impl Link {
  /// The day this link lands on, for chaining navigation.
  pub const fn target(&self) -> DateRef {
    match self {
      Self::Day(d) | Self::PreviousYear(d) | Self::NextYear(d) => *d,
    }
  }

  /// Whether following this link leaves the current year.
  pub const fn crosses_year(&self) -> bool {
    !matches!(self, Self::Day(_))
  }

  /// The relative URL of the target page, as seen from the page for `from`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use canon_daily::{nav, CalendarTable};
  ///
  /// let table = CalendarTable::standard();
  /// let jan_31 = table.date(1, 31).unwrap();
  /// assert_eq!(nav::previous(&table, jan_31).href(jan_31, &table), "./30");
  /// assert_eq!(nav::next(&table, jan_31).href(jan_31, &table), "../February/1");
  /// ```
  pub fn href(&self, from: DateRef, table: &CalendarTable) -> String {
    let target = self.target();
    match self {
      Self::Day(_) if target.month() == from.month() => format!("./{}", target.day()),
      _ => format!("../{}/{}", table.info(target.month()).name, target.day()),
    }
  }
}

/// The day immediately before `date`.
pub fn previous(table: &CalendarTable, date: DateRef) -> Link {
  match (date.month(), date.day()) {
    (month, day) if day > 1 => Link::Day(DateRef::new_unchecked(month, day - 1)),
    (1, _) => Link::PreviousYear(table.last()),
    (month, _) => Link::Day(DateRef::new_unchecked(month - 1, table.info(month - 1).days)),
  }
}

/// The day immediately after `date`.
pub fn next(table: &CalendarTable, date: DateRef) -> Link {
  match (date.month(), date.day()) {
    (month, day) if day < table.info(month).days => {
      Link::Day(DateRef::new_unchecked(month, day + 1))
    },
    (12, _) => Link::NextYear(table.first()),
    (month, _) => Link::Day(DateRef::new_unchecked(month + 1, 1)),
  }
}

/// Back and next links for one page.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NavigationLinks {
  pub back: Link,
  pub next: Link,
}

impl NavigationLinks {
  pub fn new(table: &CalendarTable, date: DateRef) -> Self {
    Self { back: previous(table, date), next: next(table, date) }
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  fn d(month: u8, day: u8) -> DateRef {
    DateRef::new_unchecked(month, day)
  }

  #[test]
  fn test_within_month() {
    let table = CalendarTable::standard();
    check!(previous(&table, d(4, 21)) == Link::Day(d(4, 20)));
    check!(next(&table, d(4, 21)) == Link::Day(d(4, 22)));
    check!(next(&table, d(2, 27)) == Link::Day(d(2, 28)));
  }

  #[test]
  fn test_month_boundaries() {
    let table = CalendarTable::standard();
    for month in 1..=11 {
      let last = d(month, table.info(month).days);
      check!(next(&table, last) == Link::Day(d(month + 1, 1)));
      check!(previous(&table, d(month + 1, 1)) == Link::Day(last));
    }
    check!(next(&table, d(2, 28)) == Link::Day(d(3, 1)));
    check!(previous(&table, d(3, 1)) == Link::Day(d(2, 28)));
  }

  #[test]
  fn test_year_boundaries() {
    let table = CalendarTable::standard();
    let back = previous(&table, d(1, 1));
    check!(back == Link::PreviousYear(d(12, 31)));
    check!(back.crosses_year());
    check!(back.target() == d(12, 31));
    let forward = next(&table, d(12, 31));
    check!(forward == Link::NextYear(d(1, 1)));
    check!(forward.crosses_year());
    check!(forward.target() == d(1, 1));
    check!(!next(&table, d(12, 30)).crosses_year());
  }

  #[test]
  fn test_round_trip() {
    let table = CalendarTable::standard();
    for date in table.year() {
      check!(previous(&table, next(&table, date).target()).target() == date);
      check!(next(&table, previous(&table, date).target()).target() == date);
      if date.day() > 1 {
        check!(previous(&table, date) == Link::Day(d(date.month(), date.day() - 1)));
      }
    }
  }

  #[test]
  fn test_href() {
    let table = CalendarTable::standard();
    let nav = NavigationLinks::new(&table, d(1, 5));
    check!(nav.back.href(d(1, 5), &table) == "./4");
    check!(nav.next.href(d(1, 5), &table) == "./6");

    let nav = NavigationLinks::new(&table, d(3, 1));
    check!(nav.back.href(d(3, 1), &table) == "../February/28");
    check!(nav.next.href(d(3, 1), &table) == "./2");

    let nav = NavigationLinks::new(&table, d(1, 1));
    check!(nav.back.href(d(1, 1), &table) == "../December/31");
    let nav = NavigationLinks::new(&table, d(12, 31));
    check!(nav.next.href(d(12, 31), &table) == "../January/1");
  }
}
