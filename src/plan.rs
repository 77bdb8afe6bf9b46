//! Which days a run renders, and how each one links to its neighbours.

use crate::calendar::CalendarTable;
use crate::calendar::DateRef;
use crate::error::CalendarError;
use crate::nav::NavigationLinks;

/// The subset of days a run produces.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GenerationMode {
  /// January 1 through 3 only.
  Preview,
  /// Every day of one month.
  SingleMonth(u8),
  /// Every day of the table.
  FullYear,
}

impl GenerationMode {
  /// Build a single-month mode from an unchecked month number.
  pub fn single_month(month: i64) -> Result<Self, CalendarError> {
    match u8::try_from(month) {
      Ok(m @ 1..=12) => Ok(Self::SingleMonth(m)),
      _ => Err(CalendarError::OutOfRange { month }),
    }
  }
}

/// One page to render.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlannedDay {
  pub date: DateRef,
  pub links: NavigationLinks,
  /// Zero-based position in the table, used to index the daily content.
  pub day_of_year_0: u16,
}

/// The ordered list of pages for one mode.
#[derive(Clone, Debug)]
pub struct PagePlan {
  pub mode: GenerationMode,
  pub days: Vec<PlannedDay>,
}

impl PagePlan {
  /// Enumerate the days for `mode`.
  ///
  /// An out-of-range month fails here, before anything is rendered.
  pub fn build(table: &CalendarTable, mode: GenerationMode) -> Result<Self, CalendarError> {
    let dates: Vec<DateRef> = match mode {
      GenerationMode::Preview => (1..=3).map(|day| DateRef::new_unchecked(1, day)).collect(),
      GenerationMode::SingleMonth(month) => table.days(month)?.collect(),
      GenerationMode::FullYear => table.year().collect(),
    };
    let days = dates
      .into_iter()
      .map(|date| PlannedDay {
        date,
        links: NavigationLinks::new(table, date),
        day_of_year_0: table.day_of_year_0(date),
      })
      .collect();
    Ok(Self { mode, days })
  }

  pub fn len(&self) -> usize {
    self.days.len()
  }

  pub fn is_empty(&self) -> bool {
    self.days.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;
  use assert2::let_assert;

  use super::*;
  use crate::nav::Link;

  #[test]
  fn test_preview() -> Result<(), CalendarError> {
    let table = CalendarTable::standard();
    let plan = PagePlan::build(&table, GenerationMode::Preview)?;
    let dates: Vec<(u8, u8)> = plan.days.iter().map(|p| (p.date.month(), p.date.day())).collect();
    check!(dates == vec![(1, 1), (1, 2), (1, 3)]);
    check!(plan.days[0].links.back == Link::PreviousYear(table.date(12, 31)?));
    check!(plan.days[2].links.next == Link::Day(table.date(1, 4)?));
    Ok(())
  }

  #[test]
  fn test_single_month() -> Result<(), CalendarError> {
    let table = CalendarTable::standard();
    let plan = PagePlan::build(&table, GenerationMode::SingleMonth(2))?;
    check!(plan.len() == 28);
    check!(plan.days.iter().map(|p| p.date.day()).eq(1..=28));
    check!(plan.days[0].day_of_year_0 == 31);
    check!(plan.days[27].links.next == Link::Day(table.date(3, 1)?));
    Ok(())
  }

  #[test]
  fn test_single_month_out_of_range() {
    let table = CalendarTable::standard();
    for month in [0, 13] {
      let_assert!(
        Err(CalendarError::OutOfRange { .. }) =
          PagePlan::build(&table, GenerationMode::SingleMonth(month))
      );
    }
    for month in [0, 13, -1, 300] {
      let_assert!(
        Err(CalendarError::OutOfRange { month: m }) = GenerationMode::single_month(month)
      );
      check!(m == month);
    }
    let_assert!(Ok(GenerationMode::SingleMonth(12)) = GenerationMode::single_month(12));
  }

  #[test]
  fn test_full_year() -> Result<(), CalendarError> {
    let table = CalendarTable::standard();
    let plan = PagePlan::build(&table, GenerationMode::FullYear)?;
    check!(plan.len() == 365);
    check!(plan.days.windows(2).all(|w| w[0].date < w[1].date));
    check!(plan.days.iter().enumerate().all(|(i, p)| p.day_of_year_0 as usize == i));
    check!(plan.days[364].links.next == Link::NextYear(table.first()));
    Ok(())
  }
}
