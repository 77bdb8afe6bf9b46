//! Iterator over table days

use std::iter::Iterator;

use crate::calendar::CalendarTable;
use crate::calendar::DateRef;
use crate::nav;

/// An iterator that walks forward one day at a time, from a start day through an end day.
pub struct DayIter<'a> {
  table: &'a CalendarTable,
  cursor: Option<DateRef>,
  end: DateRef,
}

impl<'a> DayIter<'a> {
  pub(crate) fn new(table: &'a CalendarTable, start: DateRef, end: DateRef) -> Self {
    Self { table, cursor: (start <= end).then_some(start), end }
  }
}

impl Iterator for DayIter<'_> {
  type Item = DateRef;

  fn next(&mut self) -> Option<Self::Item> {
    let answer = self.cursor?;
    self.cursor = match answer >= self.end {
      true => None,
      false => Some(nav::next(self.table, answer).target()),
    };
    Some(answer)
  }
}
