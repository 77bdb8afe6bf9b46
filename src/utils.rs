/// Return true if this is a leap year, false otherwise.
pub(crate) const fn is_leap_year(year: i16) -> bool {
  (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_leap_years() {
    check!(is_leap_year(2000));
    check!(is_leap_year(2024));
    check!(is_leap_year(1600));
    check!(!is_leap_year(1900));
    check!(!is_leap_year(2023));
    check!(!is_leap_year(2100));
    check!(is_leap_year(-4));
    check!(is_leap_year(0));
  }
}
