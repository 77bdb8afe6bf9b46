//! The `canon-daily` crate builds the Canon Daily devotional calendar: a static site with one page
//! per day of the year, each showing that day's scripture readings and quotes, plus a calendar
//! index and a couple of shared pages.
//!
//! Days are laid out against a fixed 365-day [`CalendarTable`]. The year being generated only
//! decides where weekdays fall on the index page.
//!
//! ## Examples
//!
//! Walking the calendar:
//!
//! ```
//! use canon_daily::{nav, CalendarTable, Link};
//!
//! let table = CalendarTable::standard();
//! let feb_28 = table.date(2, 28).unwrap();
//! assert_eq!(nav::next(&table, feb_28), Link::Day(table.date(3, 1).unwrap()));
//!
//! let dec_31 = table.last();
//! assert_eq!(nav::next(&table, dec_31), Link::NextYear(table.first()));
//! ```
//!
//! Planning a run:
//!
//! ```
//! use canon_daily::{CalendarTable, GenerationMode, PagePlan};
//!
//! let table = CalendarTable::standard();
//! assert_eq!(PagePlan::build(&table, GenerationMode::FullYear).unwrap().len(), 365);
//! assert!(PagePlan::build(&table, GenerationMode::SingleMonth(13)).is_err());
//! ```

pub mod bookmarks;
mod calendar;
pub mod content;
mod date;
mod error;
pub mod hash;
pub mod iter;
pub mod nav;
pub mod options;
pub mod plan;
pub mod reference;
pub mod render;
pub mod site;
mod utils;
mod weekday;
mod year;

pub use bookmarks::Bookmarks;
pub use calendar::CalendarTable;
pub use calendar::DAYS_IN_TABLE;
pub use calendar::DateRef;
pub use calendar::MonthInfo;
pub use content::DailyContent;
pub use date::Date;
pub use error::BookmarkError;
pub use error::CalendarError;
pub use error::ContentError;
pub use error::OptionsError;
pub use nav::Link;
pub use nav::NavigationLinks;
pub use options::Options;
pub use plan::GenerationMode;
pub use plan::PagePlan;
pub use reference::Reference;
pub use site::Site;
pub use site::SiteConfig;
pub use site::Summary;
pub use weekday::Weekday;
pub use year::YearContext;
pub use year::day_of_week_offset;
pub use year::is_leap_year;
