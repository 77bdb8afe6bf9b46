//! Building the site: load every input, plan the pages, render them, write them out.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Serialize;

use crate::bookmarks::Bookmarks;
use crate::calendar::CalendarTable;
use crate::calendar::MonthInfo;
use crate::content::DailyContent;
use crate::content::DayContent;
use crate::hash;
use crate::nav::Link;
use crate::options::Options;
use crate::plan::GenerationMode;
use crate::plan::PagePlan;
use crate::plan::PlannedDay;
use crate::reference::Reference;
use crate::render::Layout;
use crate::render::Page;
use crate::render::Renderer;
use crate::render::Revisions;
use crate::weekday::Weekday;
use crate::year::YearContext;

const SITE_NAME: &str = "Canon Daily";

/// Where inputs come from and where the site goes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteConfig {
  /// Holds `bookmarks.txt`, `proud-vs-broken.json`, `meditate.json` and, optionally,
  /// `months.json`.
  pub data_dir: PathBuf,
  /// Receives the pages; must already hold `style.css` and `util.js`.
  pub out_dir: PathBuf,
  pub year: YearContext,
}

impl SiteConfig {
  /// Defaults: data from the crate's `data/` directory, output one directory above the crate,
  /// and the current UTC year.
  pub fn from_options(opts: &Options) -> Self {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    Self {
      data_dir: opts.data_dir.clone().unwrap_or_else(|| crate_dir.join("data")),
      out_dir: opts.out_dir.clone().unwrap_or_else(|| crate_dir.join("..")),
      year: opts.year.map(YearContext::new).unwrap_or_else(YearContext::current),
    }
  }
}

/// What a run produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
  pub common_pages: usize,
  pub day_pages: usize,
}

/// A page rendered in memory, waiting to be written.
struct Rendered {
  path: PathBuf,
  html: String,
}

#[derive(Serialize)]
struct LinkView {
  href: String,
  crosses_year: bool,
}

#[derive(Serialize)]
struct DayView<'a> {
  month: u8,
  day: u8,
  month_name: &'a str,
  back: LinkView,
  next: LinkView,
  content: DayContent<'a>,
  bible_html: String,
}

#[derive(Serialize)]
struct MonthView<'a> {
  number: u8,
  name: &'a str,
  short_name: &'a str,
  /// Monday-first rows for the index grid; `None` is an empty cell.
  weeks: Vec<[Option<u8>; 7]>,
  days: Vec<u8>,
}

#[derive(Serialize)]
struct CalendarView<'a> {
  year: YearContext,
  weekdays: Vec<&'static str>,
  months: Vec<MonthView<'a>>,
  month_names_json: String,
}

#[derive(Serialize)]
struct BulkEditView<'a> {
  months: Vec<MonthView<'a>>,
}

#[derive(Serialize)]
struct Empty {}

pub struct Site {
  table: CalendarTable,
  bookmarks: Bookmarks,
  content: DailyContent,
  year: YearContext,
  renderer: Renderer,
  out_dir: PathBuf,
}

fn read(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}

impl Site {
  /// Read and validate every input. Nothing is written here.
  pub fn load(config: SiteConfig) -> Result<Self> {
    let data = &config.data_dir;
    let months_path = data.join("months.json");
    let table = match months_path.exists() {
      true => CalendarTable::from_json(&read(&months_path)?)
        .with_context(|| format!("invalid {}", months_path.display()))?,
      false => CalendarTable::standard(),
    };

    let bookmarks_path = data.join("bookmarks.txt");
    let bookmarks = Bookmarks::parse(&read(&bookmarks_path)?, &table)
      .and_then(|bookmarks| bookmarks.check_complete(&table).map(|()| bookmarks))
      .with_context(|| format!("invalid {}", bookmarks_path.display()))?;
    for bookmark in &bookmarks.bookmarks {
      for (date, reading) in &bookmark.readings {
        reading.parse::<Reference>().with_context(|| {
          format!("invalid {}: {:?} on {date}", bookmarks_path.display(), bookmark.name)
        })?;
      }
    }
    let content = DailyContent::from_json(
      &read(&data.join("proud-vs-broken.json"))?,
      &read(&data.join("meditate.json"))?,
    )?;

    let revision = |asset: &str| {
      let path = config.out_dir.join(asset);
      hash::hash_file(&path).with_context(|| format!("could not hash {}", path.display()))
    };
    let revisions = Revisions { css: revision("style.css")?, util: revision("util.js")? };
    let renderer = Renderer::new(revisions).context("invalid template")?;

    log::debug!(
      year = config.year.year,
      bookmarks = bookmarks.bookmarks.len();
      "loaded reference data"
    );
    Ok(Self { table, bookmarks, content, year: config.year, renderer, out_dir: config.out_dir })
  }

  /// Write the shared pages and one page per day of `mode`.
  ///
  /// Everything is rendered before the first file is written, so a bad month or a missing reading
  /// leaves the output untouched.
  pub fn generate(&self, mode: GenerationMode) -> Result<Summary> {
    let plan = PagePlan::build(&self.table, mode)?;
    let common = self.render_common()?;
    let days = plan.days.iter().map(|day| self.render_day(day)).collect::<Result<Vec<_>>>()?;

    for page in common.iter().chain(&days) {
      self.write(page)?;
    }
    let summary = Summary { common_pages: common.len(), day_pages: days.len() };
    log::info!("Wrote {} shared pages and {} daily pages", summary.common_pages, summary.day_pages);
    match mode {
      GenerationMode::Preview => log::info!("Skipped the daily pages other than January 1-3"),
      GenerationMode::SingleMonth(month) => {
        log::info!(month = month; "Only generated pages for month {month}")
      },
      GenerationMode::FullYear => {},
    }
    Ok(summary)
  }

  fn month_views(&self) -> Vec<MonthView<'_>> {
    self
      .table
      .months()
      .iter()
      .map(|m: &MonthInfo| MonthView {
        number: m.number,
        name: &m.name,
        short_name: &m.short_name,
        weeks: self.year.month_weeks(&self.table, m.number),
        days: (1..=m.days).collect(),
      })
      .collect()
  }

  fn render_common(&self) -> Result<Vec<Rendered>> {
    let names: Vec<&str> = self.table.months().iter().map(|m| m.name.as_str()).collect();
    let calendar = CalendarView {
      year: self.year,
      weekdays: Weekday::MONDAY_FIRST.iter().map(Weekday::abbv).collect(),
      months: self.month_views(),
      month_names_json: serde_json::to_string(&names)?,
    };
    let index = self.renderer.render(
      Page::Calendar,
      &Layout { title: SITE_NAME, root: "", include_util: true },
      &calendar,
    )?;

    let title = format!("Prayer for the Filling of the Spirit - {SITE_NAME}");
    let prayer = self.renderer.render(
      Page::Prayer,
      &Layout { title: &title, root: "", include_util: false },
      &Empty {},
    )?;

    let title = format!("Bulk Edit - {SITE_NAME}");
    let bulk_edit = self.renderer.render(
      Page::BulkEdit,
      &Layout { title: &title, root: "", include_util: true },
      &BulkEditView { months: self.month_views() },
    )?;

    Ok(vec![
      Rendered { path: "index.html".into(), html: index },
      Rendered { path: "prayer-for-filling-of-spirit.html".into(), html: prayer },
      Rendered { path: "bulk-edit.html".into(), html: bulk_edit },
    ])
  }

  fn render_day(&self, planned: &PlannedDay) -> Result<Rendered> {
    let date = planned.date;
    let month_name = self.table.name(date.month())?;
    let link = |link: Link| LinkView {
      href: link.href(date, &self.table),
      crosses_year: link.crosses_year(),
    };

    let mut passages = Vec::new();
    for reading in self.bookmarks.readings(date)? {
      let reference = reading
        .parse::<Reference>()
        .with_context(|| format!("bad reading for {month_name} {}", date.day()))?;
      passages.push(self.renderer.passage(&reference)?);
    }

    let view = DayView {
      month: date.month(),
      day: date.day(),
      month_name,
      back: link(planned.links.back),
      next: link(planned.links.next),
      content: self.content.day(planned.day_of_year_0),
      bible_html: passages.join("\n"),
    };
    let title = format!("{month_name} {} - {SITE_NAME}", date.day());
    let html = self
      .renderer
      .render(Page::Day, &Layout { title: &title, root: "../", include_util: true }, &view)
      .with_context(|| format!("could not render {title}"))?;
    log::debug!(month = date.month(), day = date.day(); "rendered day page");
    Ok(Rendered { path: Path::new(month_name).join(format!("{}.html", date.day())), html })
  }

  fn write(&self, page: &Rendered) -> Result<()> {
    let path = self.out_dir.join(&page.path);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("could not create {}", parent.display()))?;
    }
    fs::write(&path, &page.html).with_context(|| format!("could not write {}", path.display()))
  }
}
