//! HTML rendering through embedded handlebars templates.
//!
//! Every page is a sub-template rendered on its own, then wrapped in the shared master layout.

use handlebars::Handlebars;
use handlebars::RenderError;
use handlebars::TemplateError;
use serde::Serialize;

use crate::reference::Reference;

/// Base URL chapter links point at.
const PASSAGE_URL: &str = "https://www.biblegateway.com/passage/?search=";

/// The page bodies the site is built from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Page {
  Day,
  Calendar,
  Prayer,
  BulkEdit,
}

impl Page {
  const fn template(&self) -> &'static str {
    match self {
      Self::Day => "day",
      Self::Calendar => "calendar",
      Self::Prayer => "prayer",
      Self::BulkEdit => "bulk-edit",
    }
  }
}

/// Cache-busting tokens for the shared assets.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Revisions {
  pub css: String,
  pub util: String,
}

/// Everything the master layout needs besides the body.
#[derive(Clone, Debug)]
pub struct Layout<'a> {
  pub title: &'a str,
  /// Relative path from the page back to the output root, e.g. `../`.
  pub root: &'a str,
  pub include_util: bool,
}

#[derive(Serialize)]
struct MasterContext<'a> {
  title: &'a str,
  root: &'a str,
  css_rev: &'a str,
  util_rev: Option<&'a str>,
  body: &'a str,
}

#[derive(Serialize)]
struct ChapterLink {
  number: u16,
  url: String,
}

#[derive(Serialize)]
struct PassageContext<'a> {
  reference: String,
  book: &'a str,
  url: String,
  chapters: Vec<ChapterLink>,
}

fn passage_url(query: &str) -> String {
  format!("{PASSAGE_URL}{}", query.replace(' ', "+"))
}

pub struct Renderer {
  hbs: Handlebars<'static>,
  revisions: Revisions,
}

impl Renderer {
  pub fn new(revisions: Revisions) -> Result<Self, TemplateError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    for (name, source) in [
      ("master", include_str!("../templates/master.hbs")),
      ("day", include_str!("../templates/day.hbs")),
      ("passage", include_str!("../templates/passage.hbs")),
      ("calendar", include_str!("../templates/calendar.hbs")),
      ("prayer", include_str!("../templates/prayer.hbs")),
      ("bulk-edit", include_str!("../templates/bulk-edit.hbs")),
    ] {
      hbs.register_template_string(name, source)?;
    }
    Ok(Self { hbs, revisions })
  }

  /// Render `page` with `data` and wrap it in the master layout.
  pub fn render<T: Serialize>(
    &self,
    page: Page,
    layout: &Layout<'_>,
    data: &T,
  ) -> Result<String, RenderError> {
    let body = self.hbs.render(page.template(), data)?;
    self.hbs.render("master", &MasterContext {
      title: layout.title,
      root: layout.root,
      css_rev: &self.revisions.css,
      util_rev: layout.include_util.then_some(self.revisions.util.as_str()),
      body: &body,
    })
  }

  /// Render one scripture reference as a passage block.
  pub fn passage(&self, reference: &Reference) -> Result<String, RenderError> {
    let chapters = reference
      .chapter_list()
      .into_iter()
      .map(|number| ChapterLink {
        number,
        url: passage_url(&format!("{} {number}", reference.book)),
      })
      .collect();
    self.hbs.render("passage", &PassageContext {
      reference: reference.to_string(),
      book: &reference.book,
      url: passage_url(&reference.to_string()),
      chapters,
    })
  }
}
