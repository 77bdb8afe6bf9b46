use std::fmt;
use std::str::FromStr;

/// A scripture reference: a book and, optionally, a chapter or chapter range.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reference {
  pub book: String,
  pub chapters: Option<(u16, u16)>,
}

impl Reference {
  /// Each chapter covered by the reference; empty for a whole-book reading.
  pub fn chapter_list(&self) -> Vec<u16> {
    match self.chapters {
      Some((start, end)) => (start..=end).collect(),
      None => Vec::new(),
    }
  }
}

impl fmt::Display for Reference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.chapters {
      None => f.write_str(&self.book),
      Some((start, end)) if start == end => write!(f, "{} {}", self.book, start),
      Some((start, end)) => write!(f, "{} {}-{}", self.book, start, end),
    }
  }
}

impl FromStr for Reference {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    macro_rules! fail {
      ($s:ident, $r:literal) => {
        ParseError { src: $s.into(), reason: Some($r) }
      };
    }
    let s = s.trim();
    if s.is_empty() {
      return Err(fail!(s, "Empty reference."));
    }

    // A trailing token that starts with a digit is the chapter part.
    let (book, chapters) = match s.rsplit_once(char::is_whitespace) {
      Some((book, tail)) if tail.starts_with(|c: char| c.is_ascii_digit()) => {
        (book.trim(), Some(tail))
      },
      _ => (s, None),
    };
    if book.is_empty() || book.chars().all(|c| c.is_ascii_digit()) {
      return Err(fail!(s, "Missing book name."));
    }
    let chapters = match chapters {
      None => None,
      Some(tail) => {
        let (start, end) = tail.split_once('-').unwrap_or((tail, tail));
        let start = start.parse::<u16>().map_err(|_| fail!(s, "Failed to parse chapter"))?;
        let end = end.parse::<u16>().map_err(|_| fail!(s, "Failed to parse chapter"))?;
        if start == 0 || end < start {
          return Err(fail!(s, "Invalid chapter range."));
        }
        Some((start, end))
      },
    };
    Ok(Reference { book: book.to_string(), chapters })
  }
}

#[derive(Debug)]
pub struct ParseError {
  src: String,
  reason: Option<&'static str>,
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Parse error attempting to parse Reference from {:?}{}",
      self.src,
      self.reason.map(|r| format!(": {}", r)).unwrap_or_default(),
    )
  }
}
