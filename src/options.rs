//! Command-line options.
//!
//! Options are written `--key`, `--key=value`, `key` or `key=value`; keys are matched without
//! regard to case.

use std::path::PathBuf;

use crate::error::CalendarError;
use crate::error::OptionsError;
use crate::plan::GenerationMode;

pub const USAGE: &str = "\
Usage: canon-daily [options]
canon-daily --help      Print this help text
canon-daily run         Run the generator
canon-daily debug       Skip generating all daily pages, except for January 1-3
canon-daily month=n     Generate for a month. n must be between 1 and 12

Other options:
  year=n       Generate for year n instead of the current year
  data=dir     Read reference data from dir
  out=dir      Write the site into dir
  verbose      Log every page written";

/// Every option the generator understands.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
  pub help: bool,
  pub debug: bool,
  /// Raw month number; range-checked when the mode is selected.
  pub month: Option<i64>,
  pub run: bool,
  pub year: Option<i16>,
  pub data_dir: Option<PathBuf>,
  pub out_dir: Option<PathBuf>,
  pub verbose: bool,
}

impl Options {
  pub fn parse<I, S>(args: I) -> Result<Self, OptionsError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut opts = Self::default();
    for arg in args {
      let arg = arg.as_ref();
      let arg = arg.strip_prefix("--").unwrap_or(arg);
      let (key, value) = match arg.split_once('=') {
        Some((key, value)) => (key.to_ascii_lowercase(), Some(value)),
        None => (arg.to_ascii_lowercase(), None),
      };

      macro_rules! flag {
        ($field:ident) => {{
          if value.is_some() {
            return Err(OptionsError::UnexpectedValue { key: key.clone() });
          }
          opts.$field = true;
        }};
      }
      macro_rules! required {
        () => {
          match value {
            Some(v) if !v.is_empty() => v,
            _ => return Err(OptionsError::MissingValue { key: key.clone() }),
          }
        };
      }
      macro_rules! number {
        () => {{
          let v = required!();
          v.parse().map_err(|_| OptionsError::InvalidNumber { key: key.clone(), value: v.into() })?
        }};
      }

      match key.as_str() {
        "help" => flag!(help),
        "debug" => flag!(debug),
        "run" => flag!(run),
        "verbose" => flag!(verbose),
        "month" => opts.month = Some(number!()),
        "year" => opts.year = Some(number!()),
        "data" => opts.data_dir = Some(PathBuf::from(required!())),
        "out" => opts.out_dir = Some(PathBuf::from(required!())),
        _ => return Err(OptionsError::Unknown { key: key.clone() }),
      }
    }
    Ok(opts)
  }

  /// The generation mode selected, if any. `debug` wins over `month`, which wins over `run`.
  pub fn mode(&self) -> Result<Option<GenerationMode>, CalendarError> {
    if self.debug {
      Ok(Some(GenerationMode::Preview))
    } else if let Some(month) = self.month {
      GenerationMode::single_month(month).map(Some)
    } else if self.run {
      Ok(Some(GenerationMode::FullYear))
    } else {
      Ok(None)
    }
  }
}
