//! The two daily quote arrays, one entry per table day.

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::calendar::DAYS_IN_TABLE;
use crate::error::ContentError;

/// A pair of contrasting attitudes shown at the top of each day.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct ProudVsBroken {
  pub proud: String,
  pub broken: String,
}

/// Quotes indexed by zero-based day of the table.
#[derive(Clone, Debug)]
pub struct DailyContent {
  proud_vs_broken: Vec<ProudVsBroken>,
  meditate: Vec<String>,
}

/// The content for a single day.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DayContent<'a> {
  pub proud_vs_broken: &'a ProudVsBroken,
  pub meditate: &'a str,
}

fn load<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>, ContentError> {
  let entries: Vec<T> =
    serde_json::from_str(json).map_err(|source| ContentError::Json { name, source })?;
  match entries.len() == DAYS_IN_TABLE as usize {
    true => Ok(entries),
    false => Err(ContentError::Length {
      name,
      expected: DAYS_IN_TABLE as usize,
      found: entries.len(),
    }),
  }
}

impl DailyContent {
  /// Parse both arrays from their JSON text. Each must hold exactly one entry per table day.
  pub fn from_json(proud_vs_broken: &str, meditate: &str) -> Result<Self, ContentError> {
    Ok(Self {
      proud_vs_broken: load("proud-vs-broken.json", proud_vs_broken)?,
      meditate: load("meditate.json", meditate)?,
    })
  }

  /// Content for the day at `day_of_year_0`.
  ///
  /// ## Panic
  ///
  /// Panics if `day_of_year_0` is not below the table length.
  pub fn day(&self, day_of_year_0: u16) -> DayContent<'_> {
    let i = day_of_year_0 as usize;
    DayContent { proud_vs_broken: &self.proud_vs_broken[i], meditate: &self.meditate[i] }
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;
  use assert2::let_assert;

  use super::*;

  fn fixture(n: usize) -> (String, String) {
    let pvb: Vec<ProudVsBroken> = (0..n)
      .map(|i| ProudVsBroken { proud: format!("proud {i}"), broken: format!("broken {i}") })
      .collect();
    let meditate: Vec<String> = (0..n).map(|i| format!("meditate {i}")).collect();
    (serde_json::to_string(&pvb).unwrap(), serde_json::to_string(&meditate).unwrap())
  }

  #[test]
  fn test_lookup() -> Result<(), ContentError> {
    let (pvb, meditate) = fixture(365);
    let content = DailyContent::from_json(&pvb, &meditate)?;
    check!(content.day(0).meditate == "meditate 0");
    check!(content.day(364).proud_vs_broken.broken == "broken 364");
    Ok(())
  }

  #[test]
  fn test_wrong_length() {
    let (pvb, meditate) = fixture(364);
    let_assert!(
      Err(ContentError::Length { name: "proud-vs-broken.json", found: 364, .. }) =
        DailyContent::from_json(&pvb, &meditate)
    );
  }

  #[test]
  fn test_bad_json() {
    let (pvb, _) = fixture(365);
    let_assert!(
      Err(ContentError::Json { name: "meditate.json", .. }) = DailyContent::from_json(&pvb, "{}")
    );
  }
}
