//! Yearly artifact file format: a JSON object keyed by slash-separated AD
//! dates, one entry per day.

use std::collections::BTreeMap;

use serde::Deserialize;

use patro_core::types::DateTriple;

/// One day's metadata as recorded in an `artifact-<year>.json` file.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactDay {
    /// Slash-separated BS date, e.g. `"2080/3/1"`.
    pub nepali_date: String,
    pub is_public_holiday: bool,
    #[serde(default)]
    pub tithi: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub panchangam: Vec<String>,
}

/// A whole artifact file, keyed by `"YYYY/M/D"` AD dates. `BTreeMap` keeps
/// the import order stable.
pub type Artifact = BTreeMap<String, ArtifactDay>;

/// ## Summary
/// Parses a slash-separated `"YYYY/M/D"` date into a concrete triple.
///
/// ## Errors
/// Returns an error when the text does not hold exactly three integer
/// components.
pub fn parse_slash_date(text: &str) -> anyhow::Result<DateTriple> {
    let mut parts = text.split('/').map(str::trim).map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(year)), Some(Ok(month)), Some(Ok(day)), None) => {
            Ok(DateTriple::new(year, month, day))
        }
        _ => anyhow::bail!("malformed artifact date \"{text}\", expected \"YYYY/M/D\""),
    }
}
