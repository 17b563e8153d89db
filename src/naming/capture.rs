//! Game name extraction for capture tool filenames.
//!
//! The capture tool writes `<game name> <M_D_YYYY>_<time>.<ext>`, so the
//! game name is everything before the first date stamp.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Error, Result};
use crate::naming::sanitize::trim_trailing_dots_spaces;

/// A game name parsed from a capture filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureName {
    /// Game name preceding the date stamp.
    pub game: String,
    /// Date from the stamp, if it is a real calendar date.
    pub captured_on: Option<NaiveDate>,
}

fn date_stamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.*?) (\d{1,2})_(\d{1,2})_(\d{4})").expect("date stamp pattern is valid")
    })
}

/// Extract the game name from a capture tool filename.
///
/// Returns `Error::NoMatch` when the filename has no ` M_D_YYYY` stamp or
/// when nothing usable remains of the prefix.
pub fn extract_capture_name(file_name: &str) -> Result<CaptureName> {
    let caps = date_stamp_pattern()
        .captures(file_name)
        .ok_or_else(|| Error::NoMatch(file_name.to_string()))?;

    let prefix = caps.get(1).map_or("", |m| m.as_str());

    // Non-ASCII characters render differently between runs and would split
    // one game into several folders.
    let ascii: String = prefix.chars().filter(char::is_ascii).collect();
    let collapsed = ascii.replace("_ ", " ");
    let game = trim_trailing_dots_spaces(&collapsed).to_string();

    if game.is_empty() {
        return Err(Error::NoMatch(file_name.to_string()));
    }

    let captured_on = parse_stamp(&caps[2], &caps[3], &caps[4]);

    Ok(CaptureName { game, captured_on })
}

fn parse_stamp(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month = month.parse().ok()?;
    let day = day.parse().ok()?;
    let year = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
