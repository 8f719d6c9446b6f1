//! Calendar-derived inputs: daily seed, difficulty level, weekday name.
//!
//! Everything random in a day's puzzle is keyed off the local calendar
//! date, so these are the only functions that touch the clock.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Integer encoding of the date as `YYYY * 10000 + MM * 100 + DD`.
///
/// One value per calendar day; seeds the RNG and keys the saved progress.
pub fn daily_seed(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Difficulty level 1–7 derived from the day of week (Mon=1 .. Sun=7).
pub fn difficulty_for(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}

/// English weekday name, for the intro and header display.
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Coarse difficulty tier used by front ends to colour the level badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    Easy,
    Medium,
    Hard,
}

/// Band for a difficulty level: 1–2 easy, 3–5 medium, 6–7 hard.
pub fn difficulty_band(level: u8) -> DifficultyBand {
    match level {
        0..=2 => DifficultyBand::Easy,
        3..=5 => DifficultyBand::Medium,
        _ => DifficultyBand::Hard,
    }
}
