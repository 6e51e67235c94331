use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::error::StartError;

/// The event started with 2015.
const FIRST_YEAR: i32 = 2015;
/// Puzzles run through December 25th.
const LAST_DAY: u32 = 25;

/// A validated (day, year) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub day: u32,
    pub year: i32,
}

impl Puzzle {
    /// The workspace member name for this day, e.g. `day05`.
    pub fn crate_name(&self) -> String {
        format!("day{:02}", self.day)
    }
}

/// Resolve the day/year overrides against `today`.
///
/// Explicit values outside [1, 25] / [2015, current year] are rejected
/// before any side effect. An absent day falls back to today's day of
/// month, clamped to 25 so runs after Christmas still target the final
/// puzzle; an absent year falls back to the current year.
pub fn resolve(day: Option<u32>, year: Option<i32>, today: NaiveDate) -> Result<Puzzle> {
    let current_year = today.year();

    let day = match day {
        Some(d) if (1..=LAST_DAY).contains(&d) => d,
        Some(d) => return Err(StartError::DayOutOfRange(d).into()),
        None => today.day().min(LAST_DAY),
    };

    let year = match year {
        Some(y) if (FIRST_YEAR..=current_year).contains(&y) => y,
        Some(y) => {
            return Err(StartError::YearOutOfRange {
                year: y,
                current: current_year,
            }
            .into());
        }
        None => current_year,
    };

    Ok(Puzzle { day, year })
}
