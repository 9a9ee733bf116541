//! Time axis for generated series: the fixed year domain, calendar
//! months, and the four-season bucketing used by monthly tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ZagrosError;

/// First year of every generated series.
pub const FIRST_YEAR: i32 = 1950;
/// Last year of every generated series (inclusive).
pub const LAST_YEAR: i32 = 2023;

/// The full year domain, inclusive on both ends.
pub fn years() -> RangeInclusive<i32> {
    FIRST_YEAR..=LAST_YEAR
}

/// Calendar months, 1-based.
pub fn months() -> RangeInclusive<u32> {
    1..=12
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for a 1-based month number.
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`; callers only ever iterate the
/// fixed [`months`] range.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Calendar season bucket, December-anchored winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Seasons in the canonical chart ordering.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3 | 4 | 5 => Season::Spring,
            6 | 7 | 8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ZagrosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            other => Err(ZagrosError::Config(format!("unknown season '{other}'"))),
        }
    }
}

/// Parse a month given either its 1-based number or English name.
pub fn parse_month(s: &str) -> Result<u32, ZagrosError> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(ZagrosError::Config(format!("month {n} out of range 1..=12")));
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(trimmed))
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| ZagrosError::Config(format!("unknown month '{trimmed}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_domain_bounds() {
        assert_eq!(years().count(), 74);
        assert_eq!(years().next(), Some(1950));
        assert_eq!(years().last(), Some(2023));
    }

    #[test]
    fn season_buckets_match_calendar() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Autumn);
    }

    #[test]
    fn month_names_align_with_numbers() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn parse_month_accepts_names_and_numbers() {
        assert_eq!(parse_month("7").unwrap(), 7);
        assert_eq!(parse_month("july").unwrap(), 7);
        assert_eq!(parse_month(" December ").unwrap(), 12);
        assert!(parse_month("0").is_err());
        assert!(parse_month("Smarch").is_err());
    }
}
