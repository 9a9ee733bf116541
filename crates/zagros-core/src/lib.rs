//! # zagros-core: Climate Indicator Vocabulary
//!
//! Provides the shared vocabulary for the Zagros toolkit: the fixed set of
//! cities, the time axis (years, months, seasons), the indicator families,
//! and the per-city baseline parameters every generated table starts from.
//!
//! ## Design Philosophy
//!
//! The city set and every baseline constant are **fixed configuration**:
//! they never change within a process and are deliberately kept as plain
//! enums and `match` tables rather than loaded data. This gives downstream
//! crates compile-time exhaustiveness: adding a city or an indicator
//! family is a type error until every table builder and chart dispatch
//! handles it.
//!
//! ## Modules
//!
//! - [`params`] - Per-city baseline parameter tables
//! - [`time`] - Year/month domain, seasons, month names
//! - [`error`] - Unified error type for the toolkit
//! - [`diagnostics`] - Non-fatal issue collection for data sources

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod diagnostics;
pub mod error;
pub mod params;
pub mod time;

pub use diagnostics::{DiagnosticIssue, Diagnostics, Severity};
pub use error::{ZagrosError, ZagrosResult};
pub use time::{month_name, months, years, Season, FIRST_YEAR, LAST_YEAR};

/// One of the fixed set of cities series are generated for.
///
/// The set is closed: there is no registry and no lifecycle. Wire and
/// column values use the local display names (`Hewlêr`, `Kerkûk`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "Hewlêr")]
    Hewler,
    #[serde(rename = "Dihok")]
    Dihok,
    #[serde(rename = "Silêmanî")]
    Silemani,
    #[serde(rename = "Helebce")]
    Helebce,
    #[serde(rename = "Kerkûk")]
    Kerkuk,
}

impl City {
    /// All cities, in the canonical ordering used by every table builder.
    pub const ALL: [City; 5] = [
        City::Hewler,
        City::Dihok,
        City::Silemani,
        City::Helebce,
        City::Kerkuk,
    ];

    /// Display name as it appears in the `City` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Hewler => "Hewlêr",
            City::Dihok => "Dihok",
            City::Silemani => "Silêmanî",
            City::Helebce => "Helebce",
            City::Kerkuk => "Kerkûk",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = ZagrosError;

    /// Accepts the display name or its ASCII fallback, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hewlêr" | "hewler" | "erbil" => Ok(City::Hewler),
            "dihok" | "duhok" => Ok(City::Dihok),
            "silêmanî" | "silemani" | "sulaymaniyah" => Ok(City::Silemani),
            "helebce" | "halabja" => Ok(City::Helebce),
            "kerkûk" | "kerkuk" | "kirkuk" => Ok(City::Kerkuk),
            other => Err(ZagrosError::Config(format!("unknown city '{other}'"))),
        }
    }
}

/// A category of generated quantity with its own baselines, trend, and
/// noise parameters. Monthly families carry `Month`/`MonthName`/`Season`
/// columns; yearly families carry only `Year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorFamily {
    Temperature,
    Rainfall,
    WaterResources,
    Economic,
    Health,
    AirQuality,
    Vegetation,
}

impl IndicatorFamily {
    pub const ALL: [IndicatorFamily; 7] = [
        IndicatorFamily::Temperature,
        IndicatorFamily::Rainfall,
        IndicatorFamily::WaterResources,
        IndicatorFamily::Economic,
        IndicatorFamily::Health,
        IndicatorFamily::AirQuality,
        IndicatorFamily::Vegetation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorFamily::Temperature => "temperature",
            IndicatorFamily::Rainfall => "rainfall",
            IndicatorFamily::WaterResources => "water-resources",
            IndicatorFamily::Economic => "economic",
            IndicatorFamily::Health => "health",
            IndicatorFamily::AirQuality => "air-quality",
            IndicatorFamily::Vegetation => "vegetation",
        }
    }

    /// Whether rows are keyed by (year, month) rather than year alone.
    pub fn is_monthly(&self) -> bool {
        matches!(
            self,
            IndicatorFamily::Temperature
                | IndicatorFamily::Rainfall
                | IndicatorFamily::WaterResources
                | IndicatorFamily::Health
        )
    }
}

impl fmt::Display for IndicatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorFamily {
    type Err = ZagrosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" => Ok(IndicatorFamily::Temperature),
            "rainfall" => Ok(IndicatorFamily::Rainfall),
            "water-resources" | "water_resources" | "water" => {
                Ok(IndicatorFamily::WaterResources)
            }
            "economic" => Ok(IndicatorFamily::Economic),
            "health" => Ok(IndicatorFamily::Health),
            "air-quality" | "air_quality" | "air" => Ok(IndicatorFamily::AirQuality),
            "vegetation" => Ok(IndicatorFamily::Vegetation),
            other => Err(ZagrosError::Config(format!(
                "unknown indicator family '{other}'; use temperature, rainfall, \
                 water-resources, economic, health, air-quality, or vegetation"
            ))),
        }
    }
}

/// Granularity a selection/aggregation operates at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Yearly,
    Monthly,
    Seasonal,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Yearly => "yearly",
            TimeFrame::Monthly => "monthly",
            TimeFrame::Seasonal => "seasonal",
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = ZagrosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yearly" => Ok(TimeFrame::Yearly),
            "monthly" => Ok(TimeFrame::Monthly),
            "seasonal" => Ok(TimeFrame::Seasonal),
            other => Err(ZagrosError::Config(format!(
                "unknown time frame '{other}'; use yearly, monthly, or seasonal"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_roundtrips_through_display_name() {
        for city in City::ALL {
            assert_eq!(city.as_str().parse::<City>().unwrap(), city);
        }
    }

    #[test]
    fn city_parses_ascii_fallback() {
        assert_eq!("hewler".parse::<City>().unwrap(), City::Hewler);
        assert_eq!("Kerkuk".parse::<City>().unwrap(), City::Kerkuk);
        assert!("mosul".parse::<City>().is_err());
    }

    #[test]
    fn city_serde_uses_display_names() {
        let json = serde_json::to_string(&City::Silemani).unwrap();
        assert_eq!(json, "\"Silêmanî\"");
        let back: City = serde_json::from_str(&json).unwrap();
        assert_eq!(back, City::Silemani);
    }

    #[test]
    fn family_granularity() {
        assert!(IndicatorFamily::Temperature.is_monthly());
        assert!(IndicatorFamily::Health.is_monthly());
        assert!(!IndicatorFamily::Economic.is_monthly());
        assert!(!IndicatorFamily::Vegetation.is_monthly());
    }

    #[test]
    fn family_parses_aliases() {
        assert_eq!(
            "water".parse::<IndicatorFamily>().unwrap(),
            IndicatorFamily::WaterResources
        );
        assert_eq!(
            "air_quality".parse::<IndicatorFamily>().unwrap(),
            IndicatorFamily::AirQuality
        );
    }
}
