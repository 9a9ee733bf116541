//! # zagros-series: Synthetic Series Generator
//!
//! Builds the synthetic climate and energy tables the rest of the toolkit
//! consumes: one denormalized polars `DataFrame` per indicator family,
//! covering every (city, year[, month]) combination in the fixed domain.
//!
//! Every value decomposes as baseline + seasonal term + trend term + an
//! independent Gaussian draw, followed by family-specific post-processing
//! (non-negativity clamps, index clamps, derived flags). The trend is a
//! two-segment piecewise linear function with its breakpoint at 1980;
//! noise is i.i.d. per row with no serial correlation. Both shapes are
//! deliberate simplifications to reproduce, not to upgrade.
//!
//! Generation is eager and pure: a builder walks the nested
//! year/month/city ranges and materializes the whole table in one pass.
//! Repeated lookups should go through [`cached_table`], which memoizes
//! frames process-wide keyed by (family, config).
//!
//! ```no_run
//! use zagros_core::IndicatorFamily;
//! use zagros_series::{cached_table, GeneratorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let table = cached_table(IndicatorFamily::Temperature, &GeneratorConfig::default())?;
//!     println!("{} rows", table.height());
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use polars::prelude::DataFrame;
use rand::rngs::StdRng;
use rand::SeedableRng;

use zagros_core::IndicatorFamily;

pub mod cache;
mod families;
pub mod noise;
pub mod seasonal;
pub mod trend;

pub use cache::cached_table;

/// Knobs for a generation run.
///
/// `noise_scale` multiplies every noise standard deviation; `0.0` disables
/// noise entirely and makes output bit-for-bit reproducible regardless of
/// seed. With a fixed seed the noisy output is reproducible too.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Multiplier on every family's noise standard deviation (0 = no noise).
    pub noise_scale: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: Some(42),
            noise_scale: 1.0,
        }
    }
}

impl GeneratorConfig {
    /// Noise-free configuration, the test seam for exact expectations.
    pub fn noiseless() -> Self {
        Self {
            seed: Some(42),
            noise_scale: 0.0,
        }
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Build the full table for one indicator family.
///
/// Bypasses the memoization cache; most callers want [`cached_table`].
pub fn generate(family: IndicatorFamily, config: &GeneratorConfig) -> Result<DataFrame> {
    match family {
        IndicatorFamily::Temperature => families::temperature(config),
        IndicatorFamily::Rainfall => families::rainfall(config),
        IndicatorFamily::WaterResources => families::water_resources(config),
        IndicatorFamily::Economic => families::economic(config),
        IndicatorFamily::Health => families::health(config),
        IndicatorFamily::AirQuality => families::air_quality(config),
        IndicatorFamily::Vegetation => families::vegetation(config),
    }
}

/// Numeric value columns a family's table carries, in column order.
pub fn value_columns(family: IndicatorFamily) -> &'static [&'static str] {
    match family {
        IndicatorFamily::Temperature => &["Temperature"],
        IndicatorFamily::Rainfall => &["Rainfall"],
        IndicatorFamily::WaterResources => &["RiverLevel", "GroundwaterLevel"],
        IndicatorFamily::Economic => &["EnergyDemand", "AgriculturalProduction"],
        IndicatorFamily::Health => &["HeatStressIndex", "AirHealthIndex"],
        IndicatorFamily::AirQuality => &["PM25", "Visibility"],
        IndicatorFamily::Vegetation => &["VegetationCover"],
    }
}

/// Derived flag columns a family's table carries, if any.
pub fn flag_columns(family: IndicatorFamily) -> &'static [&'static str] {
    match family {
        IndicatorFamily::Temperature => &["ExtremeHeatDay"],
        IndicatorFamily::Rainfall => &["DroughtRisk"],
        IndicatorFamily::WaterResources => &["WaterStress"],
        IndicatorFamily::Economic
        | IndicatorFamily::Health
        | IndicatorFamily::AirQuality
        | IndicatorFamily::Vegetation => &[],
    }
}
