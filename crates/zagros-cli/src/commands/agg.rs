use anyhow::{anyhow, Result};

use zagros_analytics::{
    season_by_year, season_by_year_sum, seasonal_mean, yearly_mean, yearly_sum, Agg,
};
use zagros_core::IndicatorFamily;
use zagros_series::{cached_table, GeneratorConfig};

use crate::commands::util::write_csv;

pub fn handle(family: &str, value: &str, agg: &str, by: &str, out: Option<&str>) -> Result<()> {
    let family = family.parse::<IndicatorFamily>()?;
    let table = cached_table(family, &GeneratorConfig::default())?;
    let agg = agg.parse::<Agg>()?;

    let mut result = match (by.trim().to_lowercase().as_str(), agg) {
        ("year", Agg::Mean) => yearly_mean(&table, value)?,
        ("year", Agg::Sum) => yearly_sum(&table, value)?,
        ("season", Agg::Mean) => seasonal_mean(&table, value)?,
        ("season-year", Agg::Mean) => season_by_year(&table, value)?,
        ("season-year", Agg::Sum) => season_by_year_sum(&table, value)?,
        ("season", Agg::Sum) => {
            return Err(anyhow!("seasonal sums are not a dashboard shape; use mean"))
        }
        (other, _) => {
            return Err(anyhow!(
                "unsupported grouping '{}'; use year, season, or season-year",
                other
            ))
        }
    };

    if let Some(path) = out {
        write_csv(&mut result, path)?;
        println!("Wrote {} row(s) to {}", result.height(), path);
    } else {
        println!("{result}");
    }
    Ok(())
}
