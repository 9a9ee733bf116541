//! Per-city statistics panels.
//!
//! Mirrors what the dashboard's side column shows for each selected city:
//! the latest value of an indicator, its historical mean and the delta
//! between them, seasonal averages, and counts of flagged rows (extreme
//! heat days, drought months, water-stress months).

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

use zagros_core::time::Season;
use zagros_core::City;

/// Latest-vs-historical summary of one indicator column for one city.
#[derive(Debug, Clone, Serialize)]
pub struct ValueStats {
    pub city: String,
    pub column: String,
    /// Value of the most recent row in the filtered table.
    pub latest: f64,
    /// Mean over every row in the filtered table.
    pub mean: f64,
    /// `latest - mean`.
    pub delta: f64,
}

fn city_rows(df: &DataFrame, city: City) -> Result<DataFrame> {
    let mask = df
        .column("City")
        .context("table has no City column")?
        .utf8()
        .context("City column is not a string column")?
        .equal(city.as_str());
    df.filter(&mask).context("filtering rows for city")
}

/// Summarize `column` for `city`, or `None` if the city has no rows
/// (e.g. it was filtered out of the selection).
pub fn value_stats(df: &DataFrame, city: City, column: &str) -> Result<Option<ValueStats>> {
    let rows = city_rows(df, city)?;
    if rows.height() == 0 {
        return Ok(None);
    }
    let values = rows
        .column(column)
        .with_context(|| format!("table has no '{column}' column"))?
        .f64()
        .with_context(|| format!("'{column}' is not a float column"))?;

    let latest = match values.get(rows.height() - 1) {
        Some(value) => value,
        None => return Ok(None),
    };
    let mean = match values.mean() {
        Some(mean) => mean,
        None => return Ok(None),
    };

    Ok(Some(ValueStats {
        city: city.as_str().to_string(),
        column: column.to_string(),
        latest,
        mean,
        delta: latest - mean,
    }))
}

/// Mean of `column` per season for `city`, in canonical season order.
/// Seasons with no rows are omitted. Errors if the table has no `Season`
/// column; yearly tables have no seasonal breakdown.
pub fn seasonal_means(df: &DataFrame, city: City, column: &str) -> Result<Vec<(Season, f64)>> {
    let rows = city_rows(df, city)?;
    let seasons = rows
        .column("Season")
        .context("table has no Season column")?
        .utf8()?;
    let values = rows
        .column(column)
        .with_context(|| format!("table has no '{column}' column"))?
        .f64()?;

    let mut sums = [(0.0f64, 0usize); 4];
    for (season, value) in seasons.into_iter().zip(values.into_iter()) {
        if let (Some(season), Some(value)) = (season, value) {
            if let Ok(season) = season.parse::<Season>() {
                let slot = &mut sums[season as usize];
                slot.0 += value;
                slot.1 += 1;
            }
        }
    }

    let mut means = Vec::with_capacity(4);
    for season in Season::ALL {
        let (sum, count) = sums[season as usize];
        if count > 0 {
            means.push((season, sum / count as f64));
        }
    }
    Ok(means)
}

/// Count rows where a flag column is set for `city`.
///
/// Boolean columns count `true` rows; numeric flag columns count rows
/// above 0.5, matching how the dashboard tallied 0/1 risk columns.
pub fn flag_count(df: &DataFrame, city: City, column: &str) -> Result<usize> {
    let rows = city_rows(df, city)?;
    let flags = rows
        .column(column)
        .with_context(|| format!("table has no '{column}' column"))?;

    let count = match flags.dtype() {
        DataType::Boolean => flags.bool()?.into_iter().flatten().filter(|&b| b).count(),
        _ => flags
            .cast(&DataType::Float64)
            .with_context(|| format!("'{column}' is not a flag column"))?
            .f64()?
            .into_iter()
            .flatten()
            .filter(|&v| v > 0.5)
            .count(),
    };
    Ok(count)
}
