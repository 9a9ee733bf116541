//! Group-by aggregation shapes used by the dashboard views.
//!
//! Output row order is unspecified; consumers key on the group columns.

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;

/// Mean of `value` per (Year, City): the yearly view of monthly tables.
pub fn yearly_mean(df: &DataFrame, value: &str) -> Result<DataFrame> {
    grouped(df, &["Year", "City"], value, Agg::Mean)
}

/// Sum of `value` per (Year, City): yearly rainfall totals.
pub fn yearly_sum(df: &DataFrame, value: &str) -> Result<DataFrame> {
    grouped(df, &["Year", "City"], value, Agg::Sum)
}

/// Mean of `value` per (Season, City): the seasonal comparison view.
pub fn seasonal_mean(df: &DataFrame, value: &str) -> Result<DataFrame> {
    grouped(df, &["Season", "City"], value, Agg::Mean)
}

/// Mean of `value` per (Year, Season, City): season-faceted trend lines.
pub fn season_by_year(df: &DataFrame, value: &str) -> Result<DataFrame> {
    grouped(df, &["Year", "Season", "City"], value, Agg::Mean)
}

/// Sum of `value` per (Year, Season, City): season-faceted rainfall totals.
pub fn season_by_year_sum(df: &DataFrame, value: &str) -> Result<DataFrame> {
    grouped(df, &["Year", "Season", "City"], value, Agg::Sum)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agg {
    Mean,
    Sum,
}

impl std::str::FromStr for Agg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(Agg::Mean),
            "sum" => Ok(Agg::Sum),
            other => Err(anyhow!("unsupported aggregation '{}'; use mean or sum", other)),
        }
    }
}

fn grouped(df: &DataFrame, keys: &[&str], value: &str, agg: Agg) -> Result<DataFrame> {
    let columns = df.get_column_names();
    for key in keys {
        if !columns.contains(key) {
            return Err(anyhow!(
                "table has no '{}' column; cannot group by it",
                key
            ));
        }
    }
    if !columns.contains(&value) {
        return Err(anyhow!("table has no '{}' column to aggregate", value));
    }

    let expr = match agg {
        Agg::Mean => col(value).mean(),
        Agg::Sum => col(value).sum(),
    };
    let key_exprs: Vec<Expr> = keys.iter().map(|k| col(k)).collect();

    df.clone()
        .lazy()
        .group_by(key_exprs)
        .agg([expr])
        .collect()
        .context("running groupby aggregation")
}
