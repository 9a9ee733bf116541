//! Selection filtering for generated tables.

use anyhow::{Context, Result};
use polars::prelude::*;

use zagros_core::time::{month_name, Season};
use zagros_core::{City, TimeFrame, FIRST_YEAR, LAST_YEAR};

/// What the user picked in the sidebar: a city subset, an inclusive year
/// range, and an optional month or season subset depending on the time
/// frame. Empty `months`/`seasons` means "all".
#[derive(Debug, Clone)]
pub struct Selection {
    pub cities: Vec<City>,
    pub start_year: i32,
    pub end_year: i32,
    pub time_frame: TimeFrame,
    pub months: Vec<u32>,
    pub seasons: Vec<Season>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            cities: City::ALL.to_vec(),
            start_year: FIRST_YEAR,
            end_year: LAST_YEAR,
            time_frame: TimeFrame::Yearly,
            months: Vec::new(),
            seasons: Vec::new(),
        }
    }
}

impl Selection {
    /// Selection over the full domain for the given cities.
    pub fn for_cities(cities: Vec<City>) -> Self {
        Self {
            cities,
            ..Self::default()
        }
    }
}

/// OR-fold of equality tests against a string column. An empty value set
/// folds to `false`, so the filtered frame is empty but keeps its schema.
fn membership(column: &str, values: &[&str]) -> Expr {
    values.iter().fold(lit(false), |acc, value| {
        acc.or(col(column).eq(lit(value.to_string())))
    })
}

/// Filter a family table down to a selection.
///
/// Year range and city membership always apply. The month subset applies
/// only in the Monthly time frame and only when the table has a
/// `MonthName` column; likewise seasons for `Season`. Yearly tables pass
/// through month/season filters untouched.
pub fn apply(df: &DataFrame, selection: &Selection) -> Result<DataFrame> {
    let city_names: Vec<&str> = selection.cities.iter().map(|c| c.as_str()).collect();
    let mut predicate = col("Year")
        .gt_eq(lit(selection.start_year))
        .and(col("Year").lt_eq(lit(selection.end_year)))
        .and(membership("City", &city_names));

    let columns = df.get_column_names();

    if selection.time_frame == TimeFrame::Monthly
        && !selection.months.is_empty()
        && columns.contains(&"MonthName")
    {
        let names: Vec<&str> = selection.months.iter().map(|&m| month_name(m)).collect();
        predicate = predicate.and(membership("MonthName", &names));
    }

    if selection.time_frame == TimeFrame::Seasonal
        && !selection.seasons.is_empty()
        && columns.contains(&"Season")
    {
        let names: Vec<&str> = selection.seasons.iter().map(|s| s.as_str()).collect();
        predicate = predicate.and(membership("Season", &names));
    }

    df.clone()
        .lazy()
        .filter(predicate)
        .collect()
        .context("filtering table to selection")
}

#[cfg(test)]
mod tests {
    use super::*;
    use zagros_series::{generate, GeneratorConfig};

    fn temperature_table() -> DataFrame {
        generate(
            zagros_core::IndicatorFamily::Temperature,
            &GeneratorConfig::noiseless(),
        )
        .unwrap()
    }

    #[test]
    fn filters_year_range_and_cities() {
        let df = temperature_table();
        let selection = Selection {
            cities: vec![City::Hewler, City::Dihok],
            start_year: 2000,
            end_year: 2010,
            ..Selection::default()
        };
        let filtered = apply(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 11 * 12 * 2);

        let years = filtered.column("Year").unwrap().i32().unwrap();
        for year in years.into_no_null_iter() {
            assert!((2000..=2010).contains(&year));
        }
    }

    #[test]
    fn empty_city_selection_keeps_schema() {
        let df = temperature_table();
        let selection = Selection {
            cities: Vec::new(),
            ..Selection::default()
        };
        let filtered = apply(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(filtered.get_column_names(), df.get_column_names());
    }

    #[test]
    fn inverted_year_range_yields_empty_frame() {
        let df = temperature_table();
        let selection = Selection {
            start_year: 2010,
            end_year: 2000,
            ..Selection::default()
        };
        let filtered = apply(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(filtered.get_column_names(), df.get_column_names());
    }

    #[test]
    fn month_subset_applies_in_monthly_frame() {
        let df = temperature_table();
        let selection = Selection {
            time_frame: TimeFrame::Monthly,
            months: vec![6, 7, 8],
            ..Selection::default()
        };
        let filtered = apply(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 74 * 3 * 5);
    }

    #[test]
    fn month_subset_ignored_for_yearly_tables() {
        let econ = generate(
            zagros_core::IndicatorFamily::Economic,
            &GeneratorConfig::noiseless(),
        )
        .unwrap();
        let selection = Selection {
            time_frame: TimeFrame::Monthly,
            months: vec![1],
            ..Selection::default()
        };
        // No MonthName column, so the month filter must not apply.
        let filtered = apply(&econ, &selection).unwrap();
        assert_eq!(filtered.height(), 74 * 5);
    }

    #[test]
    fn season_subset_applies_in_seasonal_frame() {
        let df = temperature_table();
        let selection = Selection {
            time_frame: TimeFrame::Seasonal,
            seasons: vec![Season::Winter],
            ..Selection::default()
        };
        let filtered = apply(&df, &selection).unwrap();
        assert_eq!(filtered.height(), 74 * 3 * 5);
        let seasons = filtered.column("Season").unwrap().utf8().unwrap();
        for season in seasons.into_no_null_iter() {
            assert_eq!(season, "Winter");
        }
    }
}
