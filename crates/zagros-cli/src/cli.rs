use clap::{Args, Parser, Subcommand};

use zagros_analytics::Selection;
use zagros_core::time::{parse_month, Season};
use zagros_core::{City, TimeFrame, FIRST_YEAR, LAST_YEAR};

#[derive(Parser, Debug)]
#[command(name = "zagros", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a synthetic indicator table and write it as CSV
    Generate {
        /// Indicator family (temperature, rainfall, water-resources, ...)
        #[arg(long)]
        family: String,
        /// Output CSV path
        #[arg(long)]
        out: String,
        /// Random seed (defaults to the fixed dashboard seed)
        #[arg(long)]
        seed: Option<u64>,
        /// Multiplier on noise standard deviations (0 disables noise)
        #[arg(long, default_value_t = 1.0)]
        noise_scale: f64,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Per-city statistics panel for an indicator family
    Stats {
        /// Indicator family
        #[arg(long)]
        family: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Resolve a dashboard view into a chart specification
    Chart {
        /// View category (temperature-precipitation, water-resources, ...)
        #[arg(long)]
        category: String,
        /// Indicator within the category (e.g. temperature-trends)
        #[arg(long)]
        indicator: String,
        /// yearly, monthly, or seasonal
        #[arg(long, default_value = "yearly")]
        time_frame: String,
        /// Write the JSON spec to a file instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Run a group-by aggregation over a generated table
    Agg {
        /// Indicator family
        #[arg(long)]
        family: String,
        /// Value column to aggregate
        #[arg(long)]
        value: String,
        /// mean or sum
        #[arg(long, default_value = "mean")]
        agg: String,
        /// Group keys: year, season, or season-year
        #[arg(long, default_value = "year")]
        by: String,
        /// Output CSV path (stdout preview when omitted)
        #[arg(long)]
        out: Option<String>,
    },
    /// Load a spreadsheet-backed table and report diagnostics
    Sources {
        /// Which built-in table: composition or forecast
        #[arg(long, default_value = "composition")]
        table: String,
        /// Override the file path
        #[arg(long)]
        path: Option<String>,
    },
}

/// Sidebar-equivalent filters shared by the table commands.
#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Cities to include, comma separated (default: all five)
    #[arg(long, value_delimiter = ',')]
    pub cities: Vec<String>,

    /// First year to include
    #[arg(long, default_value_t = FIRST_YEAR)]
    pub start_year: i32,

    /// Last year to include
    #[arg(long, default_value_t = LAST_YEAR)]
    pub end_year: i32,

    /// yearly, monthly, or seasonal
    #[arg(long, default_value = "yearly")]
    pub time_frame: String,

    /// Months to keep in the monthly frame (names or 1-12), comma separated
    #[arg(long, value_delimiter = ',')]
    pub months: Vec<String>,

    /// Seasons to keep in the seasonal frame, comma separated
    #[arg(long, value_delimiter = ',')]
    pub seasons: Vec<String>,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> anyhow::Result<Selection> {
        let cities = if self.cities.is_empty() {
            City::ALL.to_vec()
        } else {
            self.cities
                .iter()
                .map(|name| name.parse::<City>())
                .collect::<Result<Vec<_>, _>>()?
        };
        let months = self
            .months
            .iter()
            .map(|month| parse_month(month))
            .collect::<Result<Vec<_>, _>>()?;
        let seasons = self
            .seasons
            .iter()
            .map(|season| season.parse::<Season>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Selection {
            cities,
            start_year: self.start_year,
            end_year: self.end_year,
            time_frame: self.time_frame.parse::<TimeFrame>()?,
            months,
            seasons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn selection_defaults_cover_everything() {
        let args = SelectionArgs {
            cities: Vec::new(),
            start_year: FIRST_YEAR,
            end_year: LAST_YEAR,
            time_frame: "yearly".to_string(),
            months: Vec::new(),
            seasons: Vec::new(),
        };
        let selection = args.to_selection().unwrap();
        assert_eq!(selection.cities.len(), 5);
        assert!(selection.months.is_empty());
    }

    #[test]
    fn selection_rejects_unknown_city() {
        let args = SelectionArgs {
            cities: vec!["atlantis".to_string()],
            start_year: FIRST_YEAR,
            end_year: LAST_YEAR,
            time_frame: "yearly".to_string(),
            months: Vec::new(),
            seasons: Vec::new(),
        };
        assert!(args.to_selection().is_err());
    }
}
