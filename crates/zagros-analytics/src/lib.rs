//! # zagros-analytics: Table Filtering, Aggregation, and Statistics
//!
//! The downstream collaborator operations every dashboard view is built
//! from: filter a generated table to a selection (cities, year range,
//! months or seasons), run the group-by shapes (yearly mean/sum, seasonal
//! mean), and summarize a city's indicators into a statistics panel.
//!
//! All operations are schema-driven: a month filter applies only when the
//! table carries a `MonthName` column, a season filter only when it
//! carries `Season`. Degenerate selections (no cities, inverted year
//! range) return an empty frame with the schema intact rather than erring.

pub mod aggregate;
pub mod filter;
pub mod stats;

pub use aggregate::{season_by_year, season_by_year_sum, seasonal_mean, yearly_mean, yearly_sum, Agg};
pub use filter::{apply, Selection};
pub use stats::{flag_count, seasonal_means, value_stats, ValueStats};
