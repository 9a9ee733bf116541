//! # zagros-viz: Chart Dispatch
//!
//! Maps a (category, indicator, time frame) pick to a declarative
//! [`ChartSpec`] a rendering collaborator can draw without knowing how the
//! data was produced. The dispatch is a tagged enum per category rather
//! than string comparison chains, so adding a view is a compile error
//! until every match arm handles it.
//!
//! Building a chart specification never touches a data frame. It names
//! the source family, the aggregation to run, and the visual encoding.

pub mod chart;
pub mod sources;

pub use chart::{chart_spec, ChartKind, ChartSpec, View};
pub use sources::{source_for, SourceRef};
