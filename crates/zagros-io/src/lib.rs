//! # zagros-io: Spreadsheet-Backed Table Adapter
//!
//! Loads the government data files some dashboard variants ship with and
//! exposes them under the same row/column contract the synthetic generator
//! uses, so the rendering collaborator cannot distinguish real from
//! synthetic sources.
//!
//! ## Error Recovery
//!
//! A failed read never aborts the page. [`tabular::load_table`] always
//! returns a frame: the contracted data on success, or a zero-row frame
//! with the full contracted schema on any read/parse/contract failure,
//! with the failure surfaced through [`zagros_core::Diagnostics`] for
//! inline display.

pub mod tabular;

pub use tabular::{
    load_table, waste_composition, waste_forecast, ColumnContract, ColumnKind, TableContract,
};
