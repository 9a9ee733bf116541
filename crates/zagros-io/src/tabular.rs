//! Contracted CSV loading with placeholder-on-failure semantics.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;

use zagros_core::Diagnostics;

/// Expected shape of one contracted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
}

/// One column the source file must provide. Header names are compared
/// after trimming surrounding whitespace.
#[derive(Debug, Clone)]
pub struct ColumnContract {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// A named source file and the columns it must carry.
#[derive(Debug, Clone)]
pub struct TableContract {
    pub name: &'static str,
    pub path: PathBuf,
    pub columns: Vec<ColumnContract>,
}

impl TableContract {
    /// Same contract against a different file location.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

/// Waste composition shares: `Type` / `Percentage`.
pub fn waste_composition() -> TableContract {
    TableContract {
        name: "waste-composition",
        path: PathBuf::from("data/waste_composition.csv"),
        columns: vec![
            ColumnContract {
                name: "Type",
                kind: ColumnKind::Text,
            },
            ColumnContract {
                name: "Percentage",
                kind: ColumnKind::Numeric,
            },
        ],
    }
}

/// Waste generation forecast: `Year` / `Total Waste Generation (ton/d)`.
pub fn waste_forecast() -> TableContract {
    TableContract {
        name: "waste-forecast",
        path: PathBuf::from("data/waste_forecast.csv"),
        columns: vec![
            ColumnContract {
                name: "Year",
                kind: ColumnKind::Numeric,
            },
            ColumnContract {
                name: "Total Waste Generation (ton/d)",
                kind: ColumnKind::Numeric,
            },
        ],
    }
}

/// Zero-row frame carrying the full contracted schema.
fn empty_frame(contract: &TableContract) -> DataFrame {
    let columns: Vec<Series> = contract
        .columns
        .iter()
        .map(|column| match column.kind {
            ColumnKind::Text => Series::new_empty(column.name, &DataType::Utf8),
            ColumnKind::Numeric => Series::new_empty(column.name, &DataType::Float64),
        })
        .collect();
    // Building a frame from equal-length (here: empty) columns cannot fail.
    DataFrame::new(columns).unwrap_or_default()
}

/// Load a contracted table.
///
/// On success the frame holds exactly the contracted columns, trimmed
/// header names, numeric columns cast to floats with unparseable cells
/// dropped row-wise. On any failure the frame is the empty placeholder and
/// the diagnostics carry a warning; this function never errors.
pub fn load_table(contract: &TableContract) -> (DataFrame, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    match try_load(contract, &mut diagnostics) {
        Ok(df) => (df, diagnostics),
        Err(err) => {
            diagnostics.add_warning_with_entity(
                "read",
                &format!("{} unavailable: {err:#}; showing no rows", contract.name),
                &contract.path.display().to_string(),
            );
            (empty_frame(contract), diagnostics)
        }
    }
}

fn try_load(contract: &TableContract, diagnostics: &mut Diagnostics) -> Result<DataFrame> {
    let mut df = read_csv(&contract.path)?;

    // Header cells in these files often carry stray whitespace.
    let trimmed: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    df.set_column_names(&trimmed)
        .context("renaming trimmed headers")?;

    for column in &contract.columns {
        if df.column(column.name).is_err() {
            return Err(anyhow!("missing required column '{}'", column.name));
        }
    }

    let mut numeric_names: Vec<&str> = Vec::new();
    for column in &contract.columns {
        if column.kind == ColumnKind::Numeric {
            let cast = df
                .column(column.name)?
                .cast(&DataType::Float64)
                .with_context(|| format!("casting column '{}' to floats", column.name))?;
            df.replace(column.name, cast)
                .with_context(|| format!("replacing column '{}'", column.name))?;
            numeric_names.push(column.name);
        }
    }

    let keep: Vec<&str> = contract.columns.iter().map(|c| c.name).collect();
    let df = df.select(keep).context("selecting contracted columns")?;

    let before = df.height();
    let df = df
        .drop_nulls(Some(&numeric_names[..]))
        .context("dropping rows with non-numeric values")?;
    let dropped = before - df.height();
    if dropped > 0 {
        diagnostics.add_warning_with_entity(
            "coerce",
            &format!("dropped {dropped} row(s) with non-numeric values"),
            contract.name,
        );
    }

    Ok(df)
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = CsvReader::new(&mut file);
    reader.has_header(true).finish().context("reading CSV file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_contracted_columns_with_trimmed_headers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("composition.csv");
        fs::write(&path, " Type , Percentage \nOrganic,55.2\nPlastic,12.5\n").unwrap();

        let (df, diagnostics) = load_table(&waste_composition().with_path(&path));
        assert_eq!(df.height(), 2);
        assert_eq!(df.get_column_names(), &["Type", "Percentage"]);
        assert!(!diagnostics.has_issues());

        let shares = df.column("Percentage").unwrap().f64().unwrap();
        assert_eq!(shares.get(0), Some(55.2));
    }

    #[test]
    fn drops_rows_with_non_numeric_cells_and_warns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("composition.csv");
        fs::write(&path, "Type,Percentage\nOrganic,55.2\nMetal,n/a\nGlass,4.1\n").unwrap();

        let (df, diagnostics) = load_table(&waste_composition().with_path(&path));
        assert_eq!(df.height(), 2);
        assert!(diagnostics.has_warnings());
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn missing_file_yields_placeholder_and_warning() {
        let contract = waste_forecast().with_path("/nonexistent/forecast.csv");
        let (df, diagnostics) = load_table(&contract);

        assert_eq!(df.height(), 0);
        assert_eq!(
            df.get_column_names(),
            &["Year", "Total Waste Generation (ton/d)"]
        );
        assert!(diagnostics.has_warnings());
    }

    #[test]
    fn missing_column_yields_placeholder_and_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("composition.csv");
        fs::write(&path, "Kind,Share\nOrganic,55.2\n").unwrap();

        let (df, diagnostics) = load_table(&waste_composition().with_path(&path));
        assert_eq!(df.height(), 0);
        assert_eq!(df.get_column_names(), &["Type", "Percentage"]);
        assert!(diagnostics.has_warnings());
    }

    #[test]
    fn extra_columns_are_not_part_of_the_contract() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forecast.csv");
        fs::write(
            &path,
            "Year,Total Waste Generation (ton/d),Comment\n2025,3100.5,projected\n",
        )
        .unwrap();

        let (df, diagnostics) = load_table(&waste_forecast().with_path(&path));
        assert_eq!(df.height(), 1);
        assert_eq!(
            df.get_column_names(),
            &["Year", "Total Waste Generation (ton/d)"]
        );
        assert!(!diagnostics.has_issues());
    }
}
