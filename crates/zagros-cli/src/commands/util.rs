use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use zagros_series::GeneratorConfig;

/// Generator config from the CLI flags; an omitted seed keeps the fixed
/// dashboard default so repeated invocations line up.
pub fn config_from_flags(seed: Option<u64>, noise_scale: f64) -> GeneratorConfig {
    GeneratorConfig {
        seed: seed.or(GeneratorConfig::default().seed),
        noise_scale,
    }
}

pub fn write_csv(df: &mut DataFrame, path: &str) -> Result<()> {
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(df).context("writing CSV file")
}
