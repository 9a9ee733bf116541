use anyhow::Result;

use zagros_analytics::filter;
use zagros_cli::cli::SelectionArgs;
use zagros_core::IndicatorFamily;
use zagros_series::cached_table;

use crate::commands::util::{config_from_flags, write_csv};

pub fn handle(
    family: &str,
    out: &str,
    seed: Option<u64>,
    noise_scale: f64,
    selection: &SelectionArgs,
) -> Result<()> {
    let family = family.parse::<IndicatorFamily>()?;
    let config = config_from_flags(seed, noise_scale);
    let table = cached_table(family, &config)?;

    let selection = selection.to_selection()?;
    let mut filtered = filter::apply(&table, &selection)?;

    write_csv(&mut filtered, out)?;
    println!("Wrote {} row(s) to {}", filtered.height(), out);
    Ok(())
}
