use std::io::{self, Write};

use anyhow::Result;
use tabwriter::TabWriter;

use zagros_analytics::{filter, flag_count, seasonal_means, value_stats};
use zagros_cli::cli::SelectionArgs;
use zagros_core::IndicatorFamily;
use zagros_series::{cached_table, flag_columns, value_columns, GeneratorConfig};

pub fn handle(family: &str, selection_args: &SelectionArgs) -> Result<()> {
    let family = family.parse::<IndicatorFamily>()?;
    let table = cached_table(family, &GeneratorConfig::default())?;

    let selection = selection_args.to_selection()?;
    let filtered = filter::apply(&table, &selection)?;

    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "CITY\tINDICATOR\tLATEST\tMEAN\tDELTA")?;
    for &city in &selection.cities {
        for column in value_columns(family) {
            if let Some(stats) = value_stats(&filtered, city, column)? {
                writeln!(
                    writer,
                    "{}\t{}\t{:.1}\t{:.1}\t{:+.1}",
                    stats.city, stats.column, stats.latest, stats.mean, stats.delta
                )?;
            }
        }
    }
    writer.flush()?;

    if family.is_monthly() {
        let mut writer = TabWriter::new(io::stdout());
        writeln!(writer, "\nCITY\tSEASON\t{}", value_columns(family)[0].to_uppercase())?;
        for &city in &selection.cities {
            for (season, mean) in seasonal_means(&filtered, city, value_columns(family)[0])? {
                writeln!(writer, "{}\t{}\t{:.1}", city, season, mean)?;
            }
        }
        writer.flush()?;
    }

    let flags = flag_columns(family);
    if !flags.is_empty() {
        let mut writer = TabWriter::new(io::stdout());
        writeln!(writer, "\nCITY\tFLAG\tCOUNT")?;
        for &city in &selection.cities {
            for flag in flags {
                let count = flag_count(&filtered, city, flag)?;
                writeln!(writer, "{}\t{}\t{}", city, flag, count)?;
            }
        }
        writer.flush()?;
    }

    Ok(())
}
