use anyhow::{anyhow, Result};
use tracing::warn;

use zagros_io::{load_table, waste_composition, waste_forecast};

pub fn handle(table: &str, path: Option<&str>) -> Result<()> {
    let contract = match table.trim().to_lowercase().as_str() {
        "composition" => waste_composition(),
        "forecast" => waste_forecast(),
        other => {
            return Err(anyhow!(
                "unknown source table '{}'; use composition or forecast",
                other
            ))
        }
    };
    let contract = match path {
        Some(path) => contract.with_path(path),
        None => contract,
    };

    let (df, diagnostics) = load_table(&contract);
    for issue in &diagnostics.issues {
        warn!("{issue}");
    }

    println!("{}", df.head(Some(10)));
    println!("{} row(s) total", df.height());
    Ok(())
}
