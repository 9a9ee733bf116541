use std::fs;

use anyhow::{anyhow, Result};

use zagros_core::TimeFrame;
use zagros_viz::{chart_spec, View};

pub fn handle(category: &str, indicator: &str, time_frame: &str, out: Option<&str>) -> Result<()> {
    let view = View::parse(category, indicator)?;
    let time_frame = time_frame.parse::<TimeFrame>()?;
    let spec = chart_spec(view, time_frame);

    let payload = serde_json::to_string_pretty(&spec)
        .map_err(|err| anyhow!("serializing chart spec to JSON: {err}"))?;
    if let Some(path) = out {
        fs::write(path, &payload)?;
        println!("Chart spec written to {path}");
    } else {
        println!("{payload}");
    }
    Ok(())
}
