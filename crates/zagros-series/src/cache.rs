//! Process-wide memoization of generated tables.
//!
//! Inputs never vary within a run, so the cache has no eviction policy:
//! the first call for a (family, config) pair generates the table, every
//! later call hands back the same `Arc`. A `seed: None` config is cached
//! under a single key too: the entropy draw happens once per process,
//! which is exactly the regenerate-once semantics the UI layer expects.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use polars::prelude::DataFrame;

use zagros_core::IndicatorFamily;

use crate::{generate, GeneratorConfig};

/// Cache key: family plus the config fields that change the output.
/// `noise_scale` is keyed by bit pattern so distinct floats never collide.
type Key = (IndicatorFamily, Option<u64>, u64);

static TABLES: Lazy<Mutex<HashMap<Key, Arc<DataFrame>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn key_for(family: IndicatorFamily, config: &GeneratorConfig) -> Key {
    (family, config.seed, config.noise_scale.to_bits())
}

/// Memoized lookup of a family table.
///
/// Generates on first use and returns the shared frame afterwards.
pub fn cached_table(family: IndicatorFamily, config: &GeneratorConfig) -> Result<Arc<DataFrame>> {
    let key = key_for(family, config);
    {
        let tables = TABLES
            .lock()
            .map_err(|_| anyhow!("series cache poisoned"))?;
        if let Some(table) = tables.get(&key) {
            return Ok(Arc::clone(table));
        }
    }

    // Generate outside the lock; worst case two threads race and one
    // insert wins, which is harmless for identical inputs.
    let table = Arc::new(generate(family, config)?);
    let mut tables = TABLES
        .lock()
        .map_err(|_| anyhow!("series cache poisoned"))?;
    let entry = tables.entry(key).or_insert_with(|| Arc::clone(&table));
    Ok(Arc::clone(entry))
}
