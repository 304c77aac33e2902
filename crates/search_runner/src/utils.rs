use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use poke_search::{SearchConfig, State};

pub fn load_state(path: &Path) -> Result<State> {
    let text = fs::read_to_string(path).with_context(|| format!("reading state {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing state {}", path.display()))
}

/// Config from `path`, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
