//! Schedule loading: the one place file I/O happens.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use belltower_engine::Year;
use belltower_schedule::{ScheduleDefinition, ScheduleDocument};

/// Reads, parses, and validates a schedule file into a ready [`Year`].
pub fn load_year(path: &Path) -> Result<Year> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule file: {}", path.display()))?;
    let document: ScheduleDocument = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse schedule JSON: {}", path.display()))?;
    let definition = ScheduleDefinition::from_document(&document)
        .with_context(|| format!("invalid schedule: {}", path.display()))?;
    let year = Year::new(definition);
    info!(
        path = %path.display(),
        weeks = year.week_count(),
        zone = %year.timezone(),
        "schedule loaded"
    );
    Ok(year)
}
