use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::models::HistoryEntry;

/// Default download name, matching the dashboard's CSV export.
pub(crate) const DEFAULT_EXPORT_NAME: &str = "monthly_history.csv";

/// Serialize the history archive as CSV: a `Month,Budget,Spent` header
/// row plus one row per entry. Fields containing commas or quotes are
/// quoted by the writer.
pub(crate) fn write_history_csv<W: Write>(out: W, history: &[HistoryEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Month", "Budget", "Spent"])?;
    for entry in history {
        writer.write_record([
            entry.month.as_str(),
            &entry.budget.to_string(),
            &entry.spent.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the archive to `path`, returning the number of entries exported.
pub(crate) fn export_history(path: &Path, history: &[HistoryEntry]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_history_csv(file, history)?;
    Ok(history.len())
}
