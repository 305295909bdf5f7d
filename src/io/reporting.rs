// src/io/reporting.rs

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::model::state::DaySnapshot;
use crate::policy::search::PolicySummary;

fn write_csv<T: Serialize>(file_path: &str, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    // Flush the buffer to ensure all data is written.
    wtr.flush()?;

    tracing::info!(rows = rows.len(), file = file_path, "exported CSV");
    Ok(())
}

/// Writes a run's day-by-day history to a CSV file.
pub fn write_history_log(file_path: &str, history: &[DaySnapshot]) -> Result<(), Box<dyn Error>> {
    write_csv(file_path, history)
}

/// Writes ranked policy-search rows to a CSV file.
pub fn write_search_results(
    file_path: &str,
    rows: &[PolicySummary],
) -> Result<(), Box<dyn Error>> {
    write_csv(file_path, rows)
}
