//! Implementation of the `gantt tasks` command.
//!
//! Lists the distinct task labels found in a schedule so users don't
//! have to know them ahead of time when asking for a chart.

use std::path::Path;

use anyhow::Result;

use crate::input;

/// Runs the tasks command.
pub fn run(file: &Path) -> Result<()> {
    let tasks = input::distinct_tasks(file)?;

    if tasks.is_empty() {
        println!("No task labels found in {}", file.display());
        return Ok(());
    }

    for task in tasks {
        println!("{task}");
    }
    Ok(())
}
