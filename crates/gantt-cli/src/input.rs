//! CSV schedule loading and timestamp parsing.
//!
//! A schedule row is `task,start,stop`. Empty time fields mean the event
//! was never started or never stopped; those rows survive loading as
//! partially-specified events and are excluded during indexing rather
//! than treated as parse errors. Unparseable time strings get the same
//! treatment so one bad row never aborts the whole chart.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use gantt_core::{RawEvent, Timestamp};

/// Parses an optional schedule field into a timestamp.
///
/// Empty fields and unparseable values both come back as `None`; the
/// latter is logged at debug level since it usually means dirty data.
pub fn parse_timestamp(value: &str, format: &str) -> Option<Timestamp> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDateTime::parse_from_str(trimmed, format) {
        Ok(datetime) => Some(datetime.and_utc().timestamp()),
        Err(error) => {
            tracing::debug!(value = trimmed, %error, "skipping unparseable timestamp");
            None
        }
    }
}

/// Parses a window bound, which unlike an event field must be valid.
pub fn parse_bound(value: &str, format: &str) -> Result<Timestamp> {
    let datetime = NaiveDateTime::parse_from_str(value.trim(), format)
        .with_context(|| format!("failed to parse {value:?} with time format {format:?}"))?;
    Ok(datetime.and_utc().timestamp())
}

/// Loads all schedule rows from a CSV file.
///
/// Rows with fewer than three fields are skipped with a debug log. The
/// file is read without a header row; a stray header simply becomes an
/// event with unparseable times and is excluded at indexing.
pub fn load_events(path: &Path, time_format: &str) -> Result<Vec<RawEvent>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open schedule file: {}", path.display()))?;

    let mut events = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read row {}", row + 1))?;
        let (Some(task), Some(start), Some(stop)) =
            (record.get(0), record.get(1), record.get(2))
        else {
            tracing::debug!(row = row + 1, "skipping row with missing columns");
            continue;
        };

        events.push(RawEvent {
            task: task.to_string(),
            start: parse_timestamp(start, time_format),
            stop: parse_timestamp(stop, time_format),
        });
    }

    Ok(events)
}

/// Lists the distinct task labels in a schedule, in first-seen order.
pub fn distinct_tasks(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open schedule file: {}", path.display()))?;

    let mut seen = std::collections::HashSet::new();
    let mut tasks = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read schedule row")?;
        let Some(task) = record.get(0) else { continue };
        if task.is_empty() {
            continue;
        }
        if seen.insert(task.to_string()) {
            tasks.push(task.to_string());
        }
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    fn write_schedule(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn parse_timestamp_handles_epoch_seconds() {
        let ts = parse_timestamp("1970-01-01 00:01:40", FORMAT).unwrap();
        assert_eq!(ts, 100);
    }

    #[test]
    fn parse_timestamp_empty_is_none() {
        assert_eq!(parse_timestamp("", FORMAT), None);
        assert_eq!(parse_timestamp("   ", FORMAT), None);
    }

    #[test]
    fn parse_timestamp_garbage_is_none() {
        assert_eq!(parse_timestamp("not a date", FORMAT), None);
        assert_eq!(parse_timestamp("2016-13-40 99:99:99", FORMAT), None);
    }

    #[test]
    fn parse_bound_rejects_garbage() {
        assert!(parse_bound("not a date", FORMAT).is_err());
        assert_eq!(parse_bound("1970-01-01 00:00:10", FORMAT).unwrap(), 10);
    }

    #[test]
    fn load_events_reads_complete_and_partial_rows() {
        let file = write_schedule(
            "work,1970-01-01 00:00:10,1970-01-01 00:00:30\n\
             work,1970-01-01 00:00:50,\n\
             rest,,1970-01-01 00:01:00\n",
        );

        let events = load_events(file.path(), FORMAT).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].task, "work");
        assert_eq!(events[0].start, Some(10));
        assert_eq!(events[0].stop, Some(30));
        assert_eq!(events[1].stop, None);
        assert_eq!(events[2].start, None);
    }

    #[test]
    fn load_events_skips_short_rows() {
        let file = write_schedule(
            "just-a-task\n\
             work,1970-01-01 00:00:10,1970-01-01 00:00:30\n",
        );

        let events = load_events(file.path(), FORMAT).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].task, "work");
    }

    #[test]
    fn load_events_keeps_unparseable_times_as_missing() {
        let file = write_schedule("work,yesterday,tomorrow\n");

        let events = load_events(file.path(), FORMAT).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, None);
        assert_eq!(events[0].stop, None);
    }

    #[test]
    fn distinct_tasks_preserves_first_seen_order() {
        let file = write_schedule(
            "beta,1970-01-01 00:00:10,1970-01-01 00:00:30\n\
             alpha,1970-01-01 00:00:10,1970-01-01 00:00:30\n\
             beta,1970-01-01 00:01:10,1970-01-01 00:01:30\n",
        );

        let tasks = distinct_tasks(file.path()).unwrap();
        assert_eq!(tasks, vec!["beta".to_string(), "alpha".to_string()]);
    }
}
