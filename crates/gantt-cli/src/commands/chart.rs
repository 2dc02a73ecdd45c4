//! Implementation of the `gantt chart` command.
//!
//! Parses the window bounds, loads the schedule, runs the segmentation
//! core and hands the timelines to the renderer (or serializes them as
//! JSON). Any structural error aborts the whole request; partial charts
//! are never printed.

use std::path::Path;

use anyhow::{Context, Result};
use gantt_core::{TaskLabel, TaskTimeline, Timestamp, Window, build_chart};
use serde::Serialize;

use crate::config::Config;
use crate::input;
use crate::render::{Palette, render_chart};

/// JSON document emitted by `--json`.
#[derive(Debug, Serialize)]
struct JsonChart<'a> {
    window: JsonWindow,
    timelines: &'a [TaskTimeline],
}

#[derive(Debug, Serialize)]
struct JsonWindow {
    start: Timestamp,
    end: Timestamp,
    duration: i64,
}

/// Runs the chart command.
pub fn run(
    file: &Path,
    tasks: &[String],
    start: &str,
    end: &str,
    width: usize,
    json: bool,
    config: &Config,
) -> Result<()> {
    let labels: Vec<TaskLabel> = tasks
        .iter()
        .map(|task| TaskLabel::new(task.clone()))
        .collect::<Result<_, _>>()
        .context("invalid task label")?;

    let window_start = input::parse_bound(start, &config.time_format)?;
    let window_end = input::parse_bound(end, &config.time_format)?;
    let window = Window::new(window_start, window_end)?;

    let events = input::load_events(file, &config.time_format)?;
    tracing::debug!(events = events.len(), tasks = labels.len(), "loaded schedule");

    let timelines = build_chart(&labels, &events, window)?;

    if json {
        let document = JsonChart {
            window: JsonWindow {
                start: window.start(),
                end: window.end(),
                duration: window.duration(),
            },
            timelines: &timelines,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&document).context("failed to serialize chart")?
        );
    } else {
        let palette = Palette::from_names(&config.palette);
        print!(
            "{}",
            render_chart(&timelines, window, &palette, width, start)
        );
    }

    Ok(())
}
