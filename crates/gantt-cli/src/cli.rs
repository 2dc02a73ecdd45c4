//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gantt chart builder for repeated task schedules.
///
/// Reads task events from a CSV file and draws a stacked horizontal
/// timeline per task over a chosen observation window.
#[derive(Debug, Parser)]
#[command(name = "gantt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Draw the timeline chart for up to five tasks.
    Chart {
        /// Path to the CSV schedule file (task,start,stop per row).
        file: PathBuf,

        /// Task labels to chart, in display order. More than five rows
        /// gets too crowded to read.
        #[arg(required = true, num_args = 1..=5)]
        tasks: Vec<String>,

        /// Window start, e.g. "2016-08-20 00:00:00".
        #[arg(long)]
        start: String,

        /// Window end (exclusive), same format as --start.
        #[arg(long)]
        end: String,

        /// Bar width in terminal columns.
        #[arg(long, default_value_t = 80)]
        width: usize,

        /// Emit the timelines as JSON instead of drawing.
        #[arg(long)]
        json: bool,
    },

    /// List the distinct task labels present in a CSV schedule.
    Tasks {
        /// Path to the CSV schedule file.
        file: PathBuf,
    },
}
