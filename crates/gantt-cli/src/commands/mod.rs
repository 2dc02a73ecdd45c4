//! CLI subcommand implementations.

pub mod chart;
pub mod tasks;
