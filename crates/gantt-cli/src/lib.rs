//! Gantt chart CLI library.
//!
//! This crate provides the command-line interface around `gantt-core`:
//! CSV loading, date parsing, configuration and terminal rendering.

mod cli;
pub mod commands;
mod config;
pub mod input;
pub mod render;

pub use cli::{Cli, Commands};
pub use config::Config;
