//! Core segmentation logic for Gantt timelines.
//!
//! This crate contains the fundamental types and logic for:
//! - Indexing: selecting, per task, the events that overlap a chart window
//! - Segmentation: converting a task's intervals into an alternating
//!   idle/active segment sequence that tiles the window exactly
//!
//! The crate performs no I/O; reading schedule data, parsing dates and
//! drawing the chart live in `gantt-cli`.

mod chart;
mod index;
mod segment;
mod types;

pub use chart::build_chart;
pub use index::index_events;
pub use segment::build_timeline;
pub use types::{
    Interval, RawEvent, Segment, SegmentKind, TaskLabel, TaskTimeline, Timestamp, TimelineError,
    ValidationError, Window,
};
