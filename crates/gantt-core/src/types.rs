//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds since a fixed epoch. Any consistent unit works; the CLI feeds
/// Unix seconds.
pub type Timestamp = i64;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Structural errors raised while building timelines.
///
/// These indicate precondition violations rather than ordinary missing
/// data; they abort the chart request with no partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// The window's start is not strictly before its end.
    #[error("invalid window: start {start} is not before end {end}")]
    InvalidWindow { start: Timestamp, end: Timestamp },

    /// An event interval has stop at or before start.
    #[error("invalid interval for task {task:?}: [{start}, {stop})")]
    InvalidInterval {
        task: String,
        start: Timestamp,
        stop: Timestamp,
    },
}

/// A validated task label.
///
/// Labels must be non-empty. Matching against event rows is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskLabel(String);

impl TaskLabel {
    /// Creates a new label after validation.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::Empty {
                field: "task label",
            });
        }
        Ok(Self(label))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskLabel {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskLabel> for String {
    fn from(label: TaskLabel) -> Self {
        label.0
    }
}

impl fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TaskLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The observation range for a chart, half-open `[start, end)`.
///
/// Construction enforces `start < end`, so a `Window` in hand is always
/// valid and `duration` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    start: Timestamp,
    end: Timestamp,
}

impl Window {
    /// Creates a window, rejecting `start >= end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, TimelineError> {
        if start >= end {
            return Err(TimelineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The inclusive start of the window.
    pub const fn start(self) -> Timestamp {
        self.start
    }

    /// The exclusive end of the window.
    pub const fn end(self) -> Timestamp {
        self.end
    }

    /// Window length, always positive.
    pub const fn duration(self) -> i64 {
        self.end - self.start
    }

    /// Half-open overlap test against an event interval.
    pub const fn overlaps(self, start: Timestamp, stop: Timestamp) -> bool {
        start < self.end && stop > self.start
    }
}

/// A raw event row as parsed from the source dataset.
///
/// Missing or unparseable time fields arrive as `None` and cause the row
/// to be excluded at indexing, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// The task this event belongs to.
    pub task: String,
    /// When the task started, if recorded.
    pub start: Option<Timestamp>,
    /// When the task stopped, if recorded.
    pub stop: Option<Timestamp>,
}

impl RawEvent {
    /// Returns the event's interval when both endpoints are present.
    pub const fn interval(&self) -> Option<Interval> {
        match (self.start, self.stop) {
            (Some(start), Some(stop)) => Some(Interval { start, stop }),
            _ => None,
        }
    }
}

/// One `(start, stop)` occurrence of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: Timestamp,
    pub stop: Timestamp,
}

/// Whether a segment paints active task time or an idle gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Idle,
    Active,
}

impl SegmentKind {
    /// String representation for display and JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One contiguous span of a task's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Duration in the same unit as [`Timestamp`]. Never negative.
    pub length: i64,
    pub kind: SegmentKind,
}

impl Segment {
    pub const fn idle(length: i64) -> Self {
        Self {
            length,
            kind: SegmentKind::Idle,
        }
    }

    pub const fn active(length: i64) -> Self {
        Self {
            length,
            kind: SegmentKind::Active,
        }
    }
}

/// The ordered idle/active segment sequence for one task, clipped to the
/// window. Laid end to end the segments tile the window exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskTimeline {
    /// The task this timeline describes.
    pub task: TaskLabel,
    /// Alternating segments, summing to the window duration.
    pub segments: Vec<Segment>,
}

impl TaskTimeline {
    /// Sum of all segment lengths.
    pub fn total_length(&self) -> i64 {
        self.segments.iter().map(|s| s.length).sum()
    }
}
