//! Segment construction: turning one task's intervals into a timeline.
//!
//! The builder walks a task's intervals in start order and emits
//! alternating idle and active segments clipped to the window. The
//! resulting segments always tile the window exactly: a trailing idle
//! segment is appended whenever the last active span ends before the
//! window closes, so consumers never need to pad.

use crate::types::{
    Interval, Segment, SegmentKind, TaskLabel, TaskTimeline, TimelineError, Window,
};

/// Builds the timeline for a single task.
///
/// Intervals may arrive in any order; they are sorted by start before the
/// walk rather than trusting the source to be chronological. Intervals
/// are expected to be pairwise non-overlapping within one task — overlap
/// is a documented precondition violation and produces an unspecified
/// (but non-panicking, non-negative) segmentation.
///
/// # Errors
///
/// Returns [`TimelineError::InvalidInterval`] if any interval has
/// `stop <= start`; such an interval indicates corrupt source data and is
/// never coerced to a zero-length segment.
pub fn build_timeline(
    task: &TaskLabel,
    intervals: &[Interval],
    window: Window,
) -> Result<TaskTimeline, TimelineError> {
    for interval in intervals {
        if interval.stop <= interval.start {
            return Err(TimelineError::InvalidInterval {
                task: task.to_string(),
                start: interval.start,
                stop: interval.stop,
            });
        }
    }

    let mut ordered = intervals.to_vec();
    ordered.sort_by_key(|interval| interval.start);

    let mut segments = Vec::with_capacity(ordered.len() * 2 + 1);
    // End of the previously emitted active segment
    let mut cursor = window.start();

    for interval in ordered {
        let begin = interval.start.max(cursor);
        let end = interval.stop.min(window.end());
        if end <= begin {
            // Outside the window; the indexer filters these, but a direct
            // caller may not have
            continue;
        }
        if begin > cursor {
            segments.push(Segment::idle(begin - cursor));
            segments.push(Segment::active(end - begin));
        } else if let Some(last) = segments
            .last_mut()
            .filter(|segment| segment.kind == SegmentKind::Active)
        {
            // Abutting interval: grow the previous active span instead of
            // emitting two adjacent segments of the same kind
            last.length += end - begin;
        } else {
            segments.push(Segment::active(end - begin));
        }
        cursor = end;
    }

    if cursor < window.end() {
        segments.push(Segment::idle(window.end() - cursor));
    }

    Ok(TaskTimeline {
        task: task.clone(),
        segments,
    })
}
