//! Chart assembly: indexer then builder, one timeline per task.

use crate::index::index_events;
use crate::segment::build_timeline;
use crate::types::{Interval, RawEvent, TaskLabel, TaskTimeline, TimelineError, Window};

/// Builds one timeline per task, in caller-supplied task order.
///
/// Each timeline is a pure function of the window and that task's events;
/// tasks are independent of each other. The window is validated at
/// construction ([`Window::new`]), so by the time this runs the only
/// structural failure left is a malformed interval.
///
/// # Errors
///
/// Returns [`TimelineError::InvalidInterval`] if any in-window event has
/// `stop <= start`. Nothing is returned for the other tasks in that case;
/// partial charts are never emitted.
pub fn build_chart(
    tasks: &[TaskLabel],
    events: &[RawEvent],
    window: Window,
) -> Result<Vec<TaskTimeline>, TimelineError> {
    let indices = index_events(tasks, events, window);

    tasks
        .iter()
        .zip(indices)
        .map(|(task, event_indices)| {
            let intervals: Vec<Interval> = event_indices
                .iter()
                .filter_map(|&index| events[index].interval())
                .collect();
            build_timeline(task, &intervals, window)
        })
        .collect()
}
