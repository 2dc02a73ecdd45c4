//! Event indexing: narrowing the raw event list per task.
//!
//! For each tracked task this selects the indices of events that match
//! the label exactly, carry both a start and a stop, and overlap the
//! chart window. Indices come back in source order, which in real
//! schedule data usually coincides with time order but is not guaranteed
//! to; the segment builder sorts before walking.

use crate::types::{RawEvent, TaskLabel, Window};

/// Maps each task to the source-order indices of its in-window events.
///
/// A task matching zero events yields an empty list, not an error; its
/// timeline collapses to a single idle segment downstream. Rows with a
/// missing endpoint are skipped here so one bad row never aborts the
/// whole chart.
pub fn index_events(tasks: &[TaskLabel], events: &[RawEvent], window: Window) -> Vec<Vec<usize>> {
    tasks
        .iter()
        .map(|task| {
            events
                .iter()
                .enumerate()
                .filter(|(_, event)| event.task == task.as_str())
                .filter_map(|(index, event)| {
                    let Some(interval) = event.interval() else {
                        tracing::debug!(task = %task, index, "skipping event with missing endpoint");
                        return None;
                    };
                    window
                        .overlaps(interval.start, interval.stop)
                        .then_some(index)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(task: &str, start: Option<i64>, stop: Option<i64>) -> RawEvent {
        RawEvent {
            task: task.into(),
            start,
            stop,
        }
    }

    fn labels(names: &[&str]) -> Vec<TaskLabel> {
        names.iter().map(|n| TaskLabel::new(*n).unwrap()).collect()
    }

    #[test]
    fn selects_overlapping_events_per_task() {
        let window = Window::new(0, 100).unwrap();
        let events = vec![
            event("A", Some(10), Some(30)),
            event("B", Some(20), Some(40)),
            event("A", Some(50), Some(70)),
        ];

        let indices = index_events(&labels(&["A", "B"]), &events, window);
        assert_eq!(indices, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn excludes_disjoint_events() {
        let window = Window::new(50, 150).unwrap();
        let events = vec![
            event("A", Some(0), Some(50)),    // stop == window.start
            event("A", Some(150), Some(200)), // start == window.end
            event("A", Some(0), Some(51)),    // crosses into the window
        ];

        let indices = index_events(&labels(&["A"]), &events, window);
        assert_eq!(indices, vec![vec![2]]);
    }

    #[test]
    fn excludes_events_with_missing_endpoints() {
        let window = Window::new(0, 100).unwrap();
        let events = vec![
            event("A", Some(10), None),
            event("A", None, Some(30)),
            event("A", None, None),
            event("A", Some(10), Some(30)),
        ];

        let indices = index_events(&labels(&["A"]), &events, window);
        assert_eq!(indices, vec![vec![3]]);
    }

    #[test]
    fn label_match_is_exact_and_case_sensitive() {
        let window = Window::new(0, 100).unwrap();
        let events = vec![
            event("build", Some(10), Some(30)),
            event("Build", Some(10), Some(30)),
            event("build ", Some(10), Some(30)),
        ];

        let indices = index_events(&labels(&["build"]), &events, window);
        assert_eq!(indices, vec![vec![0]]);
    }

    #[test]
    fn unmatched_task_yields_empty_list() {
        let window = Window::new(0, 100).unwrap();
        let events = vec![event("A", Some(10), Some(30))];

        let indices = index_events(&labels(&["A", "Z"]), &events, window);
        assert_eq!(indices, vec![vec![0], vec![]]);
    }

    #[test]
    fn output_rows_follow_caller_task_order() {
        let window = Window::new(0, 100).unwrap();
        let events = vec![
            event("B", Some(10), Some(20)),
            event("A", Some(30), Some(40)),
        ];

        let indices = index_events(&labels(&["A", "B"]), &events, window);
        assert_eq!(indices, vec![vec![1], vec![0]]);
    }

    #[test]
    fn indices_preserve_source_order_not_time_order() {
        let window = Window::new(0, 100).unwrap();
        // Later row starts earlier in time
        let events = vec![
            event("A", Some(50), Some(70)),
            event("A", Some(10), Some(30)),
        ];

        let indices = index_events(&labels(&["A"]), &events, window);
        assert_eq!(indices, vec![vec![0, 1]]);
    }
}
