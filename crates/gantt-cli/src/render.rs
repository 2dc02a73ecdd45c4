//! Terminal rendering of task timelines.
//!
//! This is the presentation collaborator: it knows nothing about how
//! segments were computed, only how to scale them into colored bar
//! columns. Color selection is a palette lookup keyed on the task's row
//! position, cycling so any number of rows renders sensibly.

use std::fmt::Write;

use ansi_term::{Colour, Style};
use gantt_core::{SegmentKind, TaskLabel, TaskTimeline, Window};

/// Maps task row positions to bar styles.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: Vec<Style>,
}

impl Palette {
    /// Builds a palette from color names, skipping unknown ones.
    ///
    /// Falls back to the default palette when no name is recognized.
    pub fn from_names(names: &[String]) -> Self {
        let styles: Vec<Style> = names
            .iter()
            .filter_map(|name| {
                let colour = colour_from_name(name);
                if colour.is_none() {
                    tracing::debug!(%name, "ignoring unknown palette color");
                }
                colour
            })
            .map(Colour::normal)
            .collect();

        if styles.is_empty() {
            Self::default()
        } else {
            Self { styles }
        }
    }

    /// A palette that emits no escape codes; used for tests and dumb
    /// terminals.
    pub fn plain() -> Self {
        Self {
            styles: vec![Style::new()],
        }
    }

    /// The style for the task at the given row position, cycling past
    /// the end of the palette.
    pub fn style_for(&self, task_index: usize) -> Style {
        self.styles[task_index % self.styles.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: vec![
                Colour::Yellow.normal(),
                Colour::Red.normal(),
                Colour::Purple.normal(),
                Colour::Blue.normal(),
                Colour::Cyan.normal(),
            ],
        }
    }
}

fn colour_from_name(name: &str) -> Option<Colour> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Colour::Black),
        "red" => Some(Colour::Red),
        "green" => Some(Colour::Green),
        "yellow" => Some(Colour::Yellow),
        "blue" => Some(Colour::Blue),
        "purple" | "magenta" => Some(Colour::Purple),
        "cyan" => Some(Colour::Cyan),
        "white" => Some(Colour::White),
        _ => None,
    }
}

/// Formats the chart heading from the charted task labels.
///
/// One task reads "Plot of Task: A"; two read "A and B"; more use a
/// comma list with a final "and".
pub fn chart_title(tasks: &[TaskLabel]) -> String {
    match tasks {
        [] => "Plot of Tasks".to_string(),
        [only] => format!("Plot of Task: {only}"),
        [first, second] => format!("Plot of Tasks: {first} and {second}"),
        [init @ .., last] => {
            let mut title = String::from("Plot of Tasks: ");
            for task in init {
                write!(title, "{task}, ").unwrap();
            }
            write!(title, "and {last}").unwrap();
            title
        }
    }
}

/// Scales one timeline into a bar of exactly `width` columns.
///
/// Column boundaries come from cumulative rounding, so the painted
/// columns tile the bar exactly the way the segments tile the window.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn render_bar(timeline: &TaskTimeline, window: Window, style: Style, width: usize) -> String {
    let duration = window.duration();
    let mut bar = String::new();
    let mut elapsed = 0i64;
    let mut filled = 0usize;

    for segment in &timeline.segments {
        elapsed += segment.length;
        let target = ((elapsed as f64 / duration as f64) * width as f64).round() as usize;
        let columns = target.min(width).saturating_sub(filled);
        if columns == 0 {
            continue;
        }
        match segment.kind {
            SegmentKind::Active => {
                bar.push_str(&style.paint("█".repeat(columns)).to_string());
            }
            SegmentKind::Idle => bar.push_str(&" ".repeat(columns)),
        }
        filled += columns;
    }

    if filled < width {
        bar.push_str(&" ".repeat(width - filled));
    }
    bar
}

/// Renders the full chart: title, one bar row per task, axis and caption.
///
/// `start_label` is the human-readable window start used in the axis
/// caption.
pub fn render_chart(
    timelines: &[TaskTimeline],
    window: Window,
    palette: &Palette,
    width: usize,
    start_label: &str,
) -> String {
    let width = width.max(10);
    let labels: Vec<TaskLabel> = timelines.iter().map(|t| t.task.clone()).collect();
    let label_width = labels
        .iter()
        .map(|label| label.as_str().chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    writeln!(output, "{}", chart_title(&labels)).unwrap();
    writeln!(output).unwrap();

    for (index, timeline) in timelines.iter().enumerate() {
        let bar = render_bar(timeline, window, palette.style_for(index), width);
        writeln!(
            output,
            "{:>label_width$} │{bar}│",
            timeline.task.as_str()
        )
        .unwrap();
    }

    let gutter = " ".repeat(label_width + 1);
    writeln!(output, "{gutter}└{}┘", "─".repeat(width)).unwrap();

    let end_label = window.duration().to_string();
    if width > end_label.len() {
        writeln!(
            output,
            "{gutter} 0{}{end_label}",
            " ".repeat(width - 1 - end_label.len())
        )
        .unwrap();
    }
    writeln!(output, "{gutter} Time in seconds after {start_label}").unwrap();

    output
}
