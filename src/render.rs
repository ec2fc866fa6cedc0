//! TUI rendering traits for timeblock types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to timeblock-core types using owo_colors.

use owo_colors::OwoColorize;
use timeblock_core::time::wrap_clock;
use timeblock_core::{AntiTask, RecurringTask, Task, TransientTask};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Task {
    fn render(&self) -> String {
        match self {
            Task::Transient(task) => task.render(),
            Task::Recurring(task) => task.render(),
            Task::Anti(task) => task.render(),
        }
    }
}

impl Render for TransientTask {
    fn render(&self) -> String {
        format!(
            "{} {}\n   {}\n   {}",
            self.name.bold(),
            kind_tag(self.kind.label()),
            self.date.pretty(),
            render_slot(self.start_time, self.duration),
        )
    }
}

impl Render for RecurringTask {
    fn render(&self) -> String {
        let mut out = format!(
            "{} {}\n   {} - {}, {}\n   {}",
            self.name.bold(),
            kind_tag(self.kind.label()),
            self.date.pretty(),
            self.end_date.pretty(),
            self.cadence_label(),
            render_slot(self.start_time, self.duration),
        );
        if !self.cancellations.is_empty() {
            let note = format!(
                "{} {} cancelled",
                self.cancellations.len(),
                pluralize("date", self.cancellations.len())
            );
            out.push_str(&format!("\n   {}", note.dimmed()));
        }
        out
    }
}

impl Render for AntiTask {
    fn render(&self) -> String {
        format!(
            "{} {}\n   {}\n   {}",
            self.name.bold(),
            kind_tag("cancellation"),
            self.date.pretty(),
            render_slot(self.start_time, self.duration),
        )
    }
}

/// Bracketed, dimmed kind annotation shown next to the name.
fn kind_tag(label: &str) -> String {
    format!("[{}]", label.to_lowercase()).dimmed().to_string()
}

/// Render a start time and duration as "9:00 - 10:30".
pub fn format_range(start: f32, duration: f32) -> String {
    let end = wrap_clock(start + duration);
    format!("{} - {}", format_clock(start), format_clock(end))
}

/// Render a start time and duration as "9:00 - 10:30 (1h 30m)".
pub fn render_slot(start: f32, duration: f32) -> String {
    format!(
        "{} ({})",
        format_range(start, duration),
        format_duration(duration)
    )
}

/// Format decimal hours as a clock reading: 9.5 becomes "9:30".
pub fn format_clock(hours: f32) -> String {
    let total = (hours * 60.0).round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format decimal hours as a span: 1.5 becomes "1h 30m".
pub fn format_duration(hours: f32) -> String {
    let total = (hours * 60.0).round() as i64;
    match (total / 60, total % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 { word } else { match word {
        "date" => "dates",
        "task" => "tasks",
        _ => word,
    }}
}
