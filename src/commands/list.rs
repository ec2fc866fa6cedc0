use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::{Task, TaskDate};

use crate::commands::ScheduleContext;
use crate::render;

pub fn run(schedule: &Path) -> Result<()> {
    let ctx = ScheduleContext::load(schedule)?;

    // Expand each entry into dated lines; recurring series contribute one
    // line per surviving occurrence.
    let mut lines: Vec<(TaskDate, f32, String)> = Vec::new();
    for task in ctx.scheduler.tasks() {
        match task {
            Task::Transient(t) => {
                let tag = format!("[{}]", t.kind.label().to_lowercase());
                lines.push((t.date, t.start_time, entry(t.start_time, t.duration, &t.name, &tag)));
            }
            Task::Recurring(t) => {
                let tag = format!("[{}, {}]", t.kind.label().to_lowercase(), t.cadence_label());
                for occurrence in t.occurrences().filter(|o| !o.cancelled) {
                    lines.push((
                        occurrence.date,
                        t.start_time,
                        entry(t.start_time, t.duration, &t.name, &tag),
                    ));
                }
            }
            // Cancellation markers are absorbed on add and never stored.
            Task::Anti(_) => {}
        }
    }

    if lines.is_empty() {
        println!("{}", "No tasks scheduled".dimmed());
        return Ok(());
    }

    lines.sort_by_key(|line| (line.0.encoded(), (line.1 * 60.0).round() as i64));

    // Group lines by day and print
    let mut current_date: Option<TaskDate> = None;
    for (date, _, line) in &lines {
        if current_date != Some(*date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label(*date).bold());
            current_date = Some(*date);
        }
        println!("{}", line);
    }

    Ok(())
}

/// One schedule line: right-aligned slot, name, dimmed category tag.
fn entry(start: f32, duration: f32, name: &str, tag: &str) -> String {
    format!(
        "  {:>13}  {} {}",
        render::format_range(start, duration),
        name,
        tag.dimmed()
    )
}

/// Format a day header (e.g. "Today", "Tomorrow", "Monday, January 1 2024").
fn date_label(date: TaskDate) -> String {
    let today = chrono::Local::now().date_naive();
    match date.to_naive().map(|d| (d - today).num_days()) {
        Some(0) => "Today".to_string(),
        Some(1) => "Tomorrow".to_string(),
        _ => date.pretty(),
    }
}
