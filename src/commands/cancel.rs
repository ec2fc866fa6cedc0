use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::{AntiTask, Task};

use crate::commands::ScheduleContext;
use crate::input;
use crate::render;

pub fn run(
    schedule: &Path,
    date: Option<String>,
    start: Option<String>,
    duration: Option<String>,
) -> Result<()> {
    let interactive = date.is_none() || start.is_none() || duration.is_none();

    // --- Occurrence slot ---
    let date = input::flag_or_prompt(date, "  On what date?", input::parse_date)?;
    let start_time = input::flag_or_prompt(start, "  Starting when?", input::parse_clock)?;
    let duration =
        input::flag_or_prompt(duration, "  How long?", input::parse_duration_hours)?;

    let mut ctx = ScheduleContext::load(schedule)?;
    ctx.scheduler.add(Task::Anti(AntiTask {
        name: format!("cancel-{}", date),
        date,
        start_time,
        duration,
    }))?;
    ctx.save()?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!(
            "  Cancelled: {} at {}",
            date.pretty(),
            render::format_clock(start_time)
        )
        .green()
    );

    Ok(())
}
