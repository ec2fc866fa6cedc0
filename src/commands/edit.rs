use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::{Reschedule, ScheduleError};

use crate::commands::ScheduleContext;
use crate::input;
use crate::render::{self, Render};

pub fn run(schedule: &Path, name: &str) -> Result<()> {
    let mut ctx = ScheduleContext::load(schedule)?;

    let task = ctx.scheduler.find(name).ok_or_else(|| ScheduleError::NotFound {
        name: name.to_string(),
    })?;

    println!("{}", task.render());
    println!();

    // --- Prompt each field, prefilled with the current value ---
    let new_name = input::prompt_with_default("  Name", task.name().to_string(), |s| {
        if s.trim().is_empty() {
            anyhow::bail!("Name cannot be empty");
        }
        Ok(s.trim().to_string())
    })?;
    let date = input::prompt_with_default("  Date", task.date().to_string(), input::parse_date)?;
    let start_time = input::prompt_with_default(
        "  Start",
        render::format_clock(task.start_time()),
        input::parse_clock,
    )?;
    let duration = input::prompt_with_default(
        "  Duration",
        render::format_duration(task.duration()),
        input::parse_duration_hours,
    )?;

    // The schedule restores the original slot if the new one conflicts.
    ctx.scheduler.reschedule(
        name,
        Reschedule {
            name: Some(new_name.clone()),
            date: Some(date),
            start_time: Some(start_time),
            duration: Some(duration),
        },
    )?;
    ctx.save()?;

    println!();
    println!("{}", format!("  Updated: {}", new_name).green());

    Ok(())
}
