use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::ScheduleContext;
use crate::store;

pub fn run(schedule: &Path, target: &Path) -> Result<()> {
    let ctx = ScheduleContext::load(schedule)?;

    store::save(target, &ctx.scheduler)?;

    let count = ctx.scheduler.len();
    let word = if count == 1 { "task" } else { "tasks" };
    println!(
        "{}",
        format!("  Exported {} {} to {}", count, word, target.display()).green()
    );

    Ok(())
}
