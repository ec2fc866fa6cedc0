use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::ScheduleError;

use crate::commands::ScheduleContext;

pub fn run(schedule: &Path, name: &str) -> Result<()> {
    let mut ctx = ScheduleContext::load(schedule)?;

    if !ctx.scheduler.delete(name) {
        return Err(ScheduleError::NotFound {
            name: name.to_string(),
        }
        .into());
    }
    ctx.save()?;

    println!("{}", format!("  Removed: {}", name).green());

    Ok(())
}
