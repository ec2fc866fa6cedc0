use std::path::Path;

use anyhow::Result;
use timeblock_core::ScheduleError;

use crate::commands::ScheduleContext;
use crate::render::Render;

pub fn run(schedule: &Path, name: &str) -> Result<()> {
    let ctx = ScheduleContext::load(schedule)?;

    let task = ctx.scheduler.find(name).ok_or_else(|| ScheduleError::NotFound {
        name: name.to_string(),
    })?;

    println!("{}", task.render());

    Ok(())
}
