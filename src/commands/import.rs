use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timeblock_core::json;
use timeblock_core::{IngestSession, Task};

use crate::commands::ScheduleContext;

pub fn run(schedule: &Path, source: &Path) -> Result<()> {
    let content = std::fs::read_to_string(source)
        .with_context(|| format!("Could not read {}", source.display()))?;

    let mut ctx = ScheduleContext::load(schedule)?;

    // Collect parseable entries, reporting the rest.
    let mut tasks = Vec::new();
    let mut skipped = 0usize;
    for parsed in json::parse_schedule(&content)? {
        match parsed {
            Ok(task) => tasks.push(task),
            Err(e) => {
                skipped += 1;
                println!("  {}", format!("skipped: {e}").red());
            }
        }
    }

    // Cancellation markers vanish into their series on success, so report
    // them with their own verb.
    let entries: Vec<(String, bool)> = tasks
        .iter()
        .map(|t| (t.name().to_string(), matches!(t, Task::Anti(_))))
        .collect();

    let mut added = 0usize;
    let outcomes = IngestSession::new().run(&mut ctx.scheduler, tasks);
    for ((name, is_anti), outcome) in entries.iter().zip(outcomes) {
        match outcome {
            Ok(()) => {
                added += 1;
                let verb = if *is_anti { "Applied" } else { "Added" };
                println!("  {}", format!("{verb}: {name}").green());
            }
            Err(e) => {
                skipped += 1;
                println!("  {}", format!("skipped: {e}").red());
            }
        }
    }

    ctx.save()?;

    println!();
    println!("  {} added, {} skipped", added, skipped);

    Ok(())
}
