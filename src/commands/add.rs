use std::path::Path;

use anyhow::{Result, anyhow};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use timeblock_core::{Task, TransientKind, TransientTask};

use crate::commands::ScheduleContext;
use crate::input;

pub fn run(
    schedule: &Path,
    name: Option<String>,
    kind: Option<String>,
    date: Option<String>,
    start: Option<String>,
    duration: Option<String>,
) -> Result<()> {
    let interactive =
        name.is_none() || date.is_none() || start.is_none() || duration.is_none();

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .interact_text()?,
    };

    // --- Category ---
    let kind = resolve_kind(kind)?;

    // --- Date ---
    let date = input::flag_or_prompt(date, "  On what date?", input::parse_date)?;

    // --- Start / Duration ---
    let start_time = input::flag_or_prompt(start, "  Starting when?", input::parse_clock)?;
    let duration =
        input::flag_or_prompt(duration, "  How long?", input::parse_duration_hours)?;

    let mut ctx = ScheduleContext::load(schedule)?;
    ctx.scheduler.add(Task::Transient(TransientTask {
        name: name.clone(),
        kind,
        date,
        start_time,
        duration,
    }))?;
    ctx.save()?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Added: {}", name).green());

    Ok(())
}

/// Resolve the category from a flag, or let the user pick one.
fn resolve_kind(flag: Option<String>) -> Result<TransientKind> {
    if let Some(value) = flag {
        return TransientKind::ALL
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                let labels: Vec<_> = TransientKind::ALL.iter().map(|k| k.label()).collect();
                anyhow!(
                    "Unknown category '{}'. Available: {}",
                    value,
                    labels.join(", ")
                )
            });
    }

    let items: Vec<&str> = TransientKind::ALL.iter().map(|k| k.label()).collect();
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(TransientKind::ALL[selection])
}
