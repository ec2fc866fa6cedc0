use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Result, anyhow};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use timeblock_core::{RecurringKind, RecurringTask, Task};

use crate::commands::ScheduleContext;
use crate::input;

#[allow(clippy::too_many_arguments)]
pub fn run(
    schedule: &Path,
    name: Option<String>,
    kind: Option<String>,
    date: Option<String>,
    until: Option<String>,
    start: Option<String>,
    duration: Option<String>,
    every: Option<String>,
) -> Result<()> {
    let interactive = name.is_none()
        || date.is_none()
        || until.is_none()
        || start.is_none()
        || duration.is_none();

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .interact_text()?,
    };

    // --- Category ---
    let kind = resolve_kind(kind)?;

    // --- Dates ---
    let date = input::flag_or_prompt(date, "  From what date?", input::parse_date)?;
    let end_date = input::flag_or_prompt(until, "  Until what date?", input::parse_date)?;

    // --- Start / Duration ---
    let start_time = input::flag_or_prompt(start, "  Starting when?", input::parse_clock)?;
    let duration =
        input::flag_or_prompt(duration, "  How long?", input::parse_duration_hours)?;

    // --- Cadence ---
    let frequency = resolve_cadence(every)?;

    let mut ctx = ScheduleContext::load(schedule)?;
    ctx.scheduler.add(Task::Recurring(RecurringTask {
        name: name.clone(),
        kind,
        date,
        start_time,
        duration,
        end_date,
        frequency,
        cancellations: BTreeSet::new(),
    }))?;
    ctx.save()?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Added: {}", name).green());

    Ok(())
}

/// Resolve the category from a flag, or let the user pick one.
fn resolve_kind(flag: Option<String>) -> Result<RecurringKind> {
    if let Some(value) = flag {
        return RecurringKind::ALL
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                let labels: Vec<_> = RecurringKind::ALL.iter().map(|k| k.label()).collect();
                anyhow!(
                    "Unknown category '{}'. Available: {}",
                    value,
                    labels.join(", ")
                )
            });
    }

    let items: Vec<&str> = RecurringKind::ALL.iter().map(|k| k.label()).collect();
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(RecurringKind::ALL[selection])
}

/// Resolve the cadence from a flag, or let the user pick one.
fn resolve_cadence(flag: Option<String>) -> Result<u32> {
    if let Some(value) = flag {
        return input::parse_cadence(&value);
    }

    let selection = Select::new()
        .with_prompt("  Repeats")
        .items(&["daily", "weekly"])
        .default(0)
        .interact()?;
    Ok(if selection == 0 { 1 } else { 7 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_flag_is_case_insensitive() {
        assert_eq!(
            resolve_kind(Some("class".into())).unwrap(),
            RecurringKind::Class
        );
        assert_eq!(
            resolve_kind(Some("WORK".into())).unwrap(),
            RecurringKind::Work
        );
    }

    #[test]
    fn kind_flag_unknown_lists_choices() {
        let err = resolve_kind(Some("gaming".into())).unwrap_err();
        assert!(err.to_string().contains("Class, Study, Sleep"));
    }

    #[test]
    fn cadence_flag_words() {
        assert_eq!(resolve_cadence(Some("daily".into())).unwrap(), 1);
        assert_eq!(resolve_cadence(Some("weekly".into())).unwrap(), 7);
    }
}
