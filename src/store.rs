//! Schedule file loading and saving.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timeblock_core::json;
use timeblock_core::{IngestSession, Scheduler};

/// Load the schedule at `path` into a fresh scheduler.
///
/// A missing file is an empty schedule. Entries that fail to parse or to
/// re-enter the schedule are reported to stderr and skipped, so one bad
/// line never locks the user out of the rest of the file.
pub fn load(path: &Path) -> Result<Scheduler> {
    let mut scheduler = Scheduler::new();
    if !path.exists() {
        return Ok(scheduler);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    let mut tasks = Vec::new();
    for parsed in json::parse_schedule(&content)? {
        match parsed {
            Ok(task) => tasks.push(task),
            Err(e) => eprintln!("  {}", format!("skipping entry: {e}").yellow()),
        }
    }

    for outcome in IngestSession::new().run(&mut scheduler, tasks) {
        if let Err(e) = outcome {
            eprintln!("  {}", format!("skipping entry: {e}").yellow());
        }
    }

    Ok(scheduler)
}

/// Save atomically: write a temp file beside the target, then rename.
pub fn save(path: &Path, scheduler: &Scheduler) -> Result<()> {
    let content = json::generate_schedule(scheduler.tasks());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
    }

    let temp = path.with_extension("tmp");
    std::fs::write(&temp, &content)
        .with_context(|| format!("Could not write {}", temp.display()))?;
    std::fs::rename(&temp, path)
        .with_context(|| format!("Could not write {}", path.display()))?;

    Ok(())
}
