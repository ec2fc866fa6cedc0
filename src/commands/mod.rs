pub mod add;
pub mod cancel;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod remove;
pub mod repeat;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::Result;
use timeblock_core::Scheduler;

use crate::store;

/// Common context for schedule commands: the file being operated on and its
/// loaded state.
pub struct ScheduleContext {
    pub path: PathBuf,
    pub scheduler: Scheduler,
}

impl ScheduleContext {
    /// Load the schedule file. A missing file starts an empty schedule.
    pub fn load(path: &Path) -> Result<Self> {
        let scheduler = store::load(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            scheduler,
        })
    }

    /// Write the schedule back to its file.
    pub fn save(&self) -> Result<()> {
        store::save(&self.path, &self.scheduler)
    }
}
