//! Core engine for the timeblock schedule.
//!
//! This crate owns the task model and every rule deciding whether a task
//! may enter the schedule:
//! - `task` for the three task variants and their validation rules
//! - `occurrence` for expanding recurring tasks into dated instances
//! - `overlap` for the conflict tests between any pair of variants
//! - `cancellation` for anti-task binding and its lifecycle
//! - `scheduler` for the ordered store tying the above together
//! - `json` for the schedule file codec
//! - `ingest` for batch ingestion with out-of-order cancellations
//!
//! File and terminal I/O live in the CLI crate; everything here works on
//! in-memory values.

pub mod cancellation;
pub mod error;
pub mod ingest;
pub mod json;
pub mod occurrence;
pub mod overlap;
pub mod scheduler;
pub mod task;
pub mod time;

// Re-export the common surface at crate root for convenience
pub use error::{ScheduleError, ScheduleResult};
pub use ingest::IngestSession;
pub use occurrence::Occurrence;
pub use scheduler::{Reschedule, Scheduler};
pub use task::{
    AntiTask, InvalidReason, RecurringKind, RecurringTask, Task, TransientKind, TransientTask,
};
pub use time::TaskDate;
