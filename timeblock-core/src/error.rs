//! Error types for schedule operations.

use thiserror::Error;

use crate::task::InvalidReason;

/// Errors produced by the schedule engine and the file codec.
///
/// Nothing here is fatal. The worst outcome of any operation is one
/// rejected task, and batch ingestion isolates failures per item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The task failed a structural rule before reaching the schedule.
    #[error("invalid task '{name}': {reason}")]
    Validation { name: String, reason: InvalidReason },

    /// The candidate's time slot hits an existing entry.
    #[error("'{task}' conflicts with existing task '{with}'")]
    Conflict { task: String, with: String },

    /// No known recurring series has an occurrence this cancellation fits.
    #[error("cancellation '{name}' matches no occurrence of any recurring task")]
    UnmatchedCancellation { name: String },

    /// Lookup by a name the schedule does not contain.
    #[error("no task named '{name}'")]
    NotFound { name: String },

    /// The schedule file text could not be understood.
    #[error("could not parse schedule: {0}")]
    Parse(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
