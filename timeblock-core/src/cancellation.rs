//! Anti-task binding and the cancellation lifecycle.

use crate::overlap::occurrence_matches;
use crate::task::{AntiTask, RecurringTask};
use crate::time::TaskDate;

/// Try to bind `anti` to one occurrence of `series`.
///
/// On a match the occurrence's date lands in the series' cancellation set
/// and is returned; binding a date that is already cancelled is an
/// idempotent success. None means this series has no matching occurrence.
pub fn attach(series: &mut RecurringTask, anti: &AntiTask) -> Option<TaskDate> {
    let matched = series
        .occurrences()
        .find(|occurrence| occurrence_matches(occurrence, anti))?;
    series.cancellations.insert(matched.date);
    Some(matched.date)
}

/// Lifecycle of a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationState {
    /// Nothing requested yet.
    Null,
    /// The request exists but has not been handed to a schedule.
    Created,
    /// Submitted, waiting for a series to claim it.
    Pending,
    /// Bound to an occurrence; terminal.
    Scheduled,
    /// Rejected or withdrawn; terminal.
    Removed,
}

/// Happenings a cancellation request reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationEvent {
    Create,
    Submit,
    MatchFound,
    NoMatchFound,
    Withdraw,
}

impl CancellationState {
    /// Pure transition table. Event/state pairs outside the table leave the
    /// state unchanged.
    pub fn apply(self, event: CancellationEvent) -> CancellationState {
        use CancellationEvent::*;
        use CancellationState::*;
        match (self, event) {
            (Null, Create) => Created,
            (Created, Submit) => Pending,
            (Pending, MatchFound) => Scheduled,
            (Pending, NoMatchFound) => Removed,
            (Pending, Withdraw) => Removed,
            (state, _) => state,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, CancellationState::Scheduled | CancellationState::Removed)
    }
}
