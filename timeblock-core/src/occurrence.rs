//! Occurrence expansion for recurring tasks.
//!
//! A recurring task is a compact template; conflict checks and cancellation
//! matching work on the dated instances it expands into. Expansion steps the
//! start date forward `frequency` days at a time, bounded by the end date.

use chrono::{Duration, NaiveDate};

use crate::task::RecurringTask;
use crate::time::TaskDate;

/// One dated instance of a recurring task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occurrence {
    pub date: TaskDate,
    /// Start of the slot in decimal hours.
    pub start: f32,
    /// Start plus duration, wrapped past midnight when the sum exceeds 24.
    pub end: f32,
    /// True when a matched cancellation marker knocked this date out.
    pub cancelled: bool,
}

impl RecurringTask {
    /// Iterate the dated instances of this series.
    ///
    /// The walk begins on the task's own start date, which is always
    /// produced, and advances by `frequency` days. The boundary rule is
    /// uneven on purpose: a daily series includes an instance landing
    /// exactly on the end date, a weekly series stops just before it.
    ///
    /// The iterator borrows the task read-only; calling this again restarts
    /// the walk from the beginning.
    pub fn occurrences(&self) -> Occurrences<'_> {
        let (cursor, end) = match (self.date.to_naive(), self.end_date.to_naive()) {
            (Some(start), Some(end)) => (Some(start), end),
            _ => (None, NaiveDate::MIN),
        };
        Occurrences {
            task: self,
            cursor,
            end,
        }
    }
}

/// Lazy, bounded iterator over a recurring task's instances.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    task: &'a RecurringTask,
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        let date = self.cursor?;

        let advanced = date + Duration::days(self.task.frequency as i64);
        let past_end = match self.task.frequency {
            1 => advanced > self.end,
            // Weekly cadence excludes an instance landing on the end date.
            _ => advanced >= self.end,
        };
        self.cursor = if past_end { None } else { Some(advanced) };

        let occurrence_date = TaskDate::from_naive(date);
        Some(Occurrence {
            date: occurrence_date,
            start: self.task.start_time,
            end: self.task.end_time(),
            cancelled: self.task.cancellations.contains(&occurrence_date),
        })
    }
}
