//! Batch ingestion with out-of-order cancellation handling.
//!
//! A schedule file may list a cancellation marker before the recurring
//! series it targets. The session holds such markers in a pending queue
//! scoped to the one ingestion run and retries them as series land; the
//! queue dies with the session.

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduler::Scheduler;
use crate::task::Task;

/// Single-use context for ingesting one parsed batch.
#[derive(Debug, Default)]
pub struct IngestSession {
    pending: Vec<(usize, Task)>,
}

impl IngestSession {
    pub fn new() -> Self {
        IngestSession {
            pending: Vec::new(),
        }
    }

    /// Feed every task through [`Scheduler::add`], holding unmatched
    /// cancellation markers aside and retrying them after each new
    /// recurring series. Consumes the session and returns one result per
    /// input, in input order.
    pub fn run(mut self, scheduler: &mut Scheduler, tasks: Vec<Task>) -> Vec<ScheduleResult<()>> {
        let mut results: Vec<Option<ScheduleResult<()>>> = vec![None; tasks.len()];

        for (slot, task) in tasks.into_iter().enumerate() {
            if matches!(task, Task::Anti(_)) {
                match scheduler.add(task.clone()) {
                    Err(ScheduleError::UnmatchedCancellation { .. }) => {
                        self.pending.push((slot, task));
                    }
                    outcome => results[slot] = Some(outcome),
                }
                continue;
            }

            let unlocks_pending = matches!(task, Task::Recurring(_));
            let outcome = scheduler.add(task);
            let landed = outcome.is_ok();
            results[slot] = Some(outcome);
            if unlocks_pending && landed {
                self.retry_pending(scheduler, &mut results);
            }
        }

        // Whatever is still pending never found its series.
        for (slot, anti) in self.pending.drain(..) {
            results[slot] = Some(Err(ScheduleError::UnmatchedCancellation {
                name: anti.name().to_string(),
            }));
        }

        results
            .into_iter()
            .map(|outcome| outcome.expect("every input slot has a result"))
            .collect()
    }

    fn retry_pending(&mut self, scheduler: &mut Scheduler, results: &mut [Option<ScheduleResult<()>>]) {
        let mut still_pending = Vec::new();
        for (slot, anti) in std::mem::take(&mut self.pending) {
            match scheduler.add(anti.clone()) {
                Err(ScheduleError::UnmatchedCancellation { .. }) => {
                    still_pending.push((slot, anti));
                }
                outcome => results[slot] = Some(outcome),
            }
        }
        self.pending = still_pending;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::task::{AntiTask, RecurringKind, RecurringTask, TransientKind, TransientTask};
    use crate::time::TaskDate;

    fn transient(name: &str, date: u32, start: f32) -> Task {
        Task::Transient(TransientTask {
            name: name.to_string(),
            kind: TransientKind::Visit,
            date: TaskDate::new(date),
            start_time: start,
            duration: 1.0,
        })
    }

    fn recurring(name: &str) -> Task {
        Task::Recurring(RecurringTask {
            name: name.to_string(),
            kind: RecurringKind::Work,
            date: TaskDate::new(20240101),
            start_time: 9.0,
            duration: 0.5,
            end_date: TaskDate::new(20240131),
            frequency: 7,
            cancellations: BTreeSet::new(),
        })
    }

    fn anti(name: &str, date: u32) -> Task {
        Task::Anti(AntiTask {
            name: name.to_string(),
            date: TaskDate::new(date),
            start_time: 9.0,
            duration: 0.5,
        })
    }

    #[test]
    fn test_marker_before_its_series() {
        let mut scheduler = Scheduler::new();
        let results = IngestSession::new().run(
            &mut scheduler,
            vec![anti("Skip", 20240108), recurring("Standup")],
        );
        assert_eq!(results, vec![Ok(()), Ok(())]);

        let series = scheduler.find("Standup").unwrap().as_recurring().unwrap();
        assert!(series.cancellations.contains(&TaskDate::new(20240108)));
    }

    #[test]
    fn test_marker_that_never_matches() {
        let mut scheduler = Scheduler::new();
        let results = IngestSession::new().run(
            &mut scheduler,
            vec![anti("Skip", 20240202), recurring("Standup")],
        );
        assert_eq!(results[1], Ok(()));
        assert_eq!(
            results[0],
            Err(ScheduleError::UnmatchedCancellation {
                name: "Skip".to_string(),
            })
        );
    }

    #[test]
    fn test_results_keep_input_order() {
        let mut scheduler = Scheduler::new();
        let results = IngestSession::new().run(
            &mut scheduler,
            vec![
                anti("Skip", 20240108),
                transient("Lunch", 20240105, 12.0),
                transient("Lunch", 20240106, 12.0),
                recurring("Standup"),
            ],
        );
        assert_eq!(results.len(), 4);
        // The held marker reports in its own slot once matched.
        assert_eq!(results[0], Ok(()));
        assert_eq!(results[1], Ok(()));
        // Duplicate name fails without stopping the batch.
        assert!(matches!(
            results[2],
            Err(ScheduleError::Validation { .. })
        ));
        assert_eq!(results[3], Ok(()));
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let mut scheduler = Scheduler::new();
        assert!(IngestSession::new()
            .run(&mut scheduler, Vec::new())
            .is_empty());
    }
}
