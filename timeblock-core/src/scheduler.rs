//! The ordered task store and its accept/reject pipeline.

use crate::cancellation::{self, CancellationEvent, CancellationState};
use crate::error::{ScheduleError, ScheduleResult};
use crate::overlap;
use crate::task::{AntiTask, InvalidReason, Task};
use crate::time::TaskDate;

/// An ordered collection of active tasks.
///
/// Entries are kept ascending by (date, start time). All mutation goes
/// through [`Scheduler::add`], [`Scheduler::delete`] and
/// [`Scheduler::reschedule`], which preserve both the ordering and the
/// no-overlap guarantee.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler { tasks: Vec::new() }
    }

    /// Validate and insert a task, or absorb a cancellation marker into the
    /// recurring series it targets.
    ///
    /// Anti-tasks never become entries of their own: adding one records the
    /// cancelled date on the first series with a matching occurrence.
    /// Conflicts carry the name of the entry that blocked the candidate.
    pub fn add(&mut self, task: Task) -> ScheduleResult<()> {
        if let Err(reason) = task.validate() {
            return Err(ScheduleError::Validation {
                name: task.name().to_string(),
                reason,
            });
        }

        match task {
            Task::Anti(anti) => self.absorb(anti),
            task => {
                if self.tasks.iter().any(|t| t.name() == task.name()) {
                    return Err(ScheduleError::Validation {
                        name: task.name().to_string(),
                        reason: InvalidReason::DuplicateName,
                    });
                }
                if let Some(existing) = self.tasks.iter().find(|t| overlap::overlaps(&task, t)) {
                    return Err(ScheduleError::Conflict {
                        task: task.name().to_string(),
                        with: existing.name().to_string(),
                    });
                }
                self.insert_ordered(task);
                Ok(())
            }
        }
    }

    /// Bind a cancellation marker to the first series with a matching
    /// occurrence, driving its lifecycle to a terminal state.
    fn absorb(&mut self, anti: AntiTask) -> ScheduleResult<()> {
        let mut state = CancellationState::Null
            .apply(CancellationEvent::Create)
            .apply(CancellationEvent::Submit);

        let matched = self
            .tasks
            .iter_mut()
            .filter_map(Task::as_recurring_mut)
            .find_map(|series| cancellation::attach(series, &anti));

        state = state.apply(match matched {
            Some(_) => CancellationEvent::MatchFound,
            None => CancellationEvent::NoMatchFound,
        });

        match state {
            CancellationState::Scheduled => Ok(()),
            _ => Err(ScheduleError::UnmatchedCancellation { name: anti.name }),
        }
    }

    fn insert_ordered(&mut self, task: Task) {
        let at = self
            .tasks
            .partition_point(|t| t.order_key() <= task.order_key());
        self.tasks.insert(at, task);
    }

    /// Add each task independently, one result per input, in input order.
    /// A failing item never stops the rest of the batch.
    pub fn add_all(&mut self, tasks: impl IntoIterator<Item = Task>) -> Vec<ScheduleResult<()>> {
        tasks.into_iter().map(|task| self.add(task)).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name() == name)
    }

    /// Remove the named task. A missing name is a normal miss, not an error.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.tasks.iter().position(|t| t.name() == name) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Active tasks in ascending (date, start time) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Apply field changes to the named task, keeping the schedule
    /// conflict-free. On any failure the original entry stays in place
    /// untouched.
    pub fn reschedule(&mut self, name: &str, changes: Reschedule) -> ScheduleResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.name() == name)
            .ok_or_else(|| ScheduleError::NotFound {
                name: name.to_string(),
            })?;

        let original = self.tasks.remove(index);
        let mut updated = original.clone();
        changes.apply_to(&mut updated);

        match self.add(updated) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.insert_ordered(original);
                Err(error)
            }
        }
    }
}

/// Field changes applied by [`Scheduler::reschedule`]. A `None` field
/// keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct Reschedule {
    pub name: Option<String>,
    pub date: Option<TaskDate>,
    pub start_time: Option<f32>,
    pub duration: Option<f32>,
}

impl Reschedule {
    fn apply_to(&self, task: &mut Task) {
        if let Some(name) = &self.name {
            task.set_name(name.clone());
        }
        if let Some(date) = self.date {
            task.set_date(date);
        }
        if let Some(start_time) = self.start_time {
            task.set_start_time(start_time);
        }
        if let Some(duration) = self.duration {
            task.set_duration(duration);
        }
    }
}
