//! The task model: three schedule variants and their validation rules.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{self, TaskDate};

/// Category of a one-time task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransientKind {
    Visit,
    Shopping,
    Appointment,
    /// Placeholder for a spelling no category matched. Rejected by validation.
    Unrecognized,
}

impl TransientKind {
    pub const ALL: [TransientKind; 3] = [
        TransientKind::Visit,
        TransientKind::Shopping,
        TransientKind::Appointment,
    ];

    /// Parse the schedule-file spelling. Unknown text maps to the sentinel.
    pub fn parse(text: &str) -> Self {
        match text {
            "Visit" => TransientKind::Visit,
            "Shopping" => TransientKind::Shopping,
            "Appointment" => TransientKind::Appointment,
            _ => TransientKind::Unrecognized,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransientKind::Visit => "Visit",
            TransientKind::Shopping => "Shopping",
            TransientKind::Appointment => "Appointment",
            TransientKind::Unrecognized => "None",
        }
    }
}

impl fmt::Display for TransientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category of a recurring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurringKind {
    Class,
    Study,
    Sleep,
    Exercise,
    Work,
    Meal,
    /// Placeholder for a spelling no category matched. Rejected by validation.
    Unrecognized,
}

impl RecurringKind {
    pub const ALL: [RecurringKind; 6] = [
        RecurringKind::Class,
        RecurringKind::Study,
        RecurringKind::Sleep,
        RecurringKind::Exercise,
        RecurringKind::Work,
        RecurringKind::Meal,
    ];

    /// Parse the schedule-file spelling. Unknown text maps to the sentinel.
    pub fn parse(text: &str) -> Self {
        match text {
            "Class" => RecurringKind::Class,
            "Study" => RecurringKind::Study,
            "Sleep" => RecurringKind::Sleep,
            "Exercise" => RecurringKind::Exercise,
            "Work" => RecurringKind::Work,
            "Meal" => RecurringKind::Meal,
            _ => RecurringKind::Unrecognized,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecurringKind::Class => "Class",
            RecurringKind::Study => "Study",
            RecurringKind::Sleep => "Sleep",
            RecurringKind::Exercise => "Exercise",
            RecurringKind::Work => "Work",
            RecurringKind::Meal => "Meal",
            RecurringKind::Unrecognized => "None",
        }
    }
}

impl fmt::Display for RecurringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The wire label shared by all cancellation markers.
pub const CANCELLATION_LABEL: &str = "Cancellation";

/// A one-time task occupying a single slot on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransientTask {
    pub name: String,
    pub kind: TransientKind,
    pub date: TaskDate,
    /// Start of the slot in decimal hours from midnight.
    pub start_time: f32,
    /// Length of the slot in decimal hours.
    pub duration: f32,
}

/// A task repeating every `frequency` days from `date` through `end_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTask {
    pub name: String,
    pub kind: RecurringKind,
    pub date: TaskDate,
    pub start_time: f32,
    pub duration: f32,
    pub end_date: TaskDate,
    /// Days between occurrences: 1 (daily) or 7 (weekly).
    pub frequency: u32,
    /// Dates knocked out by matched cancellation markers.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub cancellations: BTreeSet<TaskDate>,
}

impl RecurringTask {
    /// Clock value where each occurrence ends, wrapped past midnight.
    pub fn end_time(&self) -> f32 {
        time::wrap_clock(self.start_time + self.duration)
    }

    pub fn cadence_label(&self) -> &'static str {
        if self.frequency == 1 { "daily" } else { "weekly" }
    }
}

/// A marker cancelling one occurrence of some recurring series.
/// Never stored as a schedule entry of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiTask {
    pub name: String,
    pub date: TaskDate,
    pub start_time: f32,
    pub duration: f32,
}

/// A schedule entry: exactly one of the three variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Task {
    Transient(TransientTask),
    Recurring(RecurringTask),
    Anti(AntiTask),
}

impl Task {
    pub fn name(&self) -> &str {
        match self {
            Task::Transient(t) => &t.name,
            Task::Recurring(t) => &t.name,
            Task::Anti(t) => &t.name,
        }
    }

    /// The task's (first) date.
    pub fn date(&self) -> TaskDate {
        match self {
            Task::Transient(t) => t.date,
            Task::Recurring(t) => t.date,
            Task::Anti(t) => t.date,
        }
    }

    pub fn start_time(&self) -> f32 {
        match self {
            Task::Transient(t) => t.start_time,
            Task::Recurring(t) => t.start_time,
            Task::Anti(t) => t.start_time,
        }
    }

    pub fn duration(&self) -> f32 {
        match self {
            Task::Transient(t) => t.duration,
            Task::Recurring(t) => t.duration,
            Task::Anti(t) => t.duration,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Task::Transient(t) => t.kind.label(),
            Task::Recurring(t) => t.kind.label(),
            Task::Anti(_) => CANCELLATION_LABEL,
        }
    }

    pub fn as_recurring(&self) -> Option<&RecurringTask> {
        match self {
            Task::Recurring(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_recurring_mut(&mut self) -> Option<&mut RecurringTask> {
        match self {
            Task::Recurring(t) => Some(t),
            _ => None,
        }
    }

    pub fn set_name(&mut self, name: String) {
        match self {
            Task::Transient(t) => t.name = name,
            Task::Recurring(t) => t.name = name,
            Task::Anti(t) => t.name = name,
        }
    }

    pub fn set_date(&mut self, date: TaskDate) {
        match self {
            Task::Transient(t) => t.date = date,
            Task::Recurring(t) => t.date = date,
            Task::Anti(t) => t.date = date,
        }
    }

    pub fn set_start_time(&mut self, start_time: f32) {
        match self {
            Task::Transient(t) => t.start_time = start_time,
            Task::Recurring(t) => t.start_time = start_time,
            Task::Anti(t) => t.start_time = start_time,
        }
    }

    pub fn set_duration(&mut self, duration: f32) {
        match self {
            Task::Transient(t) => t.duration = duration,
            Task::Recurring(t) => t.duration = duration,
            Task::Anti(t) => t.duration = duration,
        }
    }

    /// Sort key for the schedule's date-then-start ordering. Start times are
    /// quarter-aligned, so whole minutes compare exactly.
    pub(crate) fn order_key(&self) -> (u32, i64) {
        (self.date().encoded(), (self.start_time() * 60.0).round() as i64)
    }

    /// Check the structural rules, in order. The first failure wins.
    pub fn validate(&self) -> Result<(), InvalidReason> {
        if !self.date().is_well_formed() {
            return Err(InvalidReason::StartDate);
        }
        let start = self.start_time();
        if !(0.0..24.0).contains(&start) || !time::quarter_aligned(start) {
            return Err(InvalidReason::StartTime);
        }
        let duration = self.duration();
        if duration <= 0.0 || !time::quarter_aligned(duration) {
            return Err(InvalidReason::Duration);
        }
        match self {
            Task::Transient(t) => {
                if t.kind == TransientKind::Unrecognized {
                    return Err(InvalidReason::Kind);
                }
            }
            Task::Recurring(t) => {
                if !t.end_date.is_well_formed() {
                    return Err(InvalidReason::EndDate);
                }
                if t.end_date < t.date {
                    return Err(InvalidReason::EndBeforeStart);
                }
                if t.frequency != 1 && t.frequency != 7 {
                    return Err(InvalidReason::Frequency);
                }
                if t.kind == RecurringKind::Unrecognized {
                    return Err(InvalidReason::Kind);
                }
            }
            Task::Anti(_) => {}
        }
        Ok(())
    }
}

/// Why a task failed validation. The Display form is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    StartDate,
    StartTime,
    Duration,
    EndDate,
    EndBeforeStart,
    Frequency,
    Kind,
    DuplicateName,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            InvalidReason::StartDate => "the start date is invalid",
            InvalidReason::StartTime => "the start time is invalid",
            InvalidReason::Duration => "the duration is invalid",
            InvalidReason::EndDate => "the end date is invalid",
            InvalidReason::EndBeforeStart => "the end date precedes the start date",
            InvalidReason::Frequency => "the frequency must be daily (1) or weekly (7)",
            InvalidReason::Kind => "the task type is not recognized",
            InvalidReason::DuplicateName => "a task with this name already exists",
        };
        write!(f, "{message}")
    }
}

impl fmt::Display for TransientTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | Type: {}", self.name, self.kind)?;
        write!(
            f,
            "Date: {} | Start Time: {} | Duration: {}",
            self.date.pretty(),
            self.start_time,
            self.duration
        )
    }
}

impl fmt::Display for RecurringTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Type: {}", self.name, self.kind)?;
        if !self.cancellations.is_empty() {
            write!(f, " | Cancelled: {}", self.cancellations.len())?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Start Date: {} | Start Time: {} | Duration: {}",
            self.date.pretty(),
            self.start_time,
            self.duration
        )?;
        write!(
            f,
            "End Date: {} | Repeats: {}",
            self.end_date.pretty(),
            self.cadence_label()
        )
    }
}

impl fmt::Display for AntiTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | Type: {}", self.name, CANCELLATION_LABEL)?;
        write!(
            f,
            "Date: {} | Start Time: {} | Duration: {}",
            self.date.pretty(),
            self.start_time,
            self.duration
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Transient(t) => t.fmt(f),
            Task::Recurring(t) => t.fmt(f),
            Task::Anti(t) => t.fmt(f),
        }
    }
}
