//! Schedule JSON parsing using serde_json's value tree.
//!
//! The format in the wild is loose: `Type` picks the variant, dates arrive
//! under `Date` or `StartDate` interchangeably, and numeric fields may be
//! JSON numbers or quoted numeric strings. Items parse independently so one
//! bad object never sinks the rest of the file.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::{ScheduleError, ScheduleResult};
use crate::task::{
    AntiTask, CANCELLATION_LABEL, RecurringKind, RecurringTask, Task, TransientKind, TransientTask,
};
use crate::time::TaskDate;

/// Parse schedule text into one result per task object.
pub fn parse_schedule(content: &str) -> ScheduleResult<Vec<ScheduleResult<Task>>> {
    let root: Value = serde_json::from_str(content)
        .map_err(|e| ScheduleError::Parse(format!("not valid JSON: {e}")))?;
    let items = root
        .as_array()
        .ok_or_else(|| ScheduleError::Parse("expected a top-level array of tasks".to_string()))?;
    Ok(items.iter().map(parse_task).collect())
}

/// Parse a single task object. The `Type` value decides the variant:
/// recurring categories first, then transient, then the cancellation label.
pub fn parse_task(item: &Value) -> ScheduleResult<Task> {
    let name = string_field(item, "Name")?;
    let type_label = string_field(item, "Type")?;

    let recurring_kind = RecurringKind::parse(&type_label);
    if recurring_kind != RecurringKind::Unrecognized {
        return Ok(Task::Recurring(RecurringTask {
            name,
            kind: recurring_kind,
            date: date_field(item)?,
            start_time: hours_field(item, "StartTime")?,
            duration: hours_field(item, "Duration")?,
            end_date: TaskDate::new(integer_field(item, "EndDate")?),
            frequency: integer_field(item, "Frequency")?,
            cancellations: BTreeSet::new(),
        }));
    }

    let transient_kind = TransientKind::parse(&type_label);
    if transient_kind != TransientKind::Unrecognized {
        return Ok(Task::Transient(TransientTask {
            name,
            kind: transient_kind,
            date: date_field(item)?,
            start_time: hours_field(item, "StartTime")?,
            duration: hours_field(item, "Duration")?,
        }));
    }

    if type_label == CANCELLATION_LABEL {
        return Ok(Task::Anti(AntiTask {
            name,
            date: date_field(item)?,
            start_time: hours_field(item, "StartTime")?,
            duration: hours_field(item, "Duration")?,
        }));
    }

    Err(ScheduleError::Parse(format!(
        "unknown task type '{type_label}'"
    )))
}

fn field<'v>(item: &'v Value, key: &str) -> ScheduleResult<&'v Value> {
    item.get(key)
        .ok_or_else(|| ScheduleError::Parse(format!("missing field '{key}'")))
}

fn string_field(item: &Value, key: &str) -> ScheduleResult<String> {
    field(item, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ScheduleError::Parse(format!("field '{key}' must be a string")))
}

/// A number, or a quoted number as older files spell them.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn hours_field(item: &Value, key: &str) -> ScheduleResult<f32> {
    numeric(field(item, key)?)
        .map(|n| n as f32)
        .ok_or_else(|| ScheduleError::Parse(format!("field '{key}' must be a number")))
}

fn integer_field(item: &Value, key: &str) -> ScheduleResult<u32> {
    let number = numeric(field(item, key)?)
        .ok_or_else(|| ScheduleError::Parse(format!("field '{key}' must be a number")))?;
    if number.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&number) {
        return Err(ScheduleError::Parse(format!(
            "field '{key}' must be a whole number"
        )));
    }
    Ok(number as u32)
}

/// Transient objects carry `Date`, recurring ones `StartDate`; both
/// spellings are accepted for any variant.
fn date_field(item: &Value) -> ScheduleResult<TaskDate> {
    let value = item
        .get("Date")
        .or_else(|| item.get("StartDate"))
        .ok_or_else(|| ScheduleError::Parse("missing field 'Date'".to_string()))?;
    let number = numeric(value)
        .ok_or_else(|| ScheduleError::Parse("field 'Date' must be a number".to_string()))?;
    if number.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&number) {
        return Err(ScheduleError::Parse(
            "field 'Date' must be a whole number".to_string(),
        ));
    }
    Ok(TaskDate::new(number as u32))
}
