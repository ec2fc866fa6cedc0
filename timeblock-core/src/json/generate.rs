//! Schedule JSON generation.
//!
//! Writes the same shape the parser reads: transient tasks carry `Date`,
//! recurring tasks `StartDate`. Cancellation markers are never written
//! standalone; their effect lives in the owning series' cancelled dates.
//! Values go out as plain JSON numbers even where older files quoted them.

use serde_json::{Value, json};

use crate::task::Task;

/// Render the schedule as pretty-printed JSON text.
pub fn generate_schedule(tasks: &[Task]) -> String {
    let items: Vec<Value> = tasks.iter().filter_map(task_value).collect();
    serde_json::to_string_pretty(&Value::Array(items)).unwrap()
}

fn task_value(task: &Task) -> Option<Value> {
    match task {
        Task::Transient(t) => Some(json!({
            "Name": t.name,
            "Type": t.kind.label(),
            "Date": t.date.encoded(),
            "StartTime": t.start_time,
            "Duration": t.duration,
        })),
        Task::Recurring(t) => Some(json!({
            "Name": t.name,
            "Type": t.kind.label(),
            "StartDate": t.date.encoded(),
            "StartTime": t.start_time,
            "Duration": t.duration,
            "EndDate": t.end_date.encoded(),
            "Frequency": t.frequency,
        })),
        Task::Anti(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::json::parse_schedule;
    use crate::task::{
        AntiTask, RecurringKind, RecurringTask, TransientKind, TransientTask,
    };
    use crate::time::TaskDate;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::Transient(TransientTask {
                name: "Dentist".to_string(),
                kind: TransientKind::Appointment,
                date: TaskDate::new(20240514),
                start_time: 9.0,
                duration: 1.0,
            }),
            Task::Recurring(RecurringTask {
                name: "Standup".to_string(),
                kind: RecurringKind::Work,
                date: TaskDate::new(20240101),
                start_time: 9.0,
                duration: 0.5,
                end_date: TaskDate::new(20240131),
                frequency: 7,
                cancellations: BTreeSet::new(),
            }),
        ]
    }

    #[test]
    fn test_round_trip() {
        let tasks = sample_tasks();
        let text = generate_schedule(&tasks);
        let reparsed: Vec<Task> = parse_schedule(&text)
            .unwrap()
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(reparsed, tasks);
    }

    #[test]
    fn test_variant_date_keys() {
        let text = generate_schedule(&sample_tasks());
        assert!(text.contains("\"Date\": 20240514"));
        assert!(text.contains("\"StartDate\": 20240101"));
        assert!(!text.contains("\"Date\": 20240101"));
    }

    #[test]
    fn test_anti_tasks_never_serialized() {
        let tasks = vec![Task::Anti(AntiTask {
            name: "Skip".to_string(),
            date: TaskDate::new(20240108),
            start_time: 9.0,
            duration: 0.5,
        })];
        let text = generate_schedule(&tasks);
        assert_eq!(parse_schedule(&text).unwrap().len(), 0);
    }

    #[test]
    fn test_cancellations_stay_out_of_the_wire_shape() {
        let mut tasks = sample_tasks();
        if let Task::Recurring(series) = &mut tasks[1] {
            series.cancellations.insert(TaskDate::new(20240108));
        }
        let text = generate_schedule(&tasks);
        assert!(!text.contains("ancellation"));

        // The reparsed series matches up to its runtime cancellation set.
        let reparsed = parse_schedule(&text).unwrap();
        match reparsed[1].as_ref().unwrap() {
            Task::Recurring(series) => assert!(series.cancellations.is_empty()),
            other => panic!("expected a recurring task, got {other:?}"),
        }
    }
}
