//! Conflict detection between schedule entries.
//!
//! The interval test is deliberately one-sided: a probe collides with an
//! anchor when their starts coincide or the probe's end runs past the
//! anchor's start. Which side of a pair probes depends on the variants
//! involved, and any pair with a recurring task is driven from the
//! recurring side by walking its occurrences. Tasks that roll past
//! midnight are only compared on their start date.

use crate::occurrence::Occurrence;
use crate::task::{AntiTask, RecurringTask, Task};
use crate::time::TaskDate;

/// One-sided interval test against an anchor starting at `anchor_start`.
fn probe_hits(probe_start: f32, probe_end: f32, anchor_start: f32) -> bool {
    probe_start == anchor_start || probe_end > anchor_start
}

fn raw_end(task: &Task) -> f32 {
    task.start_time() + task.duration()
}

/// Does `candidate` collide with `existing` anywhere in time?
///
/// Cancelled occurrences never conflict.
pub fn overlaps(candidate: &Task, existing: &Task) -> bool {
    match (candidate, existing) {
        (Task::Recurring(a), Task::Recurring(b)) => recurring_pair(a, b),
        (Task::Recurring(series), single) => {
            series_blocks(series, single.date(), single.start_time(), raw_end(single))
        }
        (single, Task::Recurring(series)) => {
            series_blocks(series, single.date(), single.start_time(), raw_end(single))
        }
        (a, b) => single_pair(a, b),
    }
}

/// Two single-slot tasks on the same date: the candidate probes the
/// existing task's start.
fn single_pair(candidate: &Task, existing: &Task) -> bool {
    candidate.date() == existing.date()
        && probe_hits(candidate.start_time(), raw_end(candidate), existing.start_time())
}

/// A single-slot task probing every live occurrence of a series.
fn series_blocks(series: &RecurringTask, date: TaskDate, start: f32, end: f32) -> bool {
    series
        .occurrences()
        .filter(|occ| !occ.cancelled)
        .filter(|occ| occ.date == date)
        .any(|occ| probe_hits(start, end, occ.start))
}

/// Two series conflict when live occurrences share a date and collide.
/// The candidate's occurrences probe the existing series' starts.
fn recurring_pair(candidate: &RecurringTask, existing: &RecurringTask) -> bool {
    candidate
        .occurrences()
        .filter(|occ| !occ.cancelled)
        .any(|probe| {
            existing
                .occurrences()
                .filter(|occ| !occ.cancelled)
                .any(|anchor| {
                    probe.date == anchor.date && probe_hits(probe.start, probe.end, anchor.start)
                })
        })
}

/// Cancellation matching, distinct from the conflict test above: a
/// cancellation marker claims an occurrence when the dates agree and either
/// the start times are exactly equal or the two intervals intersect.
pub fn occurrence_matches(occurrence: &Occurrence, anti: &AntiTask) -> bool {
    if occurrence.date != anti.date {
        return false;
    }
    let anti_end = anti.start_time + anti.duration;
    occurrence.start == anti.start_time
        || (anti.start_time < occurrence.end && occurrence.start < anti_end)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::task::{RecurringKind, TransientKind, TransientTask};

    fn transient(name: &str, date: u32, start: f32, duration: f32) -> Task {
        Task::Transient(TransientTask {
            name: name.to_string(),
            kind: TransientKind::Appointment,
            date: TaskDate::new(date),
            start_time: start,
            duration,
        })
    }

    fn recurring(name: &str, start: u32, end: u32, frequency: u32, at: f32, duration: f32) -> Task {
        Task::Recurring(RecurringTask {
            name: name.to_string(),
            kind: RecurringKind::Work,
            date: TaskDate::new(start),
            start_time: at,
            duration,
            end_date: TaskDate::new(end),
            frequency,
            cancellations: BTreeSet::new(),
        })
    }

    #[test]
    fn test_transient_pair_overlap() {
        let meeting = transient("Meeting", 20240110, 9.0, 1.0);
        let lunch = transient("Lunch", 20240110, 9.5, 0.5);
        assert!(overlaps(&lunch, &meeting));
    }

    #[test]
    fn test_transient_pair_same_start_conflicts() {
        let a = transient("A", 20240110, 9.0, 0.25);
        let b = transient("B", 20240110, 9.0, 4.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_transient_pair_disjoint_before() {
        // Candidate ends before the existing task starts.
        let existing = transient("Late", 20240110, 14.0, 1.0);
        let candidate = transient("Early", 20240110, 9.0, 1.0);
        assert!(!overlaps(&candidate, &existing));
    }

    #[test]
    fn test_transient_pair_is_one_sided() {
        // The test only looks at the candidate's end against the existing
        // start, so the earlier slot can join a schedule holding the later
        // one, while the reverse order is rejected.
        let first = transient("First", 20240110, 9.0, 1.0);
        let second = transient("Second", 20240110, 10.0, 1.0);
        assert!(!overlaps(&first, &second));
        assert!(overlaps(&second, &first));
    }

    #[test]
    fn test_different_dates_never_conflict() {
        let a = transient("A", 20240110, 9.0, 1.0);
        let b = transient("B", 20240111, 9.0, 1.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_transient_against_series_occurrence() {
        let series = recurring("Standup", 20240101, 20240131, 7, 9.0, 0.5);
        let hit = transient("Review", 20240108, 9.25, 1.0);
        let miss = transient("Review", 20240109, 9.25, 1.0);
        assert!(overlaps(&hit, &series));
        assert!(overlaps(&series, &hit));
        assert!(!overlaps(&miss, &series));
    }

    #[test]
    fn test_cancelled_occurrence_does_not_block() {
        let mut series = recurring("Standup", 20240101, 20240131, 7, 9.0, 0.5);
        if let Task::Recurring(r) = &mut series {
            r.cancellations.insert(TaskDate::new(20240108));
        }
        let candidate = transient("Review", 20240108, 9.0, 0.5);
        assert!(!overlaps(&candidate, &series));
        assert!(!overlaps(&series, &candidate));
    }

    #[test]
    fn test_recurring_pair_sharing_dates() {
        let standup = recurring("Standup", 20240101, 20240131, 7, 9.0, 0.5);
        let retro = recurring("Retro", 20240108, 20240129, 7, 9.25, 0.5);
        assert!(overlaps(&retro, &standup));

        // Disjoint and earlier in the day, so the one-sided test clears it.
        let gym = recurring("Gym", 20240101, 20240131, 7, 6.0, 1.0);
        assert!(!overlaps(&gym, &standup));
    }

    #[test]
    fn test_recurring_pair_interleaved_weeks() {
        // Same clock slot, but the weekly walks never land on a shared date.
        let odd = recurring("Odd", 20240101, 20240115, 7, 9.0, 0.5);
        let even = recurring("Even", 20240104, 20240118, 7, 9.0, 0.5);
        assert!(!overlaps(&odd, &even));
    }

    #[test]
    fn test_match_by_exact_start() {
        let series = recurring("Standup", 20240101, 20240131, 7, 9.0, 0.5);
        let anti = AntiTask {
            name: "Skip".to_string(),
            date: TaskDate::new(20240108),
            start_time: 9.0,
            duration: 0.5,
        };
        let occurrence = series
            .as_recurring()
            .unwrap()
            .occurrences()
            .find(|o| o.date == anti.date)
            .unwrap();
        assert!(occurrence_matches(&occurrence, &anti));
    }

    #[test]
    fn test_match_by_intersection() {
        let series = recurring("Standup", 20240101, 20240131, 7, 9.0, 1.0);
        let occurrence = series.as_recurring().unwrap().occurrences().next().unwrap();

        let covering = AntiTask {
            name: "Skip".to_string(),
            date: TaskDate::new(20240101),
            start_time: 8.5,
            duration: 2.0,
        };
        assert!(occurrence_matches(&occurrence, &covering));

        let disjoint = AntiTask {
            name: "Skip".to_string(),
            date: TaskDate::new(20240101),
            start_time: 14.0,
            duration: 1.0,
        };
        assert!(!occurrence_matches(&occurrence, &disjoint));

        let wrong_date = AntiTask {
            name: "Skip".to_string(),
            date: TaskDate::new(20240102),
            start_time: 9.0,
            duration: 1.0,
        };
        assert!(!occurrence_matches(&occurrence, &wrong_date));
    }
}
