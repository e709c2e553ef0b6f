//! The canonical display order for tasks.
//!
//! Every task view shows the same schedule-driven order:
//!
//! 1. `due_date` ascending — the soonest day first,
//! 2. `due_time` ascending among equal dates,
//! 3. `priority` ascending among equal dates and times (High = 1 first),
//! 4. insertion order among full ties (the sort is stable).
//!
//! The comparator is exposed separately from the sorting entry points so
//! tests and callers can reason about pairs of tasks directly.

use crate::libs::task::Task;
use std::cmp::Ordering;

/// Compares two tasks by the canonical key: due date, then due time,
/// then priority.
pub fn compare(a: &Task, b: &Task) -> Ordering {
    a.due_date
        .cmp(&b.due_date)
        .then_with(|| a.due_time.cmp(&b.due_time))
        .then_with(|| a.priority.cmp(&b.priority))
}

/// Reorders a slice of tasks in place into the canonical order.
///
/// Uses a stable sort: tasks that tie on all three keys keep their
/// relative order in the collection.
pub fn canonical(tasks: &mut [Task]) {
    tasks.sort_by(compare);
}

/// Consumes a snapshot and returns it in the canonical order.
pub fn canonical_order(mut tasks: Vec<Task>) -> Vec<Task> {
    canonical(&mut tasks);
    tasks
}
