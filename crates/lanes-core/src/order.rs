//! Per-column order normalization.
//!
//! [`normalize`] is the single enforcement point for the column invariant:
//! within every column the `order` values are exactly `0..n`. It runs after
//! every mutation, before the list is persisted or rendered.

use std::collections::HashMap;

use crate::entities::{ColumnId, Task};

/// Re-densify `order` within every column.
///
/// Tasks are grouped by column and sorted by `(order, created_at)`; each task
/// then takes its position in that sort as its new `order`. Ties on both keys
/// keep their input sequence. The output keeps every task at its input
/// position; only `order` values change.
#[must_use]
pub fn normalize(mut tasks: Vec<Task>) -> Vec<Task> {
    let mut groups: HashMap<ColumnId, Vec<usize>> = HashMap::new();
    for (idx, task) in tasks.iter().enumerate() {
        groups.entry(task.column_id.clone()).or_default().push(idx);
    }

    for indices in groups.values_mut() {
        indices.sort_by(|&a, &b| {
            let (a, b) = (&tasks[a], &tasks[b]);
            a.order
                .cmp(&b.order)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        for (position, &idx) in indices.iter().enumerate() {
            tasks[idx].order = to_order(position);
        }
    }

    tasks
}

/// Whether every column already satisfies the dense-order invariant.
#[must_use]
pub fn is_normalized(tasks: &[Task]) -> bool {
    let mut groups: HashMap<&ColumnId, Vec<u32>> = HashMap::new();
    for task in tasks {
        groups.entry(&task.column_id).or_default().push(task.order);
    }
    groups.into_values().all(|mut orders| {
        orders.sort_unstable();
        orders
            .iter()
            .enumerate()
            .all(|(position, &order)| order == to_order(position))
    })
}

/// Tasks of one column, sorted by `order`.
#[must_use]
pub fn column_tasks<'a>(tasks: &'a [Task], column: &ColumnId) -> Vec<&'a Task> {
    let mut column_tasks: Vec<&Task> = tasks.iter().filter(|t| &t.column_id == column).collect();
    column_tasks.sort_by_key(|t| t.order);
    column_tasks
}

/// Number of tasks currently in `column`.
#[must_use]
pub fn column_len(tasks: &[Task], column: &ColumnId) -> u32 {
    to_order(tasks.iter().filter(|t| &t.column_id == column).count())
}

pub(crate) fn to_order(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::enums::Priority;

    fn task(id: &str, column: &str, order: u32, created_offset: i64) -> Task {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let created = base + Duration::minutes(created_offset);
        Task {
            id: id.into(),
            column_id: ColumnId::new(column),
            title: id.to_uppercase(),
            description: None,
            labels: Vec::new(),
            order,
            priority: Priority::Medium,
            due_date: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn orders(tasks: &[Task]) -> Vec<(&str, u32)> {
        tasks.iter().map(|t| (t.id.as_str(), t.order)).collect()
    }

    #[test]
    fn sparse_orders_become_dense() {
        let tasks = vec![
            task("a", "Todo", 4, 0),
            task("b", "Todo", 10, 1),
            task("c", "Todo", 7, 2),
        ];
        let normalized = normalize(tasks);
        assert_eq!(orders(&normalized), vec![("a", 0), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn duplicate_orders_break_ties_by_created_at() {
        let tasks = vec![
            task("late", "Todo", 0, 30),
            task("early", "Todo", 0, 5),
            task("mid", "Todo", 0, 10),
        ];
        let normalized = normalize(tasks);
        assert_eq!(
            orders(&normalized),
            vec![("late", 2), ("early", 0), ("mid", 1)]
        );
    }

    #[test]
    fn columns_are_normalized_independently() {
        let tasks = vec![
            task("t1", "Todo", 5, 0),
            task("d1", "Done", 3, 0),
            task("t2", "Todo", 1, 1),
            task("d2", "Done", 9, 1),
            task("x1", "Backlog", 2, 0),
        ];
        let normalized = normalize(tasks);
        assert_eq!(
            orders(&normalized),
            vec![("t1", 1), ("d1", 0), ("t2", 0), ("d2", 1), ("x1", 0)]
        );
    }

    #[test]
    fn normalize_keeps_sequence_positions_and_fields() {
        let tasks = vec![task("b", "Todo", 1, 0), task("a", "Todo", 0, 1)];
        let normalized = normalize(tasks.clone());
        assert_eq!(normalized, tasks);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![task("a", "Todo", 0, 0)])]
    #[case(vec![task("a", "Todo", 3, 0), task("b", "Todo", 3, 0), task("c", "Done", 8, 2)])]
    #[case(vec![task("a", "Done", 2, 9), task("b", "Todo", 0, 0), task("c", "Done", 2, 1), task("d", "InProgress", 40, 0)])]
    fn normalize_is_idempotent_and_dense(#[case] tasks: Vec<Task>) {
        let once = normalize(tasks);
        assert!(is_normalized(&once));
        let twice = normalize(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn status_always_matches_column() {
        let normalized = normalize(vec![task("a", "Done", 5, 0)]);
        assert!(normalized.iter().all(|t| t.status() == &t.column_id));
    }

    #[test]
    fn is_normalized_detects_gaps_and_duplicates() {
        assert!(!is_normalized(&[task("a", "Todo", 1, 0)]));
        assert!(!is_normalized(&[
            task("a", "Todo", 0, 0),
            task("b", "Todo", 0, 1)
        ]));
        assert!(is_normalized(&[
            task("a", "Todo", 1, 0),
            task("b", "Todo", 0, 1),
            task("c", "Done", 0, 0)
        ]));
    }

    #[test]
    fn column_tasks_sorted_by_order() {
        let tasks = vec![
            task("b", "Todo", 1, 0),
            task("x", "Done", 0, 0),
            task("a", "Todo", 0, 0),
        ];
        let ids: Vec<&str> = column_tasks(&tasks, &ColumnId::todo())
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(column_len(&tasks, &ColumnId::done()), 1);
    }
}
