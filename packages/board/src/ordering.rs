//! Ordering rules for columns and tasks
//!
//! Positions are integer ordering hints, dense and zero-based by
//! convention but not enforced by the server on every mutation path.
//! Creation is a read-then-write (`position = current count`), so two
//! concurrent clients can produce duplicate positions; moves and deletes
//! never renumber siblings. These functions define the canonical read-time
//! order and compute the optional renumbering plans for callers that want
//! dense positions back.

use corkboard_client::{Column, Task};

/// Sort columns into their canonical render order.
///
/// Server responses are not assumed to arrive pre-sorted; this is the
/// read-time ordering applied on every load.
pub fn sort_columns(columns: &mut [Column]) {
    columns.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.id.cmp(&b.id)));
}

/// Sort tasks into their canonical render order.
///
/// Position ties (possible after concurrent creates) break on creation
/// time, then id, so the order is stable across reloads.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Position for a task appended to the end of a column
pub fn append_position(tasks: &[Task]) -> i64 {
    tasks.len() as i64
}

/// Position for a task moved to the end of a column.
///
/// Unlike [`append_position`], the moved task is excluded from the count:
/// when it already lives in the destination column its current slot must
/// not push the end out by one.
pub fn move_append_position(dest: &[Task], task_id: &str) -> i64 {
    dest.iter().filter(|t| t.id != task_id).count() as i64
}

/// A single sibling position reassignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionUpdate {
    pub id: String,
    pub position: i64,
}

/// Compute the sibling renumbering needed to keep positions dense after a
/// move.
///
/// The move call itself only rewrites the moved task; this plan covers
/// everyone else: source tasks after the vacated slot shift down one,
/// destination tasks at or after the insertion slot shift up one. For a
/// same-column move pass the column's task list as both `source` and
/// `dest`. The moved task never appears in the plan.
pub fn plan_move(
    source: &[Task],
    dest: &[Task],
    task_id: &str,
    new_position: i64,
) -> Vec<PositionUpdate> {
    let Some(moved) = source.iter().find(|t| t.id == task_id) else {
        return Vec::new();
    };
    let old_position = moved.position;
    let same_column = dest.iter().any(|t| t.id == task_id);

    let mut updates = Vec::new();

    if same_column {
        if new_position == old_position {
            return updates;
        }
        for task in dest.iter().filter(|t| t.id != task_id) {
            if new_position > old_position {
                // Moving down: the block between slides up by one
                if task.position > old_position && task.position <= new_position {
                    updates.push(PositionUpdate {
                        id: task.id.clone(),
                        position: task.position - 1,
                    });
                }
            } else if task.position >= new_position && task.position < old_position {
                // Moving up: the block between slides down by one
                updates.push(PositionUpdate {
                    id: task.id.clone(),
                    position: task.position + 1,
                });
            }
        }
    } else {
        for task in source.iter().filter(|t| t.id != task_id) {
            if task.position > old_position {
                updates.push(PositionUpdate {
                    id: task.id.clone(),
                    position: task.position - 1,
                });
            }
        }
        for task in dest {
            if task.position >= new_position {
                updates.push(PositionUpdate {
                    id: task.id.clone(),
                    position: task.position + 1,
                });
            }
        }
    }

    updates
}

/// Compute the shifts needed to reorder a whole column within its board.
///
/// Reassigning one column's position requires shifting every column
/// between the old and new slot by one; the result is meant to be issued
/// as a single logical batch so no intermediate inconsistent state is
/// visible. The moved column itself is included in the plan.
pub fn plan_column_reorder(
    columns: &[Column],
    column_id: &str,
    new_position: i64,
) -> Vec<PositionUpdate> {
    let Some(moved) = columns.iter().find(|c| c.id == column_id) else {
        return Vec::new();
    };
    let old_position = moved.position;
    if new_position == old_position {
        return Vec::new();
    }

    let mut updates = Vec::new();
    for column in columns.iter().filter(|c| c.id != column_id) {
        if new_position > old_position {
            if column.position > old_position && column.position <= new_position {
                updates.push(PositionUpdate {
                    id: column.id.clone(),
                    position: column.position - 1,
                });
            }
        } else if column.position >= new_position && column.position < old_position {
            updates.push(PositionUpdate {
                id: column.id.clone(),
                position: column.position + 1,
            });
        }
    }
    updates.push(PositionUpdate {
        id: column_id.to_string(),
        position: new_position,
    });
    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn column(id: &str, position: i64) -> Column {
        Column {
            id: id.to_string(),
            board_id: "b1".to_string(),
            name: format!("Column {}", id),
            position,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn task(id: &str, position: i64, created_offset_secs: i64) -> Task {
        Task {
            id: id.to_string(),
            column_id: "c1".to_string(),
            title: format!("Task {}", id),
            description: None,
            priority: None,
            due_date: None,
            position,
            assignee_id: None,
            created_by_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + Duration::seconds(created_offset_secs),
        }
    }

    #[test]
    fn test_columns_sort_by_position_regardless_of_arrival_order() {
        let mut columns = vec![column("done", 2), column("todo", 0), column("doing", 1)];
        sort_columns(&mut columns);

        let order: Vec<i64> = columns.iter().map(|c| c.position).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(columns[0].id, "todo");
    }

    #[test]
    fn test_tasks_tie_break_on_creation_time_then_id() {
        // Two tasks racing to position 1
        let mut tasks = vec![task("t3", 1, 20), task("t2", 1, 10), task("t1", 0, 0)];
        sort_tasks(&mut tasks);

        let order: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["t1", "t2", "t3"]);

        // Same timestamp falls back to id
        let mut tasks = vec![task("b", 0, 0), task("a", 0, 0)];
        sort_tasks(&mut tasks);
        assert_eq!(tasks[0].id, "a");
    }

    #[test]
    fn test_sort_is_stable_across_gaps() {
        // Deleting never renumbers, so gaps like 0,3,7 are legal input
        let mut tasks = vec![task("t7", 7, 2), task("t0", 0, 0), task("t3", 3, 1)];
        sort_tasks(&mut tasks);
        let order: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["t0", "t3", "t7"]);
    }

    #[test]
    fn test_append_position_is_current_count() {
        assert_eq!(append_position(&[]), 0);
        assert_eq!(append_position(&[task("t1", 0, 0), task("t2", 1, 1)]), 2);
    }

    #[test]
    fn test_move_append_position_excludes_the_moved_task() {
        let tasks = vec![task("t0", 0, 0), task("t1", 1, 1), task("t2", 2, 2)];
        // Same column: the end is the last occupied slot, not one past it
        assert_eq!(move_append_position(&tasks, "t0"), 2);
        // Task coming from another column: plain count
        assert_eq!(move_append_position(&tasks, "elsewhere"), 3);
        assert_eq!(move_append_position(&[], "t0"), 0);
    }

    #[test]
    fn test_plan_move_across_columns() {
        let source = vec![task("a0", 0, 0), task("a1", 1, 1), task("a2", 2, 2)];
        let dest = vec![task("b0", 0, 0), task("b1", 1, 1)];

        // Move a1 into the destination at slot 1
        let plan = plan_move(&source, &dest, "a1", 1);

        assert!(plan.contains(&PositionUpdate {
            id: "a2".to_string(),
            position: 1
        }));
        assert!(plan.contains(&PositionUpdate {
            id: "b1".to_string(),
            position: 2
        }));
        assert_eq!(plan.len(), 2);
        assert!(plan.iter().all(|u| u.id != "a1"));
    }

    #[test]
    fn test_plan_move_within_column() {
        let tasks = vec![task("t0", 0, 0), task("t1", 1, 1), task("t2", 2, 2)];

        // Move t0 down to the end
        let plan = plan_move(&tasks, &tasks, "t0", 2);
        assert!(plan.contains(&PositionUpdate {
            id: "t1".to_string(),
            position: 0
        }));
        assert!(plan.contains(&PositionUpdate {
            id: "t2".to_string(),
            position: 1
        }));

        // Move t2 up to the front
        let plan = plan_move(&tasks, &tasks, "t2", 0);
        assert!(plan.contains(&PositionUpdate {
            id: "t0".to_string(),
            position: 1
        }));
        assert!(plan.contains(&PositionUpdate {
            id: "t1".to_string(),
            position: 2
        }));
    }

    #[test]
    fn test_plan_move_to_current_slot_is_empty() {
        let tasks = vec![task("t0", 0, 0), task("t1", 1, 1)];
        assert!(plan_move(&tasks, &tasks, "t1", 1).is_empty());
    }

    #[test]
    fn test_plan_move_unknown_task_is_empty() {
        let tasks = vec![task("t0", 0, 0)];
        assert!(plan_move(&tasks, &tasks, "missing", 0).is_empty());
    }

    #[test]
    fn test_plan_column_reorder_shifts_the_block_between() {
        let columns = vec![column("c0", 0), column("c1", 1), column("c2", 2)];

        let plan = plan_column_reorder(&columns, "c0", 2);
        assert!(plan.contains(&PositionUpdate {
            id: "c1".to_string(),
            position: 0
        }));
        assert!(plan.contains(&PositionUpdate {
            id: "c2".to_string(),
            position: 1
        }));
        assert!(plan.contains(&PositionUpdate {
            id: "c0".to_string(),
            position: 2
        }));

        assert!(plan_column_reorder(&columns, "c1", 1).is_empty());
    }
}
