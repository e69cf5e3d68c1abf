//! Board view model
//!
//! In-memory aggregate of one board's columns and tasks. The baseline
//! consistency strategy is reload-after-every-mutation: each write is
//! followed by a full re-fetch, so the view always reflects server truth.
//! [`BoardViewModel::apply`] is the single reconciliation entry point, so
//! an optimistic implementation can patch locally and reconcile with a
//! background reload without changing callers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use tracing::{debug, warn};

use corkboard_client::{Column, Priority, Task, TaskCreate};

use crate::api::BoardApi;
use crate::error::{BoardError, BoardResult};
use crate::ordering;

/// A loaded snapshot of one board: columns in canonical order, tasks keyed
/// by column id
#[derive(Debug, Clone)]
pub struct BoardView {
    pub board_id: String,
    pub columns: Vec<Column>,
    pub tasks: HashMap<String, Vec<Task>>,
}

impl BoardView {
    /// Fetch a board's columns and tasks.
    ///
    /// Column-task fetches run concurrently; results are keyed by column
    /// id so no column's list can overwrite another's, whatever the
    /// completion order. Columns and tasks come back in canonical order.
    pub async fn load(api: &dyn BoardApi, board_id: &str) -> BoardResult<Self> {
        let mut columns = api.list_columns(board_id).await?;
        ordering::sort_columns(&mut columns);

        let fetches = columns.iter().map(|column| {
            let column_id = column.id.clone();
            async move {
                let tasks = api.list_tasks(&column_id).await?;
                Ok::<_, corkboard_client::ClientError>((column_id, tasks))
            }
        });

        let mut tasks = HashMap::new();
        for (column_id, mut column_tasks) in try_join_all(fetches).await? {
            ordering::sort_tasks(&mut column_tasks);
            tasks.insert(column_id, column_tasks);
        }

        debug!("loaded board {} ({} columns)", board_id, columns.len());
        Ok(Self {
            board_id: board_id.to_string(),
            columns,
            tasks,
        })
    }

    /// Tasks of a column, in canonical order
    pub fn column_tasks(&self, column_id: &str) -> &[Task] {
        self.tasks.get(column_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find a task anywhere on the board
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks
            .values()
            .flat_map(|tasks| tasks.iter())
            .find(|t| t.id == task_id)
    }

    /// Find a column by its (case-insensitive) name
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Fields for a task created through the view model; column and position
/// are supplied by the ordering core
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// View model for one board
pub struct BoardViewModel<'a> {
    api: &'a dyn BoardApi,
    view: BoardView,
}

impl<'a> BoardViewModel<'a> {
    /// Load the view model for a board
    pub async fn open(api: &'a dyn BoardApi, board_id: &str) -> BoardResult<Self> {
        let view = BoardView::load(api, board_id).await?;
        Ok(Self { api, view })
    }

    /// The current snapshot
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Reconcile with a freshly loaded view.
    ///
    /// A result for a different board than the one this view model shows
    /// is discarded: in-flight loads must not be applied to a view that
    /// has since navigated elsewhere. Returns whether the view was applied.
    pub fn apply(&mut self, fresh: BoardView) -> bool {
        if fresh.board_id != self.view.board_id {
            warn!(
                "discarding stale load for board {} (showing {})",
                fresh.board_id, self.view.board_id
            );
            return false;
        }
        self.view = fresh;
        true
    }

    /// Re-fetch the whole board from the server
    pub async fn refresh(&mut self) -> BoardResult<()> {
        let fresh = BoardView::load(self.api, &self.view.board_id).await?;
        self.apply(fresh);
        Ok(())
    }

    /// Create a task at the end of a column.
    ///
    /// The position is computed as the column's current task count. That
    /// read-then-write can race with another client creating into the same
    /// column; the duplicate position it may produce is tolerated because
    /// rendering tie-breaks on creation time.
    pub async fn create_task(&mut self, column_id: &str, draft: TaskDraft) -> BoardResult<Task> {
        if !self.view.tasks.contains_key(column_id) {
            return Err(BoardError::UnknownColumn(column_id.to_string()));
        }
        let position = ordering::append_position(self.view.column_tasks(column_id));

        let task = self
            .api
            .create_task(&TaskCreate {
                title: draft.title,
                description: draft.description,
                column_id: column_id.to_string(),
                position,
                priority: draft.priority,
                due_date: draft.due_date,
                assignee_id: None,
            })
            .await?;

        self.refresh().await?;
        Ok(task)
    }

    /// Move a task to a column and position in one server call.
    ///
    /// Only the moved task is rewritten; siblings keep their positions and
    /// any resulting gaps or duplicates are absorbed at read time.
    pub async fn move_task(
        &mut self,
        task_id: &str,
        dest_column_id: &str,
        dest_position: i64,
    ) -> BoardResult<Task> {
        if self.view.task(task_id).is_none() {
            return Err(BoardError::UnknownTask(task_id.to_string()));
        }
        let task = self
            .api
            .move_task(task_id, dest_column_id, dest_position)
            .await?;
        self.refresh().await?;
        Ok(task)
    }

    /// Move a task and renumber affected siblings so both columns end up
    /// dense.
    ///
    /// Issues one position update per shifted sibling after the move call;
    /// the batch is not atomic server-side, which is why sparse tolerance
    /// is the default and this is opt-in.
    pub async fn move_task_dense(
        &mut self,
        task_id: &str,
        dest_column_id: &str,
        dest_position: i64,
    ) -> BoardResult<Task> {
        let source_column_id = self
            .view
            .task(task_id)
            .map(|t| t.column_id.clone())
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;

        let plan = ordering::plan_move(
            self.view.column_tasks(&source_column_id),
            self.view.column_tasks(dest_column_id),
            task_id,
            dest_position,
        );

        let task = self
            .api
            .move_task(task_id, dest_column_id, dest_position)
            .await?;

        for update in &plan {
            self.api
                .update_task(
                    &update.id,
                    &corkboard_client::TaskUpdate::position(update.position),
                )
                .await?;
        }

        self.refresh().await?;
        Ok(task)
    }

    /// Delete a task. Siblings are not renumbered.
    pub async fn delete_task(&mut self, task_id: &str) -> BoardResult<()> {
        self.api.delete_task(task_id).await?;
        self.refresh().await?;
        Ok(())
    }
}
