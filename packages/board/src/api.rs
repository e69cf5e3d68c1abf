//! Seam between the ordering core and the network

use async_trait::async_trait;

use corkboard_client::{
    ApiClient, Board, BoardCreate, ClientResult, Column, ColumnCreate, Task, TaskCreate,
    TaskUpdate,
};

/// The subset of API operations the ordering core consumes.
///
/// The HTTP client implements this; tests substitute an in-memory fake so
/// ordering semantics can be exercised without a network boundary.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// List the boards of a project
    async fn list_boards(&self, project_id: &str) -> ClientResult<Vec<Board>>;

    /// Create a board
    async fn create_board(&self, input: &BoardCreate) -> ClientResult<Board>;

    /// List the columns of a board
    async fn list_columns(&self, board_id: &str) -> ClientResult<Vec<Column>>;

    /// Create a column at an explicit position
    async fn create_column(&self, input: &ColumnCreate) -> ClientResult<Column>;

    /// List the tasks of a column
    async fn list_tasks(&self, column_id: &str) -> ClientResult<Vec<Task>>;

    /// Create a task
    async fn create_task(&self, input: &TaskCreate) -> ClientResult<Task>;

    /// Apply a partial update to a task
    async fn update_task(&self, id: &str, update: &TaskUpdate) -> ClientResult<Task>;

    /// Reassign a task's column and position in one call
    async fn move_task(
        &self,
        id: &str,
        new_column_id: &str,
        new_position: i64,
    ) -> ClientResult<Task>;

    /// Delete a task
    async fn delete_task(&self, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl BoardApi for ApiClient {
    async fn list_boards(&self, project_id: &str) -> ClientResult<Vec<Board>> {
        ApiClient::list_boards(self, project_id).await
    }

    async fn create_board(&self, input: &BoardCreate) -> ClientResult<Board> {
        ApiClient::create_board(self, input).await
    }

    async fn list_columns(&self, board_id: &str) -> ClientResult<Vec<Column>> {
        ApiClient::list_columns(self, board_id).await
    }

    async fn create_column(&self, input: &ColumnCreate) -> ClientResult<Column> {
        ApiClient::create_column(self, input).await
    }

    async fn list_tasks(&self, column_id: &str) -> ClientResult<Vec<Task>> {
        ApiClient::list_tasks(self, column_id).await
    }

    async fn create_task(&self, input: &TaskCreate) -> ClientResult<Task> {
        ApiClient::create_task(self, input).await
    }

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> ClientResult<Task> {
        ApiClient::update_task(self, id, update).await
    }

    async fn move_task(
        &self,
        id: &str,
        new_column_id: &str,
        new_position: i64,
    ) -> ClientResult<Task> {
        ApiClient::move_task(self, id, new_column_id, new_position).await
    }

    async fn delete_task(&self, id: &str) -> ClientResult<()> {
        ApiClient::delete_task(self, id).await
    }
}
