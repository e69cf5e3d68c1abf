//! Typed HTTP client for the Corkboard API
//!
//! Every domain operation maps to exactly one request. Non-2xx responses
//! surface the server's `{detail}` message through [`ClientError`]; a 204
//! success maps to `Ok(())`.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::error::{ClientError, ClientResult};
use crate::types::{
    ApiErrorBody, Board, BoardCreate, Column, ColumnCreate, Comment, CommentCreate,
    LoginResponse, Project, ProjectInput, RegisterInput, Task, TaskCreate, TaskUpdate, User,
};

/// Fallback when the error body carries no parseable `{detail}`
const GENERIC_ERROR: &str = "An error occurred";

/// HTTP API client for the Corkboard server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Create a new client for the given server, carrying the injected
    /// credential store
    pub fn new(config: ClientConfig, credentials: CredentialStore) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// The credential store backing this client
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Whether a bearer token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when one is present. Requests without a
    /// token go out unauthenticated; the server rejects them.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-success response to a uniform error carrying the server's
    /// detail message
    async fn error_from(response: Response) -> ClientError {
        let status = response.status();
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_else(|_| GENERIC_ERROR.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Authentication(detail),
            StatusCode::NOT_FOUND => ClientError::NotFound(detail),
            _ => ClientError::Api(detail),
        }
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }

    async fn expect_no_content(response: Response) -> ClientResult<()> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!("GET {}", path);
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        Self::expect_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!("POST {}", path);
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!("PUT {}", path);
        let response = self
            .authorize(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        debug!("DELETE {}", path);
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    // --- Auth ---

    /// Register a new user
    pub async fn register(&self, input: &RegisterInput) -> ClientResult<User> {
        self.post_json("/auth/register", input).await
    }

    /// Login with email and password.
    ///
    /// The server takes an OAuth2-style form body with the email in the
    /// `username` field. The token is stored only on success; a failed
    /// login leaves the credential store unset.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        debug!("POST /auth/login");
        let response = self
            .http
            .post(self.url("/auth/login"))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;

        let login: LoginResponse = Self::expect_json(response).await?;
        self.credentials.set(login.access_token.clone()).await?;
        Ok(login)
    }

    /// Clear the stored token
    pub async fn logout(&mut self) -> ClientResult<()> {
        self.credentials.clear().await
    }

    /// Get the currently logged-in user
    pub async fn me(&self) -> ClientResult<User> {
        self.get_json("/auth/me").await
    }

    // --- Projects ---

    /// List all projects visible to the current user
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        self.get_json("/projects").await
    }

    /// Create a project
    pub async fn create_project(&self, input: &ProjectInput) -> ClientResult<Project> {
        self.post_json("/projects", input).await
    }

    /// Get a project by id
    pub async fn get_project(&self, id: &str) -> ClientResult<Project> {
        self.get_json(&format!("/projects/{}", id)).await
    }

    /// Update a project's name and description
    pub async fn update_project(&self, id: &str, input: &ProjectInput) -> ClientResult<Project> {
        self.put_json(&format!("/projects/{}", id), input).await
    }

    /// Delete a project; deletion cascades to its boards server-side
    pub async fn delete_project(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/projects/{}", id)).await
    }

    // --- Boards ---

    /// List the boards of a project
    pub async fn list_boards(&self, project_id: &str) -> ClientResult<Vec<Board>> {
        self.get_json(&format!("/boards/project/{}", project_id))
            .await
    }

    /// Create a board
    pub async fn create_board(&self, input: &BoardCreate) -> ClientResult<Board> {
        self.post_json("/boards", input).await
    }

    // --- Columns ---

    /// List the columns of a board
    pub async fn list_columns(&self, board_id: &str) -> ClientResult<Vec<Column>> {
        self.get_json(&format!("/columns/board/{}", board_id)).await
    }

    /// Create a column at a caller-supplied position
    pub async fn create_column(&self, input: &ColumnCreate) -> ClientResult<Column> {
        self.post_json("/columns", input).await
    }

    // --- Tasks ---

    /// List the tasks of a column
    pub async fn list_tasks(&self, column_id: &str) -> ClientResult<Vec<Task>> {
        self.get_json(&format!("/tasks/column/{}", column_id)).await
    }

    /// Create a task
    pub async fn create_task(&self, input: &TaskCreate) -> ClientResult<Task> {
        self.post_json("/tasks", input).await
    }

    /// Apply a partial update to a task
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> ClientResult<Task> {
        self.put_json(&format!("/tasks/{}", id), update).await
    }

    /// Reassign a task's column and position in one call.
    ///
    /// Only the moved task is rewritten; siblings in the source and
    /// destination columns keep their positions.
    pub async fn move_task(
        &self,
        id: &str,
        new_column_id: &str,
        new_position: i64,
    ) -> ClientResult<Task> {
        debug!("POST /tasks/{}/move -> {}@{}", id, new_column_id, new_position);
        let response = self
            .authorize(
                self.http
                    .post(self.url(&format!("/tasks/{}/move", id)))
                    .query(&[
                        ("new_column_id", new_column_id),
                        ("new_position", &new_position.to_string()),
                    ]),
            )
            .send()
            .await?;
        Self::expect_json(response).await
    }

    /// Delete a task. Remaining positions in the column are not renumbered.
    pub async fn delete_task(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/tasks/{}", id)).await
    }

    // --- Comments ---

    /// List the comments on a task
    pub async fn list_comments(&self, task_id: &str) -> ClientResult<Vec<Comment>> {
        self.get_json(&format!("/comments/task/{}", task_id)).await
    }

    /// Add a comment to a task
    pub async fn create_comment(&self, input: &CommentCreate) -> ClientResult<Comment> {
        self.post_json("/comments", input).await
    }
}
