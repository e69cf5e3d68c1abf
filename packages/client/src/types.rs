//! API request and response models for the Corkboard server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A board inside a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
}

/// A column inside a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub board_id: String,
    pub name: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
}

/// Priority levels for tasks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// A task inside a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub column_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub position: i64,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A comment on a task
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub content: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Create or update a project.
///
/// Updates replace the whole project, so `description` is always sent;
/// an explicit null clears it rather than leaving the old value in place.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInput {
    pub name: String,
    pub description: Option<String>,
}

/// Create a board
#[derive(Debug, Clone, Serialize)]
pub struct BoardCreate {
    pub project_id: String,
    pub name: String,
    pub position: i64,
}

/// Create a column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnCreate {
    pub board_id: String,
    pub name: String,
    pub position: i64,
}

/// Create a task
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub column_id: String,
    pub position: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

impl TaskCreate {
    /// Minimal task creation payload
    pub fn new(title: impl Into<String>, column_id: impl Into<String>, position: i64) -> Self {
        Self {
            title: title.into(),
            description: None,
            column_id: column_id.into(),
            position,
            priority: None,
            due_date: None,
            assignee_id: None,
        }
    }
}

/// Partial task update; only the fields that are set are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

impl TaskUpdate {
    /// Update that only reassigns a task's position
    pub fn position(position: i64) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }
}

/// Create a comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentCreate {
    pub task_id: String,
    pub content: String,
}

/// Error body returned by the server on failed requests
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_round_trip() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_task_update_skips_unset_fields() {
        let update = TaskUpdate::position(3);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "position": 3 }));
    }

    #[test]
    fn test_project_input_sends_explicit_null_description() {
        let input = ProjectInput {
            name: "Launch".to_string(),
            description: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Launch", "description": null })
        );
    }

    #[test]
    fn test_task_deserializes_without_optional_fields() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t1",
                "column_id": "c1",
                "title": "Write spec",
                "description": null,
                "position": 0,
                "created_at": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(task.title, "Write spec");
        assert!(task.priority.is_none());
        assert!(task.assignee_id.is_none());
    }
}
