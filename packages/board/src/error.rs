//! Board error types
use corkboard_client::{Board, ClientError, Column};
use thiserror::Error;

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-specific error types
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The board was created but not all of its default columns were.
    ///
    /// Already-created columns are left in place; there is no rollback.
    /// Callers must treat this state as distinct from "board ready".
    #[error("board '{}' is partially initialized: {}/3 default columns created ({reason})", board.name, columns.len())]
    PartialBootstrap {
        board: Board,
        columns: Vec<Column>,
        reason: String,
    },

    #[error("column not found in board view: {0}")]
    UnknownColumn(String),

    #[error("task not found in board view: {0}")]
    UnknownTask(String),
}

impl BoardError {
    /// Check if this failure should send the user back to login
    pub fn is_auth_error(&self) -> bool {
        matches!(self, BoardError::Client(e) if e.is_auth_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_partial_bootstrap_display() {
        let err = BoardError::PartialBootstrap {
            board: Board {
                id: "b1".to_string(),
                project_id: "p1".to_string(),
                name: "Main Board".to_string(),
                position: 0,
                created_at: Utc::now(),
            },
            columns: vec![],
            reason: "Network error: timed out".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Main Board"));
        assert!(msg.contains("0/3"));
    }

    #[test]
    fn test_auth_error_passthrough() {
        let err = BoardError::Client(ClientError::auth("Not authenticated"));
        assert!(err.is_auth_error());

        let err = BoardError::UnknownColumn("c1".to_string());
        assert!(!err.is_auth_error());
    }
}
