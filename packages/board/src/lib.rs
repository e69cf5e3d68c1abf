//! Corkboard Ordering Core Package
//!
//! Owns the relative order of columns within a board and tasks within a
//! column: the bootstrap policy for new projects, the move semantics, the
//! canonical read-time sorts, and the board view model that reconciles the
//! local view with server state after each mutation.

pub mod api;
pub mod bootstrap;
pub mod error;
pub mod ordering;
pub mod view;

// Re-export commonly used types
pub use api::BoardApi;
pub use bootstrap::{ensure_board, Bootstrap, DEFAULT_BOARD_NAME, DEFAULT_COLUMNS};
pub use error::{BoardError, BoardResult};
pub use ordering::{
    append_position, move_append_position, plan_column_reorder, plan_move, sort_columns,
    sort_tasks, PositionUpdate,
};
pub use view::{BoardView, BoardViewModel, TaskDraft};
