//! Bootstrap policy for new projects
//!
//! Every project gets at least one usable board with the standard column
//! layout, without user configuration.

use tracing::{info, warn};

use corkboard_client::{Board, BoardCreate, Column, ColumnCreate};

use crate::api::BoardApi;
use crate::error::{BoardError, BoardResult};
use crate::ordering;

/// Name of the auto-created board
pub const DEFAULT_BOARD_NAME: &str = "Main Board";

/// The standard column layout, in position order
pub const DEFAULT_COLUMNS: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Outcome of [`ensure_board`]
#[derive(Debug)]
pub enum Bootstrap {
    /// The project already had a board; nothing was created
    Existing(Board),
    /// A fresh board with its three default columns
    Created { board: Board, columns: Vec<Column> },
}

impl Bootstrap {
    /// The board to show, regardless of how it came to exist
    pub fn board(&self) -> &Board {
        match self {
            Bootstrap::Existing(board) => board,
            Bootstrap::Created { board, .. } => board,
        }
    }

    /// Whether bootstrap actually ran
    pub fn was_created(&self) -> bool {
        matches!(self, Bootstrap::Created { .. })
    }
}

/// Guarantee the project has a board, creating the default layout if not.
///
/// Bootstrap only triggers when the observed board list is empty. The
/// board create must be server-acknowledged before any column create goes
/// out; the three column creates run concurrently (independent positions)
/// and all must complete before the board counts as ready. If a column
/// create fails, the columns that did get created remain and the result is
/// [`BoardError::PartialBootstrap`].
///
/// Two clients racing through the emptiness check can still both
/// bootstrap; that read-then-create race is a known limitation, not a
/// guaranteed invariant.
pub async fn ensure_board(api: &dyn BoardApi, project_id: &str) -> BoardResult<Bootstrap> {
    let mut boards = api.list_boards(project_id).await?;
    if !boards.is_empty() {
        boards.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.id.cmp(&b.id)));
        let board = boards.swap_remove(0);
        return Ok(Bootstrap::Existing(board));
    }

    info!("project {} has no board, creating default layout", project_id);
    let board = api
        .create_board(&BoardCreate {
            project_id: project_id.to_string(),
            name: DEFAULT_BOARD_NAME.to_string(),
            position: 0,
        })
        .await?;

    let column_input = |name: &str, position: i64| ColumnCreate {
        board_id: board.id.clone(),
        name: name.to_string(),
        position,
    };
    let inputs = [
        column_input(DEFAULT_COLUMNS[0], 0),
        column_input(DEFAULT_COLUMNS[1], 1),
        column_input(DEFAULT_COLUMNS[2], 2),
    ];

    let (todo, in_progress, done) = tokio::join!(
        api.create_column(&inputs[0]),
        api.create_column(&inputs[1]),
        api.create_column(&inputs[2]),
    );

    let mut columns = Vec::new();
    let mut failure: Option<String> = None;
    for result in [todo, in_progress, done] {
        match result {
            Ok(column) => columns.push(column),
            Err(e) => failure = Some(e.to_string()),
        }
    }

    if let Some(reason) = failure {
        warn!(
            "bootstrap of board {} left {} of 3 columns: {}",
            board.id,
            columns.len(),
            reason
        );
        return Err(BoardError::PartialBootstrap {
            board,
            columns,
            reason,
        });
    }

    ordering::sort_columns(&mut columns);
    info!("board {} ready with {} columns", board.id, columns.len());
    Ok(Bootstrap::Created { board, columns })
}
