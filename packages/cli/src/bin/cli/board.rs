//! Board CLI commands

use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use corkboard_board::{ensure_board, BoardError, BoardView, BoardViewModel};
use corkboard_client::ApiClient;

use super::utils::{format_timestamp, truncate};

#[derive(Debug, Subcommand)]
pub enum BoardCommands {
    /// Show a project's board, creating the default layout if the project
    /// has none
    Show {
        /// Project ID
        project_id: String,
    },
}

pub async fn handle_board_command(
    command: BoardCommands,
    client: &ApiClient,
) -> anyhow::Result<()> {
    match command {
        BoardCommands::Show { project_id } => show_board(client, &project_id).await,
    }
}

async fn show_board(client: &ApiClient, project_id: &str) -> anyhow::Result<()> {
    let outcome = match ensure_board(client, project_id).await {
        Ok(outcome) => outcome,
        Err(BoardError::PartialBootstrap {
            board,
            columns,
            reason,
        }) => {
            // The board exists but is missing default columns; show what is
            // there and tell the user, rather than pretending it is ready.
            eprintln!(
                "{} board '{}' was only partially initialized ({}/3 columns): {}",
                "Warning:".yellow().bold(),
                board.name,
                columns.len(),
                reason
            );
            eprintln!("Re-run {} to retry.", format!("corkboard board show {}", project_id).cyan());
            let vm = BoardViewModel::open(client, &board.id).await?;
            render_board(&board.name, vm.view());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if outcome.was_created() {
        println!("✨ Created default board for project {}", project_id);
    }

    let board = outcome.board();
    let vm = BoardViewModel::open(client, &board.id).await?;
    render_board(&board.name, vm.view());
    Ok(())
}

fn render_board(board_name: &str, view: &BoardView) {
    println!("{}  ({})", board_name.bold(), view.board_id);
    println!();

    for column in &view.columns {
        let tasks = view.column_tasks(&column.id);
        println!(
            "{} {} - {} task(s)  [{}]",
            "▌".blue(),
            column.name.bold(),
            tasks.len(),
            column.id
        );

        if tasks.is_empty() {
            println!("  (empty)");
            println!();
            continue;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Pos", "ID", "Title", "Priority", "Due"]);

        for task in tasks {
            table.add_row(vec![
                task.position.to_string(),
                task.id.clone(),
                truncate(&task.title, 40),
                task.priority
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                task.due_date
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }

        println!("{table}");
        println!();
    }
}
