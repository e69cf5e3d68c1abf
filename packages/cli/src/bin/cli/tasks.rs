//! Task CLI commands

use anyhow::{anyhow, Context};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;
use colored::*;
use inquire::Confirm;

use corkboard_board::{BoardView, BoardViewModel, TaskDraft};
use corkboard_client::{ApiClient, Priority, TaskUpdate};

#[derive(Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a task to the end of a column
    Add {
        /// Board ID
        #[arg(short, long)]
        board: String,
        /// Destination column (name or ID)
        #[arg(short, long)]
        column: String,
        /// Task title
        title: String,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Priority: low, medium or high
        #[arg(short, long)]
        priority: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// Move a task to a column and position
    Move {
        /// Board ID
        #[arg(short, long)]
        board: String,
        /// Task ID
        task_id: String,
        /// Destination column (name or ID)
        #[arg(short, long)]
        to: String,
        /// Destination position (defaults to end of column)
        #[arg(short, long)]
        position: Option<i64>,
        /// Renumber siblings so both columns stay dense
        #[arg(long)]
        dense: bool,
    },
    /// Update a task's fields
    Edit {
        /// Task ID
        task_id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New priority: low, medium or high
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        task_id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_task_command(command: TaskCommands, client: &ApiClient) -> anyhow::Result<()> {
    match command {
        TaskCommands::Add {
            board,
            column,
            title,
            description,
            priority,
            due,
        } => add_task(client, &board, &column, title, description, priority, due).await,
        TaskCommands::Move {
            board,
            task_id,
            to,
            position,
            dense,
        } => move_task(client, &board, &task_id, &to, position, dense).await,
        TaskCommands::Edit {
            task_id,
            title,
            description,
            priority,
        } => edit_task(client, &task_id, title, description, priority).await,
        TaskCommands::Delete { task_id, yes } => delete_task(client, &task_id, yes).await,
    }
}

/// Resolve a column given either its id or its name
fn resolve_column(view: &BoardView, column: &str) -> anyhow::Result<String> {
    if let Some(found) = view.columns.iter().find(|c| c.id == column) {
        return Ok(found.id.clone());
    }
    view.column_by_name(column)
        .map(|c| c.id.clone())
        .ok_or_else(|| anyhow!("no column '{}' on this board", column))
}

fn parse_priority(priority: Option<String>) -> anyhow::Result<Option<Priority>> {
    priority
        .map(|p| p.parse::<Priority>().map_err(|e| anyhow!(e)))
        .transpose()
}

fn parse_due(due: Option<String>) -> anyhow::Result<Option<DateTime<Utc>>> {
    due.map(|d| {
        let date = NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .with_context(|| format!("invalid due date '{}', expected YYYY-MM-DD", d))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("invalid due date '{}'", d))?;
        Ok(midnight.and_utc())
    })
    .transpose()
}

async fn add_task(
    client: &ApiClient,
    board_id: &str,
    column: &str,
    title: String,
    description: Option<String>,
    priority: Option<String>,
    due: Option<String>,
) -> anyhow::Result<()> {
    let mut vm = BoardViewModel::open(client, board_id).await?;
    let column_id = resolve_column(vm.view(), column)?;

    let task = vm
        .create_task(
            &column_id,
            TaskDraft {
                title,
                description,
                priority: parse_priority(priority)?,
                due_date: parse_due(due)?,
            },
        )
        .await?;

    println!(
        "✅ Added {} at position {} ({})",
        task.title.green(),
        task.position,
        task.id
    );
    Ok(())
}

async fn move_task(
    client: &ApiClient,
    board_id: &str,
    task_id: &str,
    to: &str,
    position: Option<i64>,
    dense: bool,
) -> anyhow::Result<()> {
    let mut vm = BoardViewModel::open(client, board_id).await?;
    let dest_column_id = resolve_column(vm.view(), to)?;

    // Default destination is the end of the target column, not counting
    // the task itself when it is already there
    let dest_position = position.unwrap_or_else(|| {
        corkboard_board::move_append_position(vm.view().column_tasks(&dest_column_id), task_id)
    });

    let task = if dense {
        vm.move_task_dense(task_id, &dest_column_id, dest_position)
            .await?
    } else {
        vm.move_task(task_id, &dest_column_id, dest_position).await?
    };

    println!(
        "✅ Moved {} to position {} ({})",
        task.title.green(),
        task.position,
        dest_column_id
    );
    Ok(())
}

async fn edit_task(
    client: &ApiClient,
    task_id: &str,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
) -> anyhow::Result<()> {
    let update = TaskUpdate {
        title,
        description,
        priority: parse_priority(priority)?,
        ..Default::default()
    };

    let task = client.update_task(task_id, &update).await?;
    println!("✅ Updated {}", task.title.green());
    Ok(())
}

async fn delete_task(client: &ApiClient, task_id: &str, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let confirmed = Confirm::new(&format!("Delete task {}?", task_id))
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    client.delete_task(task_id).await?;
    println!("🗑️  Deleted task {}", task_id);
    Ok(())
}
