//! Comment CLI commands

use clap::Subcommand;
use colored::*;

use corkboard_client::{ApiClient, CommentCreate};

use super::utils::format_timestamp;

#[derive(Debug, Subcommand)]
pub enum CommentCommands {
    /// List the comments on a task
    List {
        /// Task ID
        task_id: String,
    },
    /// Add a comment to a task
    Add {
        /// Task ID
        task_id: String,
        /// Comment text
        content: String,
    },
}

pub async fn handle_comment_command(
    command: CommentCommands,
    client: &ApiClient,
) -> anyhow::Result<()> {
    match command {
        CommentCommands::List { task_id } => list_comments(client, &task_id).await,
        CommentCommands::Add { task_id, content } => add_comment(client, task_id, content).await,
    }
}

async fn list_comments(client: &ApiClient, task_id: &str) -> anyhow::Result<()> {
    let comments = client.list_comments(task_id).await?;

    if comments.is_empty() {
        println!("No comments on task {}", task_id);
        return Ok(());
    }

    for comment in &comments {
        let author = comment.user_id.as_deref().unwrap_or("unknown");
        println!(
            "{} {} {}",
            format_timestamp(&comment.created_at).dimmed(),
            author.bold(),
            comment.id.dimmed()
        );
        println!("  {}", comment.content);
        println!();
    }
    println!("{} comment(s)", comments.len());
    Ok(())
}

async fn add_comment(client: &ApiClient, task_id: String, content: String) -> anyhow::Result<()> {
    let comment = client
        .create_comment(&CommentCreate { task_id, content })
        .await?;

    println!("💬 Comment added ({})", comment.id.green());
    Ok(())
}
