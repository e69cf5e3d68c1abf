use clap::{Parser, Subcommand};
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::auth::AuthCommands;
use cli::board::BoardCommands;
use cli::comments::CommentCommands;
use cli::projects::ProjectCommands;
use cli::tasks::TaskCommands;

use corkboard_client::{ApiClient, ClientConfig, CredentialStore};

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "Corkboard - kanban project boards from your terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authentication
    #[command(subcommand)]
    Auth(AuthCommands),
    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommands),
    /// Show and bootstrap project boards
    #[command(subcommand)]
    Board(BoardCommands),
    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommands),
    /// Manage task comments
    #[command(subcommand)]
    Comment(CommentCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client = match build_client().await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Auth(command) => cli::auth::handle_auth_command(command, &mut client).await,
        Commands::Project(command) => {
            cli::projects::handle_project_command(command, &client).await
        }
        Commands::Board(command) => cli::board::handle_board_command(command, &client).await,
        Commands::Task(command) => cli::tasks::handle_task_command(command, &client).await,
        Commands::Comment(command) => {
            cli::comments::handle_comment_command(command, &client).await
        }
    };

    if let Err(e) = result {
        report_error(&e);
        process::exit(1);
    }
}

async fn build_client() -> anyhow::Result<ApiClient> {
    let config = ClientConfig::resolve().await?;
    let mut credentials = CredentialStore::new()?;
    credentials.init().await?;
    Ok(ApiClient::new(config, credentials)?)
}

/// Failures are terminal for the attempt: print them and exit, never retry.
/// Authentication failures get a login hint instead of the raw message.
fn report_error(error: &anyhow::Error) {
    let needs_login = error
        .downcast_ref::<corkboard_client::ClientError>()
        .map(|e| e.is_auth_error())
        .or_else(|| {
            error
                .downcast_ref::<corkboard_board::BoardError>()
                .map(|e| e.is_auth_error())
        })
        .unwrap_or(false);

    if needs_login {
        eprintln!("{} {}", "Error:".red().bold(), error);
        eprintln!("Please run {} first.", "corkboard auth login".cyan());
    } else {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }
}
