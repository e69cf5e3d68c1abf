//! Project CLI commands

use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use inquire::Confirm;

use corkboard_client::{ApiClient, ProjectInput};

use super::utils::{format_timestamp, or_dash, truncate};

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,
    /// Create a new project
    Add {
        /// Project name
        name: String,
        /// Project description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show project details
    Show {
        /// Project ID
        id: String,
    },
    /// Update a project's name or description
    Edit {
        /// Project ID
        id: String,
        /// New project name
        #[arg(short, long)]
        name: Option<String>,
        /// New project description
        #[arg(short, long)]
        description: Option<String>,
        /// Remove the description entirely
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
    },
    /// Delete a project (cascades to its boards)
    Delete {
        /// Project ID
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_project_command(
    command: ProjectCommands,
    client: &ApiClient,
) -> anyhow::Result<()> {
    match command {
        ProjectCommands::List => list_projects(client).await,
        ProjectCommands::Add { name, description } => add_project(client, name, description).await,
        ProjectCommands::Show { id } => show_project(client, &id).await,
        ProjectCommands::Edit {
            id,
            name,
            description,
            clear_description,
        } => edit_project(client, &id, name, description, clear_description).await,
        ProjectCommands::Delete { id, yes } => delete_project(client, &id, yes).await,
    }
}

async fn list_projects(client: &ApiClient) -> anyhow::Result<()> {
    let projects = client.list_projects().await?;

    if projects.is_empty() {
        println!("No projects yet. Create one with {}", "corkboard project add <name>".cyan());
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Description", "Created"]);

    for project in &projects {
        table.add_row(vec![
            project.id.clone(),
            project.name.clone(),
            truncate(&or_dash(&project.description), 40),
            format_timestamp(&project.created_at),
        ]);
    }

    println!("{table}");
    println!("{} project(s)", projects.len());
    Ok(())
}

async fn add_project(
    client: &ApiClient,
    name: String,
    description: Option<String>,
) -> anyhow::Result<()> {
    let project = client
        .create_project(&ProjectInput { name, description })
        .await?;

    println!("✅ Created project {} ({})", project.name.green(), project.id);
    println!(
        "Open its board with {}",
        format!("corkboard board show {}", project.id).cyan()
    );
    Ok(())
}

async fn show_project(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    let project = client.get_project(id).await?;

    println!("{}", project.name.bold());
    println!("  ID:          {}", project.id);
    println!("  Description: {}", or_dash(&project.description));
    println!("  Created:     {}", format_timestamp(&project.created_at));
    if let Some(updated_at) = &project.updated_at {
        println!("  Updated:     {}", format_timestamp(updated_at));
    }
    Ok(())
}

async fn edit_project(
    client: &ApiClient,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    clear_description: bool,
) -> anyhow::Result<()> {
    let current = client.get_project(id).await?;

    let description = if clear_description {
        None
    } else {
        description.or(current.description)
    };
    let input = ProjectInput {
        name: name.unwrap_or(current.name),
        description,
    };
    let project = client.update_project(id, &input).await?;

    println!("✅ Updated project {}", project.name.green());
    Ok(())
}

async fn delete_project(client: &ApiClient, id: &str, yes: bool) -> anyhow::Result<()> {
    let project = client.get_project(id).await?;

    if !yes {
        let confirmed = Confirm::new(&format!(
            "Delete project '{}' and all of its boards?",
            project.name
        ))
        .with_default(false)
        .prompt()?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    client.delete_project(id).await?;
    println!("🗑️  Deleted project {}", project.name);
    Ok(())
}
