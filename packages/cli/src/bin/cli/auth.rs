//! Authentication CLI commands

use clap::Subcommand;
use colored::*;
use inquire::Password;

use corkboard_client::{ApiClient, RegisterInput};

#[derive(Debug, Subcommand)]
pub enum AuthCommands {
    /// Register a new account
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Login and store the access token
    Login {
        /// Email address
        email: String,
    },
    /// Clear the stored access token
    Logout,
    /// Show the currently logged-in user
    Whoami,
}

pub async fn handle_auth_command(
    command: AuthCommands,
    client: &mut ApiClient,
) -> anyhow::Result<()> {
    match command {
        AuthCommands::Register { email, name } => register(client, email, name).await,
        AuthCommands::Login { email } => login(client, email).await,
        AuthCommands::Logout => logout(client).await,
        AuthCommands::Whoami => whoami(client).await,
    }
}

async fn register(client: &ApiClient, email: String, name: String) -> anyhow::Result<()> {
    let password = Password::new("Password:").prompt()?;

    let user = client
        .register(&RegisterInput {
            email,
            name,
            password,
        })
        .await?;

    println!("✅ Registered {}", user.email.green());
    println!("Login with {}", "corkboard auth login".cyan());
    Ok(())
}

async fn login(client: &mut ApiClient, email: String) -> anyhow::Result<()> {
    let password = Password::new("Password:")
        .without_confirmation()
        .prompt()?;

    client.login(&email, &password).await?;
    println!("✅ Logged in as {}", email.green());
    Ok(())
}

async fn logout(client: &mut ApiClient) -> anyhow::Result<()> {
    client.logout().await?;
    println!("👋 Logged out");
    Ok(())
}

async fn whoami(client: &ApiClient) -> anyhow::Result<()> {
    let user = client.me().await?;
    let name = user.name.unwrap_or_else(|| "-".to_string());
    println!("{} <{}>", name.bold(), user.email);
    Ok(())
}
