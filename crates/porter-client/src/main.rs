//! Porter CLI - Main entry point

use clap::Parser;
use porter_client::{commands, ApiClient, AuthCommand, Cli, Commands, UserCommand};
use porter_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let defaults = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .log_file_prefix("porter-cli")
        .build();

    let log_config = match defaults.merge_from(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        },
    };

    // The CLI keeps working without logging
    let _guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn execute_command(cli: &Cli) -> porter_client::Result<()> {
    let client = ApiClient::from_config(&cli.config()?)?;

    match &cli.command {
        Commands::Auth { command } => match command {
            AuthCommand::Check => commands::auth::check(&client).await,
        },

        Commands::Register { email, password } => {
            commands::session::register(&client, email.clone(), password.clone()).await
        },

        Commands::Login { email, password } => {
            commands::session::login(&client, email.clone(), password.clone()).await
        },

        Commands::Logout => commands::session::logout(&client).await,

        Commands::User { command } => match command {
            UserCommand::Get { id } => commands::user::get(&client, *id).await,
            UserCommand::Update {
                id,
                kubeconfig,
                contexts,
            } => {
                commands::user::update(&client, *id, kubeconfig.as_deref(), contexts.clone())
                    .await
            },
        },

        Commands::Contexts { id } => commands::user::contexts(&client, *id).await,
    }
}
