//! Porter API client
//!
//! Typed bindings for the Porter dashboard's backend REST API, plus the
//! `porter` command-line tool built on them.
//!
//! # Overview
//!
//! - **Endpoint registry** ([`api::endpoints`]): one constant binding per
//!   operation (method + static or templated path)
//! - **Request helper** ([`api::ApiClient`]): sends exactly one request per
//!   call, attaches the bearer token and maps failures to [`ApiError`]
//! - **Commands** ([`commands`]): what the `porter` binary runs
//!
//! # Example
//!
//! ```no_run
//! use porter_client::api::{ApiClient, Credentials, UserPath};
//!
//! # async fn run() -> porter_client::Result<()> {
//! let client = ApiClient::new("http://localhost:8080")?;
//! client
//!     .log_in_user(None, &Credentials::new("ops@example.com", "hunter2"))
//!     .await?;
//! let user = client.get_user(None, &UserPath::new(1)).await?;
//! println!("{} has {} contexts", user.email, user.contexts.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;

pub use api::ApiClient;
pub use config::Config;
pub use error::{ApiError, Result};

use clap::{Parser, Subcommand};

/// Porter - command-line access to the Porter dashboard API
#[derive(Parser, Debug)]
#[command(name = "porter")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server URL
    #[arg(long, env = "PORTER_SERVER_URL", default_value = config::DEFAULT_SERVER_URL, global = true)]
    pub server_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "PORTER_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PORTER_API_TIMEOUT_SECS", default_value_t = config::DEFAULT_API_TIMEOUT_SECS, global = true)]
    pub timeout: u64,
}

impl Cli {
    /// Client configuration from the global flags
    pub fn config(&self) -> Result<Config> {
        let config = Config {
            server_url: self.server_url.clone(),
            timeout_secs: self.timeout,
            token: self.token.clone().filter(|t| !t.trim().is_empty()),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session checks
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Create a new dashboard user
    Register {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "PORTER_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Verify credentials by logging in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "PORTER_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Inspect or update a user
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// List the kube contexts available to a user
    Contexts {
        /// User ID
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Check whether the current token or session is accepted
    Check,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Show a user
    Get {
        /// User ID
        id: u64,
    },

    /// Update a user's kubeconfig and allowed contexts
    Update {
        /// User ID
        id: u64,

        /// Path to a kubeconfig file to upload
        #[arg(short, long)]
        kubeconfig: Option<std::path::PathBuf>,

        /// Context the dashboard may use (repeatable)
        #[arg(short, long = "context", value_name = "NAME")]
        contexts: Vec<String>,
    },
}
