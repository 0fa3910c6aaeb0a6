//! `porter register`, `porter login` and `porter logout`

use crate::api::{ApiClient, Credentials};
use crate::error::Result;
use colored::Colorize;
use tracing::info;

pub async fn register(client: &ApiClient, email: String, password: String) -> Result<()> {
    let credentials = Credentials::new(email, password);
    client.register_user(None, &credentials).await?;

    info!(email = %credentials.email, "Registered user");
    println!("{} {}", "Registered".green().bold(), credentials.email);

    Ok(())
}

/// Log in and confirm the new session is accepted.
///
/// The session cookie lives in the client, so it only lasts for this process.
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<()> {
    let credentials = Credentials::new(email, password);
    client.log_in_user(None, &credentials).await?;
    client.check_auth(None).await?;

    info!(email = %credentials.email, "Logged in");
    println!("{} as {}", "Logged in".green().bold(), credentials.email);

    Ok(())
}

pub async fn logout(client: &ApiClient) -> Result<()> {
    client.log_out_user(None).await?;

    println!("{}", "Logged out".green().bold());

    Ok(())
}
