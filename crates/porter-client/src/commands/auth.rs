//! `porter auth` command implementation

use crate::api::ApiClient;
use crate::error::Result;
use colored::Colorize;

/// Fail unless the server accepts the configured token or session
pub async fn check(client: &ApiClient) -> Result<()> {
    client.check_auth(None).await?;

    println!("{}", "Authenticated".green().bold());
    println!("  Server: {}", client.base_url());

    Ok(())
}
