//! `porter user` and `porter contexts` command implementations

use crate::api::{ApiClient, UpdateUserRequest, UserPath};
use crate::error::{ApiError, Result};
use colored::Colorize;
use std::path::Path;

/// Print a user as JSON
pub async fn get(client: &ApiClient, id: u64) -> Result<()> {
    let user = client.get_user(None, &UserPath::new(id)).await?;
    print_json(&user)
}

/// Upload a kubeconfig and/or replace the allowed contexts.
///
/// With neither option an empty update is sent, which the server accepts.
pub async fn update(
    client: &ApiClient,
    id: u64,
    kubeconfig: Option<&Path>,
    contexts: Vec<String>,
) -> Result<()> {
    let mut request = UpdateUserRequest::new();

    if let Some(path) = kubeconfig {
        request = request.with_raw_kube_config(std::fs::read_to_string(path)?);
    }

    if !contexts.is_empty() {
        request = request.with_allowed_contexts(contexts);
    }

    client.update_user(None, &UserPath::new(id), &request).await?;

    println!("{} user {}", "Updated".green().bold(), id);
    Ok(())
}

/// Print the contexts of a user as JSON
pub async fn contexts(client: &ApiClient, id: u64) -> Result<()> {
    let contexts = client.get_contexts(None, &UserPath::new(id)).await?;
    print_json(&contexts)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(ApiError::Encode)?;
    println!("{}", json);
    Ok(())
}
