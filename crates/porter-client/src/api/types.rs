//! API request and response types
//!
//! Field names follow the backend's JSON (camelCase where the server uses it).

use crate::api::path::PathParams;
use serde::{Deserialize, Serialize};

/// Body for registration and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body for `PUT /api/users/{id}`. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_kube_config: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_contexts: Option<Vec<String>>,
}

impl UpdateUserRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw_kube_config(mut self, raw: impl Into<String>) -> Self {
        self.raw_kube_config = Some(raw.into());
        self
    }

    pub fn with_allowed_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_contexts = Some(contexts.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.raw_kube_config.is_none() && self.allowed_contexts.is_none()
    }
}

/// Marker for operations that send no body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoBody;

/// Path parameters for user-scoped endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPath {
    pub id: u64,
}

impl UserPath {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl PathParams for UserPath {
    fn param(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            _ => None,
        }
    }
}

/// A dashboard user as returned by `GET /api/users/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,

    /// Contexts the user has allowed the dashboard to use
    #[serde(default)]
    pub contexts: Vec<String>,

    #[serde(default)]
    pub raw_kube_config: String,
}

/// One context from the user's kubeconfig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub user: String,

    /// Whether the context is in the user's allowed list
    #[serde(default)]
    pub selected: bool,
}

/// Error envelope the backend sends with non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    /// All error strings joined, or `None` when the list is empty
    pub fn message(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .errors
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join("; "))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_serialize_exactly_two_fields() {
        let value = serde_json::to_value(Credentials::new("a@b.co", "hunter2")).unwrap();
        assert_eq!(value, json!({"email": "a@b.co", "password": "hunter2"}));
    }

    #[test]
    fn test_update_request_partial_bodies() {
        assert_eq!(serde_json::to_value(UpdateUserRequest::new()).unwrap(), json!({}));

        let raw_only = UpdateUserRequest::new().with_raw_kube_config("apiVersion: v1");
        assert_eq!(
            serde_json::to_value(&raw_only).unwrap(),
            json!({"rawKubeConfig": "apiVersion: v1"})
        );

        let contexts_only = UpdateUserRequest::new().with_allowed_contexts(["dev", "prod"]);
        assert_eq!(
            serde_json::to_value(&contexts_only).unwrap(),
            json!({"allowedContexts": ["dev", "prod"]})
        );

        let both = raw_only.with_allowed_contexts(Vec::<String>::new());
        assert_eq!(
            serde_json::to_value(&both).unwrap(),
            json!({"rawKubeConfig": "apiVersion: v1", "allowedContexts": []})
        );
        assert!(!both.is_empty());
    }

    #[test]
    fn test_update_request_accepts_missing_fields() {
        let parsed: UpdateUserRequest =
            serde_json::from_value(json!({"allowedContexts": ["dev"]})).unwrap();
        assert_eq!(parsed.raw_kube_config, None);
        assert_eq!(parsed.allowed_contexts, Some(vec!["dev".to_string()]));
    }

    #[test]
    fn test_user_path_params() {
        let params = UserPath::new(42);
        assert_eq!(params.param("id").as_deref(), Some("42"));
        assert_eq!(params.param("name"), None);
    }

    #[test]
    fn test_user_deserialize_tolerates_missing_optional_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "email": "ops@example.com",
            "extra": true
        }))
        .unwrap();
        assert_eq!(user.id, 3);
        assert!(user.contexts.is_empty());
        assert!(user.raw_kube_config.is_empty());
    }

    #[test]
    fn test_error_response_message() {
        let err: ErrorResponse =
            serde_json::from_value(json!({"code": 601, "errors": ["invalid email", " "]})).unwrap();
        assert_eq!(err.message().as_deref(), Some("invalid email"));
        assert_eq!(ErrorResponse::default().message(), None);
    }
}
