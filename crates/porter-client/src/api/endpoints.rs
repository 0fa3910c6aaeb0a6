//! Endpoint registry
//!
//! One binding per backend operation: the logical name the dashboard uses,
//! the HTTP method and the path. The table is plain constant data and is
//! never modified at runtime.

use crate::api::path::{PathParams, PathSpec};
use crate::error::Result;
use std::fmt;

/// HTTP verbs used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed association between an operation name, a method and a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: PathSpec,
}

impl Endpoint {
    /// Look up a binding by its logical name, e.g. `"getUser"`
    pub fn find(name: &str) -> Option<&'static Endpoint> {
        ENDPOINTS.iter().find(|endpoint| endpoint.name == name)
    }

    pub fn resolve_path<P>(&self, params: &P) -> Result<String>
    where
        P: PathParams + ?Sized,
    {
        self.path.resolve(params)
    }

    /// Absolute URL under `base_url`
    pub fn url<P>(&self, base_url: &str, params: &P) -> Result<String>
    where
        P: PathParams + ?Sized,
    {
        let path = self.resolve_path(params)?;
        Ok(format!("{}{}", base_url.trim_end_matches('/'), path))
    }
}

const USER_ID: &[&str] = &["id"];

pub const CHECK_AUTH: Endpoint = Endpoint {
    name: "checkAuth",
    method: HttpMethod::Get,
    path: PathSpec::Static("/api/auth/check"),
};

pub const REGISTER_USER: Endpoint = Endpoint {
    name: "registerUser",
    method: HttpMethod::Post,
    path: PathSpec::Static("/api/users"),
};

pub const LOG_IN_USER: Endpoint = Endpoint {
    name: "logInUser",
    method: HttpMethod::Post,
    path: PathSpec::Static("/api/login"),
};

pub const LOG_OUT_USER: Endpoint = Endpoint {
    name: "logOutUser",
    method: HttpMethod::Post,
    path: PathSpec::Static("/api/logout"),
};

pub const GET_USER: Endpoint = Endpoint {
    name: "getUser",
    method: HttpMethod::Get,
    path: PathSpec::Template {
        params: USER_ID,
        format: "/api/users/{id}",
    },
};

pub const UPDATE_USER: Endpoint = Endpoint {
    name: "updateUser",
    method: HttpMethod::Put,
    path: PathSpec::Template {
        params: USER_ID,
        format: "/api/users/{id}",
    },
};

pub const GET_CONTEXTS: Endpoint = Endpoint {
    name: "getContexts",
    method: HttpMethod::Get,
    path: PathSpec::Template {
        params: USER_ID,
        format: "/api/users/{id}/contexts",
    },
};

/// Every binding, in the order the dashboard exports them
pub static ENDPOINTS: [Endpoint; 7] = [
    CHECK_AUTH,
    REGISTER_USER,
    LOG_IN_USER,
    LOG_OUT_USER,
    GET_USER,
    UPDATE_USER,
    GET_CONTEXTS,
];
