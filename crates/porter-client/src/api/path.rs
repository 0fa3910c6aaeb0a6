//! Path specifications for endpoint bindings
//!
//! A binding's path is either a constant or a template such as
//! `/api/users/{id}/contexts`. Templates list their parameter names up front
//! and are resolved by plain interpolation, with every value percent-encoded
//! so arbitrary identifiers cannot change the shape of the path.

use crate::error::{ApiError, Result};

/// Source of values for `{name}` placeholders
pub trait PathParams {
    /// Value for `name`, already converted to its textual form
    fn param(&self, name: &str) -> Option<String>;
}

/// Path parameters for operations whose path is constant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoParams;

impl PathParams for NoParams {
    fn param(&self, _name: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSpec {
    /// Used verbatim
    Static(&'static str),
    /// `format` with one `{name}` placeholder per entry in `params`
    Template {
        params: &'static [&'static str],
        format: &'static str,
    },
}

impl PathSpec {
    /// The raw path or template text
    pub fn template(&self) -> &'static str {
        match self {
            PathSpec::Static(path) => path,
            PathSpec::Template { format, .. } => format,
        }
    }

    /// Declared parameter names, empty for static paths
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            PathSpec::Static(_) => &[],
            PathSpec::Template { params, .. } => params,
        }
    }

    pub fn is_templated(&self) -> bool {
        matches!(self, PathSpec::Template { .. })
    }

    /// Produce the concrete path for `params`.
    ///
    /// Static paths ignore `params`.
    pub fn resolve<P>(&self, params: &P) -> Result<String>
    where
        P: PathParams + ?Sized,
    {
        match *self {
            PathSpec::Static(path) => Ok(path.to_string()),
            PathSpec::Template { params: declared, format } => {
                interpolate(format, declared, params)
            }
        }
    }
}

fn interpolate<P>(format: &'static str, declared: &[&str], params: &P) -> Result<String>
where
    P: PathParams + ?Sized,
{
    let mut out = String::with_capacity(format.len() + 16);
    let mut rest = format;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);

        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or(ApiError::InvalidPathTemplate(format))?;
        let name = &after[..close];

        if !declared.contains(&name) {
            return Err(ApiError::InvalidPathTemplate(format));
        }

        let value = params.param(name).ok_or_else(|| ApiError::MissingPathParam {
            param: name.to_string(),
            template: format,
        })?;
        out.push_str(&urlencoding::encode(&value));

        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    struct Named(&'static str, &'static str);

    impl PathParams for Named {
        fn param(&self, name: &str) -> Option<String> {
            (name == self.0).then(|| self.1.to_string())
        }
    }

    const CLUSTER: PathSpec = PathSpec::Template {
        params: &["name"],
        format: "/api/clusters/{name}/nodes",
    };

    #[test]
    fn test_static_path_is_verbatim() {
        let spec = PathSpec::Static("/api/login");
        assert_eq!(spec.resolve(&NoParams).unwrap(), "/api/login");
        assert_eq!(spec.resolve(&Named("id", "7")).unwrap(), "/api/login");
        assert!(spec.placeholders().is_empty());
        assert!(!spec.is_templated());
    }

    #[test]
    fn test_template_interpolation() {
        let path = CLUSTER.resolve(&Named("name", "prod")).unwrap();
        assert_eq!(path, "/api/clusters/prod/nodes");
        assert_eq!(CLUSTER.placeholders(), &["name"]);
        assert_eq!(CLUSTER.template(), "/api/clusters/{name}/nodes");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let path = CLUSTER.resolve(&Named("name", "a b/../c")).unwrap();
        assert_eq!(path, "/api/clusters/a%20b%2F..%2Fc/nodes");
    }

    #[test]
    fn test_missing_param() {
        let err = CLUSTER.resolve(&NoParams).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingPathParam { ref param, .. } if param == "name"
        ));
    }

    #[test]
    fn test_unterminated_placeholder() {
        let spec = PathSpec::Template {
            params: &["id"],
            format: "/api/users/{id",
        };
        assert!(matches!(
            spec.resolve(&Named("id", "1")),
            Err(ApiError::InvalidPathTemplate("/api/users/{id"))
        ));
    }

    #[test]
    fn test_undeclared_placeholder() {
        let spec = PathSpec::Template {
            params: &["id"],
            format: "/api/users/{user}",
        };
        assert!(matches!(
            spec.resolve(&Named("user", "1")),
            Err(ApiError::InvalidPathTemplate(_))
        ));
    }
}
