use crate::constants::{ENV_SERVER_DOMAIN, ENV_SESSION_COOKIE, ENV_USERNAME};
use crate::utils::errors::ConfigError;

/// Identity of the logged-in user and the API they talk to
///
/// Owned by whoever manages the login session; services only read it. Every
/// endpoint path is built from `server_domain` and `username` here, never from
/// identifiers callers pass to individual operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    server_domain: String,
    username: String,
    session_cookie: Option<String>,
}

impl SessionContext {
    pub fn new(
        server_domain: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let server_domain = server_domain.into().trim().trim_end_matches('/').to_string();
        let username = username.into().trim().to_string();

        validate_domain(&server_domain)?;
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }

        Ok(Self {
            server_domain,
            username,
            session_cookie: None,
        })
    }

    /// Attach a `name=value` cookie for callers that did not log in through a browser
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        let cookie = cookie.into();
        self.session_cookie = if cookie.trim().is_empty() {
            None
        } else {
            Some(cookie)
        };
        self
    }

    /// Load from the process environment, after merging a `.env` file if present
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("[Session] Failed to load .env file: {}", e);
            }
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let session = Self::new(required(ENV_SERVER_DOMAIN)?, required(ENV_USERNAME)?)?;
        Ok(match lookup(ENV_SESSION_COOKIE) {
            Some(cookie) => session.with_session_cookie(cookie),
            None => session,
        })
    }

    pub fn server_domain(&self) -> &str {
        &self.server_domain
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }

    /// `{server_domain}/users/{username}/{resource}`
    pub fn user_url(&self, resource: &str) -> String {
        format!(
            "{}/users/{}/{}",
            self.server_domain,
            urlencoding::encode(&self.username),
            resource
        )
    }
}

fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidDomain {
        domain: domain.to_string(),
        reason,
    };

    let parsed = url::Url::parse(domain).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{}`", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn user_url_trims_trailing_slash_and_encodes_username() {
        let session = SessionContext::new("https://api.example.com/", "ann lee").unwrap();
        assert_eq!(
            session.user_url("favorites"),
            "https://api.example.com/users/ann%20lee/favorites"
        );
    }

    #[test]
    fn rejects_blank_username_and_non_http_domain() {
        assert_eq!(
            SessionContext::new("http://localhost:3000", "  "),
            Err(ConfigError::EmptyUsername)
        );
        assert!(matches!(
            SessionContext::new("ftp://example.com", "ann"),
            Err(ConfigError::InvalidDomain { .. })
        ));
        assert!(matches!(
            SessionContext::new("not a url", "ann"),
            Err(ConfigError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn from_vars_reads_required_and_optional_values() {
        let env = vars(&[
            (ENV_SERVER_DOMAIN, "http://localhost:3000"),
            (ENV_USERNAME, "ann"),
            (ENV_SESSION_COOKIE, "session=abc"),
        ]);

        let session = SessionContext::from_vars(|key| env.get(key).cloned()).unwrap();
        assert_eq!(session.server_domain(), "http://localhost:3000");
        assert_eq!(session.username(), "ann");
        assert_eq!(session.session_cookie(), Some("session=abc"));
    }

    #[test]
    fn from_vars_reports_missing_username() {
        let env = vars(&[(ENV_SERVER_DOMAIN, "http://localhost:3000"), (ENV_USERNAME, "")]);

        let error = SessionContext::from_vars(|key| env.get(key).cloned()).unwrap_err();
        assert_eq!(error, ConfigError::Missing(ENV_USERNAME));
    }
}
