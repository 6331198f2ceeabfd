//! Error types shared by the transport, session and service layers.

/// Failure reported by a [`Transport`](crate::utils::http::Transport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connection reset, TLS...)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON, or not the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("invalid request body: {0}")]
    Encode(String),

    /// The request URL could not be parsed
    #[error("invalid request url '{0}'")]
    InvalidUrl(String),
}

impl TransportError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the session cookie was rejected (401/403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Errors returned by the favorites and user-recipes services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A read operation (list favorites, list recipes) failed
    #[error("{operation} failed: {source}")]
    Fetch {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// A write operation (add/remove favorite, create recipe) failed
    #[error("{operation} failed: {source}")]
    Write {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// Caller-supplied recipe data does not satisfy the input contract
    #[error("invalid recipe data: {reason}")]
    InvalidInput { reason: String },

    /// The caller's cancel token fired before the server answered
    #[error("{operation} was cancelled")]
    Cancelled { operation: &'static str },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Short title/body pair for a toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub title: &'static str,
    pub body: String,
}

impl ServiceError {
    /// Name of the operation that failed, if the error is tied to one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ServiceError::Fetch { operation, .. }
            | ServiceError::Write { operation, .. }
            | ServiceError::Cancelled { operation } => Some(*operation),
            ServiceError::InvalidInput { .. } => None,
        }
    }

    /// Underlying transport failure, untouched.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            ServiceError::Fetch { source, .. } | ServiceError::Write { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Plain-language text for the UI toast.
    pub fn user_message(&self) -> UserMessage {
        if self.transport_error().is_some_and(TransportError::is_unauthorized) {
            return UserMessage {
                title: "Not logged in",
                body: "Please log in again and retry.".to_string(),
            };
        }

        match self {
            ServiceError::Fetch { .. } => UserMessage {
                title: "Couldn't load data",
                body: "Check your connection and try again.".to_string(),
            },
            ServiceError::Write { .. } => UserMessage {
                title: "Couldn't save changes",
                body: "The server did not accept the change. Please try again.".to_string(),
            },
            ServiceError::InvalidInput { reason } => UserMessage {
                title: "Recipe is incomplete",
                body: reason.clone(),
            },
            ServiceError::Cancelled { .. } => UserMessage {
                title: "Cancelled",
                body: "The request was cancelled.".to_string(),
            },
        }
    }
}

/// Problems building a [`SessionContext`](crate::state::SessionContext).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration value {0}")]
    Missing(&'static str),

    #[error("invalid server domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },

    #[error("username cannot be empty")]
    EmptyUsername,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_gets_login_message() {
        let error = ServiceError::Write {
            operation: "add_to_favorites",
            source: TransportError::Status {
                status: 401,
                body: "{\"message\":\"unauthorized\"}".to_string(),
            },
        };

        assert_eq!(error.user_message().title, "Not logged in");
        assert_eq!(error.operation(), Some("add_to_favorites"));
    }

    #[test]
    fn display_keeps_transport_detail() {
        let error = ServiceError::Fetch {
            operation: "get_favorites",
            source: TransportError::Network("connection refused".to_string()),
        };

        assert_eq!(
            error.to_string(),
            "get_favorites failed: network error: connection refused"
        );
    }

    #[test]
    fn invalid_input_surfaces_reason() {
        let error = ServiceError::InvalidInput {
            reason: "missing instructions".to_string(),
        };

        assert_eq!(error.user_message().body, "missing instructions");
        assert!(error.transport_error().is_none());
    }
}
