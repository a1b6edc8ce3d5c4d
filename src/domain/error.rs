use thiserror::Error;

/// Library-wide error type for Artifactory client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote returned a non-success HTTP status.
    #[error("Artifactory returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The fetched configuration document is not well-formed XML.
    #[error("Malformed configuration document: {0}")]
    MalformedConfig(#[from] roxmltree::Error),

    /// A path query expression is structurally invalid.
    #[error("Invalid path query '{expr}': {reason}")]
    InvalidQuery { expr: String, reason: &'static str },

    /// A required field was absent when constructing a record.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// Client construction or environment issue.
    #[error("{0}")]
    Configuration(String),
}

impl ClientError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        ClientError::Configuration(message.into())
    }

    /// Whether this error is the remote saying the resource does not exist.
    ///
    /// `find` accessors map this case to "absent" instead of surfacing it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Http { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_only_http_404() {
        let not_found = ClientError::Http { status: 404, body: String::new() };
        assert!(not_found.is_not_found());

        let server_error = ClientError::Http { status: 500, body: "boom".into() };
        assert!(!server_error.is_not_found());

        let missing = ClientError::MissingField("urlBase");
        assert!(!missing.is_not_found());
    }
}
