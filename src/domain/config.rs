//! Client configuration for the Artifactory HTTP client.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::ClientError;

/// Artifactory endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactoryConfig {
    /// Base URL of the Artifactory instance, e.g. `http://33.33.33.20/artifactory`.
    pub endpoint: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ArtifactoryConfig {
    /// Configuration for the given endpoint with the default timeout.
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint, timeout_secs: default_timeout() }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.timeout_secs == 0 {
            return Err(ClientError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}
