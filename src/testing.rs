//! In-memory configuration providers for unit tests.

use crate::domain::ClientError;
use crate::ports::ConfigProvider;

/// Provider serving a fixed configuration document.
pub struct StaticConfig(pub &'static str);

impl ConfigProvider for StaticConfig {
    fn system_configuration(&self) -> Result<String, ClientError> {
        Ok(self.0.to_string())
    }
}

/// Provider failing every fetch with the given HTTP status.
pub struct FailingConfig(pub u16);

impl ConfigProvider for FailingConfig {
    fn system_configuration(&self) -> Result<String, ClientError> {
        Err(ClientError::Http { status: self.0, body: String::new() })
    }
}
