//! System configuration provider port.

use crate::domain::ClientError;

/// Port for fetching the Artifactory system configuration document.
///
/// Implementations perform one remote fetch per call. Callers re-fetch on
/// every accessor invocation and parse the returned XML locally; the
/// document is never cached or shared between calls.
pub trait ConfigProvider {
    /// Fetch the full system configuration as raw XML.
    fn system_configuration(&self) -> Result<String, ClientError>;
}
