//! artifactory-client: read-only accessors for the Artifactory system configuration.
//!
//! The crate fetches the system configuration document over HTTP, locates
//! sub-trees by path query, and materializes them into plain records:
//! repository [`Layout`] descriptors and the configured [`UrlBase`].
//!
//! Accessors take the configuration provider explicitly; there is no
//! process-wide default client.
//!
//! ```no_run
//! use artifactory_client::{ArtifactoryConfig, HttpArtifactoryClient, Layout};
//! use url::Url;
//!
//! # fn main() -> Result<(), artifactory_client::ClientError> {
//! let endpoint = Url::parse("http://33.33.33.20/artifactory").unwrap();
//! let client = HttpArtifactoryClient::new(&ArtifactoryConfig::new(endpoint))?;
//!
//! for layout in Layout::all(&client)? {
//!     println!("{}", layout.name);
//! }
//!
//! match Layout::find(&client, "maven-2-default")? {
//!     Some(layout) => println!("artifact pattern: {:?}", layout.artifact_path_pattern),
//!     None => println!("no such layout"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{ArtifactoryConfig, ClientError, FieldMap, Layout, PathQuery, UrlBase};
pub use ports::ConfigProvider;
pub use services::HttpArtifactoryClient;
