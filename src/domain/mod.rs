pub mod config;
pub mod error;
pub mod layout;
pub mod query;
pub mod url_base;

pub use config::ArtifactoryConfig;
pub use error::ClientError;
pub use layout::Layout;
pub use query::{FieldMap, PathQuery};
pub use url_base::UrlBase;
