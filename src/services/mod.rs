mod artifactory_client_http;

pub use artifactory_client_http::HttpArtifactoryClient;
