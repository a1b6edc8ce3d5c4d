//! The configured base URL setting.

use roxmltree::Document;
use serde::{Deserialize, Serialize};

use crate::domain::ClientError;
use crate::domain::query::{self, FieldMap, PathQuery};
use crate::ports::ConfigProvider;

const URL_BASE_PATH: &str = "config/urlBase";

/// The base URL the managed Artifactory instance is configured to serve
/// under.
///
/// `url_base` has no default: a record without it cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlBase {
    pub url_base: String,
}

impl UrlBase {
    /// List the configured url-base entries.
    ///
    /// The configuration holds at most one `urlBase` element, but the result
    /// is a sequence regardless, in document order.
    pub fn all(client: &impl ConfigProvider) -> Result<Vec<UrlBase>, ClientError> {
        let xml = client.system_configuration()?;
        let doc = Document::parse(&xml)?;
        let url_bases = PathQuery::parse(URL_BASE_PATH)?;

        query::match_all(&doc, &url_bases).into_iter().map(UrlBase::from_fields).collect()
    }

    /// Find the url-base entry whose value equals `url` exactly.
    ///
    /// Returns `Ok(None)` when no entry matches, or when the remote reports
    /// the configuration resource missing (HTTP 404). Any other failure
    /// propagates unchanged.
    pub fn find(client: &impl ConfigProvider, url: &str) -> Result<Option<UrlBase>, ClientError> {
        let xml = match client.system_configuration() {
            Ok(xml) => xml,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };
        let doc = Document::parse(&xml)?;
        let by_url = PathQuery::parse(URL_BASE_PATH)?.text_equals(url);

        match query::match_one(&doc, &by_url) {
            Some(fields) => UrlBase::from_fields(fields).map(Some),
            None => Ok(None),
        }
    }

    /// Build a record from a field map keyed by configuration element name.
    ///
    /// A map without `urlBase` is a construction error, distinct from
    /// "absent": absent means no matching configuration entry, this means a
    /// found entry is missing its value.
    fn from_fields(mut fields: FieldMap) -> Result<UrlBase, ClientError> {
        Ok(UrlBase {
            url_base: fields.remove("urlBase").ok_or(ClientError::MissingField("urlBase"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingConfig, StaticConfig};

    const CONFIG: &str =
        "<config><urlBase>http://33.33.33.20/artifactory</urlBase></config>";

    #[test]
    fn all_returns_the_configured_url_base() {
        let client = StaticConfig(CONFIG);
        let url_bases = UrlBase::all(&client).unwrap();

        assert_eq!(url_bases.len(), 1);
        assert_eq!(url_bases[0].url_base, "http://33.33.33.20/artifactory");
    }

    #[test]
    fn all_is_empty_when_nothing_is_configured() {
        let client = StaticConfig("<config></config>");
        assert!(UrlBase::all(&client).unwrap().is_empty());
    }

    #[test]
    fn find_matches_the_exact_url() {
        let client = StaticConfig(CONFIG);
        let found = UrlBase::find(&client, "http://33.33.33.20/artifactory").unwrap().unwrap();
        assert_eq!(found.url_base, "http://33.33.33.20/artifactory");
    }

    #[test]
    fn find_with_a_different_url_is_absent() {
        let client = StaticConfig(CONFIG);
        assert_eq!(UrlBase::find(&client, "http://other").unwrap(), None);
    }

    #[test]
    fn find_maps_remote_not_found_to_absent() {
        let client = FailingConfig(404);
        assert_eq!(UrlBase::find(&client, "http://33.33.33.20/artifactory").unwrap(), None);
    }

    #[test]
    fn find_propagates_other_http_failures() {
        let client = FailingConfig(503);
        let err = UrlBase::find(&client, "http://33.33.33.20/artifactory").unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 503, .. }));
    }

    #[test]
    fn empty_url_base_element_cannot_become_a_record() {
        let client = StaticConfig("<config><urlBase></urlBase></config>");
        let err = UrlBase::all(&client).unwrap_err();
        assert!(matches!(err, ClientError::MissingField("urlBase")));
    }

    #[test]
    fn constructing_from_fields_requires_the_value() {
        let err = UrlBase::from_fields(FieldMap::new()).unwrap_err();
        assert!(matches!(err, ClientError::MissingField("urlBase")));

        let mut fields = FieldMap::new();
        fields.insert("urlBase".to_string(), "http://33.33.33.20/artifactory".to_string());
        let record = UrlBase::from_fields(fields).unwrap();
        assert_eq!(record.url_base, "http://33.33.33.20/artifactory");
    }

    #[test]
    fn repeated_calls_yield_identical_records() {
        let client = StaticConfig(CONFIG);
        assert_eq!(UrlBase::all(&client).unwrap(), UrlBase::all(&client).unwrap());
    }
}
