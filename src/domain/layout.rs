//! Repository layout descriptors.

use roxmltree::Document;
use serde::{Deserialize, Serialize};

use crate::domain::ClientError;
use crate::domain::query::{self, FieldMap, PathQuery};
use crate::ports::ConfigProvider;

const LAYOUTS_PATH: &str = "config/repoLayouts/repoLayout";
const LAYOUT_NAMES_PATH: &str = "config/repoLayouts/repoLayout/name";

/// A named set of path-pattern rules describing how artifacts are addressed
/// within a repository.
///
/// All fields except `name` are optional: absence means "not configured".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Layout name, unique within one configuration document. The lookup key.
    pub name: String,
    pub artifact_path_pattern: Option<String>,
    pub distinctive_descriptor_path_pattern: Option<String>,
    pub descriptor_path_pattern: Option<String>,
    pub folder_integration_revision_pattern: Option<String>,
    pub file_integration_revision_pattern: Option<String>,
}

impl Layout {
    /// List every repository layout in the system configuration, in document
    /// order.
    ///
    /// Performs one network fetch; nothing is cached across calls.
    pub fn all(client: &impl ConfigProvider) -> Result<Vec<Layout>, ClientError> {
        let xml = client.system_configuration()?;
        let doc = Document::parse(&xml)?;
        let layouts = PathQuery::parse(LAYOUTS_PATH)?;

        layouts
            .matches(&doc)
            .into_iter()
            .map(|node| Layout::from_fields(query::element_fields(&node)))
            .collect()
    }

    /// Find a layout by its exact name (case-sensitive).
    ///
    /// Returns `Ok(None)` when no layout carries the name, or when the remote
    /// reports the configuration resource missing (HTTP 404). Any other
    /// failure propagates unchanged.
    pub fn find(client: &impl ConfigProvider, name: &str) -> Result<Option<Layout>, ClientError> {
        let xml = match client.system_configuration() {
            Ok(xml) => xml,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };
        let doc = Document::parse(&xml)?;
        let by_name = PathQuery::parse(LAYOUT_NAMES_PATH)?.text_equals(name);

        let Some(name_node) = by_name.matches(&doc).into_iter().next() else {
            return Ok(None);
        };
        // The match is the `name` child; the full field set lives on its
        // parent `repoLayout` element.
        let parent = name_node
            .parent()
            .ok_or(ClientError::MissingField("name"))?;

        Layout::from_fields(query::element_fields(&parent)).map(Some)
    }

    /// Build a record from a field map keyed by configuration element name.
    fn from_fields(mut fields: FieldMap) -> Result<Layout, ClientError> {
        Ok(Layout {
            name: fields.remove("name").ok_or(ClientError::MissingField("name"))?,
            artifact_path_pattern: fields.remove("artifactPathPattern"),
            distinctive_descriptor_path_pattern: fields.remove("distinctiveDescriptorPathPattern"),
            descriptor_path_pattern: fields.remove("descriptorPathPattern"),
            folder_integration_revision_pattern: fields.remove("folderIntegrationRevisionRegExp"),
            file_integration_revision_pattern: fields.remove("fileIntegrationRevisionRegExp"),
        })
    }
}
