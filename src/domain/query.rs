//! Path-query evaluation over the configuration document.
//!
//! The system configuration is an immutable XML tree fetched fresh on every
//! accessor call. Queries here cover the subset the accessors need:
//! select-by-element-name from the root, optionally narrowed by exact text
//! equality on the final segment.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};

use crate::domain::ClientError;

/// A flat, string-keyed view of matched elements.
pub type FieldMap = BTreeMap<String, String>;

/// Characters that belong to predicate syntax, not element names.
const PREDICATE_METACHARS: [char; 7] = ['[', ']', '\'', '"', '=', '(', ')'];

/// A hierarchical path query: element names walked root-down, optionally
/// narrowed by an exact text-equality predicate on the final segment.
///
/// The predicate value is held as data and compared structurally, never
/// spliced into an expression string, so query metacharacters in caller
/// input are inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    segments: Vec<String>,
    text_equals: Option<String>,
}

impl PathQuery {
    /// Parse a slash-separated element path such as
    /// `config/repoLayouts/repoLayout`.
    ///
    /// A structurally invalid expression is a programming error and fails
    /// immediately; a well-formed expression matching nothing is not.
    pub fn parse(expr: &str) -> Result<Self, ClientError> {
        if expr.is_empty() {
            return Err(ClientError::InvalidQuery {
                expr: expr.to_string(),
                reason: "expression is empty",
            });
        }

        let mut segments = Vec::new();
        for segment in expr.split('/') {
            if segment.is_empty() {
                return Err(ClientError::InvalidQuery {
                    expr: expr.to_string(),
                    reason: "empty path segment",
                });
            }
            if segment.contains(|c| PREDICATE_METACHARS.contains(&c)) {
                return Err(ClientError::InvalidQuery {
                    expr: expr.to_string(),
                    reason: "predicates must be supplied via text_equals, not inline",
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments, text_equals: None })
    }

    /// Narrow the final segment to elements whose direct text content equals
    /// `value` exactly (case-sensitive, no normalization).
    pub fn text_equals(mut self, value: &str) -> Self {
        self.text_equals = Some(value.to_string());
        self
    }

    /// Evaluate against a parsed document.
    ///
    /// Returns matched element nodes in document order. Re-evaluating is
    /// safe and cheap; the query holds no state across calls.
    pub fn matches<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        let mut current = vec![doc.root()];
        for segment in &self.segments {
            let mut next = Vec::new();
            for node in current {
                next.extend(
                    node.children()
                        .filter(|child| child.is_element() && child.tag_name().name() == segment),
                );
            }
            current = next;
        }

        if let Some(want) = &self.text_equals {
            current.retain(|node| node.text() == Some(want.as_str()));
        }

        current
    }
}

/// Map every element matched by `query` to a single-entry record: key is the
/// element's tag name, value its direct text content. Elements without text
/// yield an empty record.
pub fn match_all(doc: &Document<'_>, query: &PathQuery) -> Vec<FieldMap> {
    query
        .matches(doc)
        .into_iter()
        .map(|node| {
            let mut fields = FieldMap::new();
            if let Some(text) = element_text(&node) {
                fields.insert(node.tag_name().name().to_string(), text.to_string());
            }
            fields
        })
        .collect()
}

/// Map the first element matched by `query`, or `None` when nothing matches.
/// Matching nothing is not an error.
pub fn match_one(doc: &Document<'_>, query: &PathQuery) -> Option<FieldMap> {
    match_all(doc, query).into_iter().next()
}

/// Collect every child element of `node` that carries text content into a
/// field map keyed by tag name.
///
/// Reconstructing a full record from a single matched child (e.g. a layout
/// located by its `name` element) is done by applying this to the matched
/// node's parent.
pub fn element_fields(node: &Node<'_, '_>) -> FieldMap {
    let mut fields = FieldMap::new();
    for child in node.children().filter(Node::is_element) {
        if let Some(text) = element_text(&child) {
            fields.insert(child.tag_name().name().to_string(), text.to_string());
        }
    }
    fields
}

/// Direct text content of an element, ignoring whitespace-only nodes.
fn element_text<'a>(node: &Node<'a, '_>) -> Option<&'a str> {
    node.text().filter(|text| !text.trim().is_empty())
}
