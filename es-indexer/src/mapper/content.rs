//! Repository content documents.

use es_indexer_shared::{ContentNode, Document};
use tracing::error;

/// Node properties copied into content documents, as `(property, field)`.
pub const CONTENT_ATTRIBUTES: [(&str, &str); 6] = [
    ("exo:title", "title"),
    ("exo:dateCreated", "dateCreated"),
    ("exo:dateModified", "dateModified"),
    ("exo:owner", "owner"),
    ("jcr:primaryType", "contentType"),
    ("publication:currentState", "publicationState"),
];

/// Map a repository content node.
///
/// Every field of [`CONTENT_ATTRIBUTES`] is always present: the property's
/// string value, or `""` when the property is absent or cannot be read. Read
/// failures are logged one by one and never abort the mapping.
pub fn content_document(name: &str, node: &ContentNode) -> Document {
    let mut doc = Document::new();

    for (property, field) in CONTENT_ATTRIBUTES {
        let value = match node.property_string(property) {
            Ok(value) => value.unwrap_or_default().to_string(),
            Err(e) => {
                error!(
                    content = %name,
                    property = %property,
                    error = %e,
                    "Failed to read content property"
                );
                String::new()
            }
        };
        doc.insert(field, value);
    }

    doc
}
