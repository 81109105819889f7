//! Wiki page documents.

use es_indexer_shared::{Document, WikiPage};

use super::millis;

/// Map a wiki page.
///
/// Fields: `title, owner, author, url, createdDate, updatedDate, body`, with
/// both dates in epoch milliseconds and `body` the page's plain text.
pub fn page_document(page: &WikiPage) -> Document {
    Document::new()
        .with("title", page.title.as_str())
        .with("owner", page.owner.as_str())
        .with("author", page.author.as_str())
        .with("url", page.url.as_str())
        .with("createdDate", millis(&page.created_date))
        .with("updatedDate", millis(&page.updated_date))
        .with("body", page.content.as_str())
}
