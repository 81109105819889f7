//! Q&A question documents.

use es_indexer_shared::{Document, Question};

use super::millis;

/// Map a question.
///
/// `createdDate` is in epoch milliseconds while `updatedDate` is the last
/// activity value exactly as the Q&A service reports it.
pub fn question_document(question: &Question) -> Document {
    Document::new()
        .with("title", question.question.as_str())
        .with("detail", question.detail.as_str())
        .with("author", question.author.as_str())
        .with("createdDate", millis(&question.created_date))
        .with("updatedDate", question.time_of_last_activity)
        .with("category", question.category_id.as_str())
        .with("url", question.link.as_str())
}
