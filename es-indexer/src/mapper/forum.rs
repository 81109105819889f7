//! Forum documents: categories, forums, topics and posts.
//!
//! Dates are epoch milliseconds, or `null` when the forum service has none.

use es_indexer_shared::{Document, Forum, ForumCategory, Post, Topic};

use super::optional_millis;

pub fn category_document(category: &ForumCategory) -> Document {
    Document::new()
        .with("title", category.name.as_str())
        .with("description", category.description.as_str())
        .with("createdDate", optional_millis(category.created_date.as_ref()))
        .with("updatedDate", optional_millis(category.modified_date.as_ref()))
}

/// Category fields plus the parent `category` id.
pub fn forum_document(forum: &Forum) -> Document {
    Document::new()
        .with("title", forum.name.as_str())
        .with("description", forum.description.as_str())
        .with("createdDate", optional_millis(forum.created_date.as_ref()))
        .with("updatedDate", optional_millis(forum.modified_date.as_ref()))
        .with("category", forum.category_id.as_str())
}

pub fn topic_document(topic: &Topic) -> Document {
    Document::new()
        .with("title", topic.name.as_str())
        .with("description", topic.description.as_str())
        .with("createdDate", optional_millis(topic.created_date.as_ref()))
        .with("updatedDate", optional_millis(topic.modified_date.as_ref()))
        .with("owner", topic.owner.as_str())
        .with("url", topic.link.as_str())
        .with("category", topic.category_id.as_str())
        .with("forum", topic.forum_id.as_str())
}

/// A post's `title` is its name and its `description` the message body.
pub fn post_document(post: &Post) -> Document {
    Document::new()
        .with("title", post.name.as_str())
        .with("description", post.message.as_str())
        .with("createdDate", optional_millis(post.created_date.as_ref()))
        .with("updatedDate", optional_millis(post.modified_date.as_ref()))
        .with("owner", post.owner.as_str())
        .with("url", post.link.as_str())
        .with("category", post.category_id.as_str())
        .with("forum", post.forum_id.as_str())
        .with("topic", post.topic_id.as_str())
}
