//! Document mappers.
//!
//! One pure function per content family turns the platform object(s) from a
//! content bag into a [`Document`]. [`map_document`] picks the function for a
//! resolved [`Route`].

mod answer;
mod calendar;
mod content;
mod forum;
mod social;
mod wiki;

pub use answer::question_document;
pub use calendar::event_document;
pub use content::{content_document, CONTENT_ATTRIBUTES};
pub use forum::{category_document, forum_document, post_document, topic_document};
pub use social::{organization_profile_document, social_profile_document, space_document};
pub use wiki::page_document;

use chrono::{DateTime, Utc};
use es_indexer_shared::{content_keys, Content, ContentBag, Document, Profile, SearchEntryKey};
use serde_json::Value;

use crate::errors::MappingError;
use crate::router::{ForumKind, Route, SocialKind};

/// Map the content of an entry into its search document.
///
/// # Errors
///
/// Returns a `MappingError` when the bag has no object under the key the
/// route expects, or an object of another kind. Unknown forum types map to an
/// empty document; unknown social types have no document at all.
pub fn map_document(
    route: Route,
    key: &SearchEntryKey,
    bag: &ContentBag,
) -> Result<Document, MappingError> {
    let doc = match route {
        Route::Wiki => {
            page_document(extract(bag, content_keys::PAGE, "wiki page", Content::as_page)?)
        }
        Route::Calendar => event_document(
            &key.entry_type,
            extract(bag, content_keys::EVENT, "calendar event", Content::as_event)?,
        ),
        Route::Answer => question_document(extract(
            bag,
            content_keys::QUESTION,
            "question",
            Content::as_question,
        )?),
        Route::Content => content_document(
            &key.name,
            extract(bag, content_keys::CONTENT, "content node", Content::as_node)?,
        ),
        Route::Forum(ForumKind::Category) => category_document(extract(
            bag,
            content_keys::CATEGORY,
            "forum category",
            Content::as_category,
        )?),
        Route::Forum(ForumKind::Forum) => {
            forum_document(extract(bag, content_keys::FORUM, "forum", Content::as_forum)?)
        }
        Route::Forum(ForumKind::Topic) => topic_document(extract(
            bag,
            content_keys::TOPIC,
            "forum topic",
            Content::as_topic,
        )?),
        Route::Forum(ForumKind::Post) => {
            post_document(extract(bag, content_keys::POST, "forum post", Content::as_post)?)
        }
        Route::Forum(ForumKind::Other) => Document::new(),
        Route::Social(SocialKind::Profile) => {
            match extract(bag, content_keys::PROFILE, "profile", Content::as_profile)? {
                Profile::Organization(profile) => organization_profile_document(profile),
                Profile::Social(profile) => social_profile_document(profile),
            }
        }
        Route::Social(SocialKind::Space) => {
            space_document(extract(bag, content_keys::SPACE, "space", Content::as_space)?)
        }
        Route::Social(SocialKind::Other) => {
            return Err(MappingError::unsupported(&key.collection, &key.entry_type));
        }
    };

    Ok(doc)
}

/// Fetch the object stored under `key` and check its kind.
pub(crate) fn extract<'a, T>(
    bag: &'a ContentBag,
    key: &str,
    expected: &'static str,
    pick: fn(&'a Content) -> Option<&'a T>,
) -> Result<&'a T, MappingError> {
    let content = bag.get(key).ok_or_else(|| MappingError::missing(key))?;
    pick(content).ok_or_else(|| MappingError::unexpected(key, expected, content.kind()))
}

fn millis(date: &DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

/// Epoch milliseconds, or `null` when the date is absent.
fn optional_millis(date: Option<&DateTime<Utc>>) -> Value {
    date.map(millis).into()
}
