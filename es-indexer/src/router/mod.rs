//! Routing of search entry keys to content families.
//!
//! The key's `collection` (and, for forum and social, its `type`) is resolved
//! once into a [`Route`]; mappers and id resolution match on the route rather
//! than re-reading the strings. Only an unknown collection is skipped; an
//! unknown type within `forum` or `social` still gets a route.

use std::fmt;

use es_indexer_shared::SearchEntryKey;

/// Sub-variant of the `forum` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForumKind {
    Category,
    Forum,
    Topic,
    Post,
    /// Any other type; indexed as an empty document.
    Other,
}

impl ForumKind {
    fn parse(entry_type: &str) -> Self {
        match entry_type {
            "category" => Self::Category,
            "forum" => Self::Forum,
            "topic" => Self::Topic,
            "post" => Self::Post,
            _ => Self::Other,
        }
    }
}

/// Sub-variant of the `social` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Profile,
    Space,
    /// Any other type; no document can be built for it.
    Other,
}

impl SocialKind {
    fn parse(entry_type: &str) -> Self {
        match entry_type {
            "profile" => Self::Profile,
            "space" => Self::Space,
            _ => Self::Other,
        }
    }
}

/// Content family an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Wiki,
    Calendar,
    Answer,
    Content,
    Forum(ForumKind),
    Social(SocialKind),
}

impl Route {
    /// Resolve the route for a key.
    ///
    /// Returns `None` for collections the indexer does not handle.
    ///
    /// # Example
    ///
    /// ```
    /// use es_indexer::router::{ForumKind, Route};
    /// use es_indexer_shared::SearchEntryKey;
    ///
    /// let key = SearchEntryKey::new("forum", "post", "post-1");
    /// assert_eq!(Route::resolve(&key), Some(Route::Forum(ForumKind::Post)));
    ///
    /// let key = SearchEntryKey::new("forum", "poll", "poll-1");
    /// assert_eq!(Route::resolve(&key), Some(Route::Forum(ForumKind::Other)));
    /// assert_eq!(Route::resolve(&SearchEntryKey::new("poll", "poll", "p")), None);
    /// ```
    pub fn resolve(key: &SearchEntryKey) -> Option<Self> {
        match key.collection.as_str() {
            "wiki" => Some(Self::Wiki),
            "calendar" => Some(Self::Calendar),
            "answer" => Some(Self::Answer),
            "content" => Some(Self::Content),
            "forum" => Some(Self::Forum(ForumKind::parse(&key.entry_type))),
            "social" => Some(Self::Social(SocialKind::parse(&key.entry_type))),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wiki => f.write_str("wiki"),
            Self::Calendar => f.write_str("calendar"),
            Self::Answer => f.write_str("answer"),
            Self::Content => f.write_str("content"),
            Self::Forum(kind) => write!(f, "forum/{:?}", kind),
            Self::Social(kind) => write!(f, "social/{:?}", kind),
        }
    }
}
