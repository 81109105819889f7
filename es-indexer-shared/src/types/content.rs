//! The content bag passed along with add and update notifications.

use std::collections::HashMap;

use crate::types::platform::{
    CalendarEvent, ContentNode, Forum, ForumCategory, Post, Profile, Question, Space, Topic,
    WikiPage,
};

/// Well-known keys under which the platform publishes its content objects.
pub mod content_keys {
    pub const PAGE: &str = "page";
    pub const EVENT: &str = "event";
    pub const QUESTION: &str = "question";
    pub const CONTENT: &str = "content";
    pub const CATEGORY: &str = "category";
    pub const FORUM: &str = "forum";
    pub const TOPIC: &str = "topic";
    pub const POST: &str = "post";
    pub const PROFILE: &str = "profile";
    pub const SPACE: &str = "space";
}

/// One platform object carried in a [`ContentBag`].
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Page(WikiPage),
    Event(CalendarEvent),
    Question(Question),
    Node(ContentNode),
    Category(ForumCategory),
    Forum(Forum),
    Topic(Topic),
    Post(Post),
    Profile(Profile),
    Space(Space),
}

impl Content {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Page(_) => "wiki page",
            Self::Event(_) => "calendar event",
            Self::Question(_) => "question",
            Self::Node(_) => "content node",
            Self::Category(_) => "forum category",
            Self::Forum(_) => "forum",
            Self::Topic(_) => "forum topic",
            Self::Post(_) => "forum post",
            Self::Profile(_) => "profile",
            Self::Space(_) => "space",
        }
    }

    pub fn as_page(&self) -> Option<&WikiPage> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_event(&self) -> Option<&CalendarEvent> {
        match self {
            Self::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Self::Question(question) => Some(question),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&ContentNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&ForumCategory> {
        match self {
            Self::Category(category) => Some(category),
            _ => None,
        }
    }

    pub fn as_forum(&self) -> Option<&Forum> {
        match self {
            Self::Forum(forum) => Some(forum),
            _ => None,
        }
    }

    pub fn as_topic(&self) -> Option<&Topic> {
        match self {
            Self::Topic(topic) => Some(topic),
            _ => None,
        }
    }

    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Self::Post(post) => Some(post),
            _ => None,
        }
    }

    pub fn as_profile(&self) -> Option<&Profile> {
        match self {
            Self::Profile(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn as_space(&self) -> Option<&Space> {
        match self {
            Self::Space(space) => Some(space),
            _ => None,
        }
    }
}

/// Named content objects describing one entry.
///
/// The bag is owned by the caller; the indexer only borrows it while mapping
/// a single operation.
///
/// # Example
///
/// ```
/// use es_indexer_shared::{content_keys, CalendarEvent, Content, ContentBag};
///
/// let bag = ContentBag::new().with(
///     content_keys::EVENT,
///     Content::Event(CalendarEvent {
///         message: "Sprint review".to_string(),
///         description: None,
///     }),
/// );
/// assert!(bag.get(content_keys::EVENT).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBag {
    entries: HashMap<String, Content>,
}

impl ContentBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, content: Content) -> Self {
        self.insert(key, content);
        self
    }

    /// Insert a content object, returning the one previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, content: Content) -> Option<Content> {
        self.entries.insert(key.into(), content)
    }

    pub fn get(&self, key: &str) -> Option<&Content> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Content)> for ContentBag {
    fn from_iter<I: IntoIterator<Item = (K, Content)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
