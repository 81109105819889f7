//! # Indexer Shared
//!
//! Data structures shared across the content indexer: the search entry keys
//! and operations received from the content platform, the content bag with
//! its platform objects, and the normalized documents sent to the search
//! engine.

pub mod types;

pub use types::content::{content_keys, Content, ContentBag};
pub use types::document::Document;
pub use types::entry::{Operation, OperationKind, SearchEntry, SearchEntryKey};
pub use types::platform::{
    CalendarEvent, ContentNode, Forum, ForumCategory, NodeProperty, OrganizationProfile, Post,
    Profile, PropertyReadError, Question, SocialProfile, Space, Topic, WikiPage,
};
