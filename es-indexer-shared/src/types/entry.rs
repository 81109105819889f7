//! Search entry keys and the operations received from the content platform.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::content::ContentBag;

/// Logical key of an entry as published by the content platform.
///
/// `collection` selects the content family (`wiki`, `forum`, ...), `entry_type`
/// the sub-variant within it (`topic`, `space`, ...) and `name` the platform's
/// logical identifier for the entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchEntryKey {
    pub collection: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub name: String,
}

impl SearchEntryKey {
    /// Create a new key.
    ///
    /// # Example
    ///
    /// ```
    /// use es_indexer_shared::SearchEntryKey;
    ///
    /// let key = SearchEntryKey::new("forum", "topic", "topic-1");
    /// assert_eq!(key.to_string(), "forum/topic/topic-1");
    /// ```
    pub fn new(
        collection: impl Into<String>,
        entry_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            entry_type: entry_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for SearchEntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.collection, self.entry_type, self.name)
    }
}

/// A new entry: its key plus the content objects describing it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub key: SearchEntryKey,
    pub content: ContentBag,
}

impl SearchEntry {
    /// Create a new search entry.
    pub fn new(key: SearchEntryKey, content: ContentBag) -> Self {
        Self { key, content }
    }
}

/// Kind of change carried by an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    Update,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(label)
    }
}

/// A change notification borrowed from the caller for the duration of one call.
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    /// A new entry was created.
    Add(&'a SearchEntry),
    /// An existing entry changed; `changes` holds the current content.
    Update {
        key: &'a SearchEntryKey,
        changes: &'a ContentBag,
    },
    /// An entry was removed.
    Delete(&'a SearchEntryKey),
}

impl<'a> Operation<'a> {
    /// The key the operation applies to.
    pub fn key(&self) -> &'a SearchEntryKey {
        match self {
            Self::Add(entry) => &entry.key,
            Self::Update { key, .. } => key,
            Self::Delete(key) => key,
        }
    }

    /// The content bag, for add and update operations.
    pub fn content(&self) -> Option<&'a ContentBag> {
        match self {
            Self::Add(entry) => Some(&entry.content),
            Self::Update { changes, .. } => Some(changes),
            Self::Delete(_) => None,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Add(_) => OperationKind::Add,
            Self::Update { .. } => OperationKind::Update,
            Self::Delete(_) => OperationKind::Delete,
        }
    }
}
