//! Content platform objects as they arrive in a [`ContentBag`](crate::ContentBag).
//!
//! These mirror the subset of the platform's domain model the indexer reads.
//! They are plain data; the platform owns them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A wiki page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WikiPage {
    pub title: String,
    pub owner: String,
    pub author: String,
    pub url: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    /// Plain text of the rendered page content.
    pub content: String,
    /// Durable repository node identifier. Unlike the page name it never
    /// changes over the life of the page. `None` when the node could not be
    /// read.
    pub node_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub message: String,
    pub description: Option<String>,
}

/// A Q&A question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// The question text, used as the document title.
    pub question: String,
    pub detail: String,
    pub author: String,
    pub category_id: String,
    pub link: String,
    pub created_date: DateTime<Utc>,
    /// Last activity marker exactly as the Q&A service reports it.
    pub time_of_last_activity: i64,
}

/// Value of a repository node property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeProperty {
    Single(String),
    Multiple(Vec<String>),
}

/// Error reading a node property as a single string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyReadError {
    #[error("Property {property} is multi-valued")]
    MultiValued { property: String },
}

/// A generic repository content node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    pub path: String,
    pub properties: BTreeMap<String, NodeProperty>,
}

impl ContentNode {
    /// Create a node with no properties.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style single-valued property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .insert(name.into(), NodeProperty::Single(value.into()));
        self
    }

    /// Builder-style multi-valued property.
    pub fn with_values(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.properties
            .insert(name.into(), NodeProperty::Multiple(values));
        self
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Read a property as a single string.
    ///
    /// Returns `Ok(None)` when the property is absent and an error when it
    /// holds several values.
    pub fn property_string(&self, name: &str) -> Result<Option<&str>, PropertyReadError> {
        match self.properties.get(name) {
            None => Ok(None),
            Some(NodeProperty::Single(value)) => Ok(Some(value.as_str())),
            Some(NodeProperty::Multiple(_)) => Err(PropertyReadError::MultiValued {
                property: name.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForumCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forum {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub link: String,
    pub category_id: String,
    pub forum_id: String,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub name: String,
    pub message: String,
    pub owner: String,
    pub link: String,
    pub category_id: String,
    pub forum_id: String,
    pub topic_id: String,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

/// User profile held by the organization service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub user_name: String,
    pub user_info: BTreeMap<String, String>,
}

/// User profile held by the social network service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub id: String,
    pub properties: BTreeMap<String, Value>,
}

/// The two profile shapes published under `social/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Profile {
    Organization(OrganizationProfile),
    Social(SocialProfile),
}

/// A social space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub display_name: String,
    pub description: String,
    pub created_time: i64,
    pub url: String,
    pub avatar_url: Option<String>,
    pub editor: Option<String>,
    pub group_id: String,
    pub managers: Option<Vec<String>>,
    pub members: Option<Vec<String>>,
    pub invited_users: Option<Vec<String>>,
    pub pending_users: Option<Vec<String>>,
    pub registration: String,
    pub visibility: String,
}
