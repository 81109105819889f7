//! Social documents: user profiles and spaces.
//!
//! Profile documents have no fixed schema. `username` comes first, followed by
//! every attribute of the source profile as a top-level field.

use es_indexer_shared::{Document, OrganizationProfile, SocialProfile, Space};

/// Map an organization user profile: `username` plus its user info entries.
pub fn organization_profile_document(profile: &OrganizationProfile) -> Document {
    let mut doc = Document::new().with("username", profile.user_name.as_str());
    for (attribute, value) in &profile.user_info {
        doc.insert(attribute.as_str(), value.as_str());
    }
    doc
}

/// Map a social network profile: `username` (its id) plus its properties.
pub fn social_profile_document(profile: &SocialProfile) -> Document {
    let mut doc = Document::new().with("username", profile.id.as_str());
    for (property, value) in &profile.properties {
        doc.insert(property.as_str(), value.clone());
    }
    doc
}

/// Map a space. Absent member lists become empty lists.
pub fn space_document(space: &Space) -> Document {
    Document::new()
        .with("displayName", space.display_name.as_str())
        .with("description", space.description.as_str())
        .with("createdTime", space.created_time)
        .with("url", space.url.as_str())
        .with("avatarUrl", space.avatar_url.clone())
        .with("editor", space.editor.clone())
        .with("group", space.group_id.as_str())
        .with("managers", list(&space.managers))
        .with("members", list(&space.members))
        .with("invitedUsers", list(&space.invited_users))
        .with("pendingUsers", list(&space.pending_users))
        .with("registration", space.registration.as_str())
        .with("visibility", space.visibility.as_str())
}

fn list(users: &Option<Vec<String>>) -> Vec<String> {
    users.clone().unwrap_or_default()
}
