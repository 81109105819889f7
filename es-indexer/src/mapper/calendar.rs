//! Calendar event documents.

use es_indexer_shared::{CalendarEvent, Document};

/// Map a calendar event. `type` carries the entry type of the key.
pub fn event_document(entry_type: &str, event: &CalendarEvent) -> Document {
    Document::new()
        .with("type", entry_type)
        .with("message", event.message.as_str())
        .with("description", event.description.clone())
}
