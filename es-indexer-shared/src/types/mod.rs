//! Core data structures used across the indexer.

pub mod content;
pub mod document;
pub mod entry;
pub mod platform;
