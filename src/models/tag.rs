//! Tag record

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted tag text, in characters.
pub const MAX_TAG_LENGTH: usize = 64;

/// A tag. Immutable once created.
///
/// Serializes as `{"_id": ..., "tag": ...}`, which is also the element format
/// of the cached tag snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub tag: String,
}

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tag: tag.into(),
        }
    }
}

/// Checks tag text after trimming. Returns the rejection message, if any.
pub fn validate_tag_text(text: &str) -> Option<String> {
    let tag = text.trim();
    if tag.is_empty() {
        return Some("Tag cannot be empty".to_string());
    }
    if tag.chars().count() > MAX_TAG_LENGTH {
        return Some(format!(
            "Tag exceeds maximum length of {} characters",
            MAX_TAG_LENGTH
        ));
    }
    None
}
