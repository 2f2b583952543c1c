//! Community record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "imageURI", default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// User ids subscribed to this community
    #[serde(default)]
    pub subscribers: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            image_uri: None,
            subscribers: Vec::new(),
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_subscribed(&self, user_id: &str) -> bool {
        self.subscribers.iter().any(|id| id == user_id)
    }

    /// Adds the user if not already present. Returns whether anything changed.
    pub fn add_subscriber(&mut self, user_id: &str) -> bool {
        if self.is_subscribed(user_id) {
            return false;
        }
        self.subscribers.push(user_id.to_string());
        self.updated_at = Utc::now();
        true
    }

    /// Removes the user if present. Returns whether anything changed.
    pub fn remove_subscriber(&mut self, user_id: &str) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|id| id != user_id);
        let changed = self.subscribers.len() != before;
        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_is_idempotent() {
        let mut community = Community::new("Rustaceans", "All things Rust", "admin");

        assert!(community.add_subscriber("u1"));
        assert!(!community.add_subscriber("u1"));
        assert_eq!(community.subscribers, vec!["u1".to_string()]);
    }

    #[test]
    fn test_remove_subscriber() {
        let mut community = Community::new("Rustaceans", "All things Rust", "admin");
        community.add_subscriber("u1");

        assert!(community.remove_subscriber("u1"));
        assert!(!community.remove_subscriber("u1"));
        assert!(!community.is_subscribed("u1"));
    }

    #[test]
    fn test_community_wire_format() {
        let community = Community::new("Rustaceans", "All things Rust", "admin");
        let json = serde_json::to_value(&community).unwrap();

        assert!(json.get("_id").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("imageURI").is_none());
    }
}
