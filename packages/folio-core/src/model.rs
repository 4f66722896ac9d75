//! Entity types held by the record store.
//!
//! Each entity has a store-assigned [`RecordId`]. The `New*` payloads are
//! what callers hand to the create operations: they never carry an id or a
//! server-assigned timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier assigned by the store.
pub type RecordId = Uuid;

/// Parses a caller-supplied identifier.
///
/// Anything that is not a UUID cannot name a stored record, so callers
/// treat `None` the same as an unknown id.
pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Implemented by every entity so tables can index rows by id.
pub trait Record {
    /// Store-assigned identifier of this row.
    fn id(&self) -> RecordId;
}

/// A site user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for [`RecordStore::create_user`](crate::store::RecordStore::create_user).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: RecordId,
    pub title: String,
    /// Markdown body
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub category: String,
    pub published_at: DateTime<Utc>,
    /// Display string such as "5 min read"
    pub reading_time: String,
}

/// Payload for [`RecordStore::create_blog_post`](crate::store::RecordStore::create_blog_post).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub reading_time: String,
}

impl NewBlogPost {
    pub(crate) fn into_post(self, id: RecordId, published_at: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            tags: self.tags,
            category: self.category,
            published_at,
            reading_time: self.reading_time,
        }
    }
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for [`RecordStore::create_contact`](crate::store::RecordStore::create_contact).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Record for User {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for BlogPost {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Contact {
    fn id(&self) -> RecordId {
        self.id
    }
}
