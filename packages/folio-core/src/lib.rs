//! In-memory record store for the portfolio site.
//!
//! Provides the entity model, id-indexed tables, the seeded blog
//! catalogue, free-text search, and shared configuration.

pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod seed;
pub mod store;
pub mod table;

pub use model::{
    parse_record_id, BlogPost, Contact, NewBlogPost, NewContact, NewUser, RecordId, User,
};
pub use store::{RecordStore, StoreStats};
