//! Record store holding the user, blog post, and contact tables.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::FolioConfig;
use crate::model::{BlogPost, Contact, NewBlogPost, NewContact, NewUser, RecordId, User};
use crate::search::{newest_first, SearchQuery};
use crate::seed::SEED_POSTS;
use crate::table::Table;

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub users: usize,
    pub blog_posts: usize,
    pub contacts: usize,
}

/// In-memory store of every entity the site serves.
///
/// Reads hand out owned copies, so stored rows can only change through the
/// create operations. None of the operations fail: a missing id is `None`.
#[derive(Debug)]
pub struct RecordStore {
    users: Table<User>,
    blog_posts: Table<BlogPost>,
    contacts: Table<Contact>,
}

impl RecordStore {
    /// Creates an empty store with no seed data.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store reserving `capacity` rows per table.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: Table::new("users", capacity),
            blog_posts: Table::new("blog_posts", capacity),
            contacts: Table::new("contacts", capacity),
        }
    }

    /// Creates a store loaded with the seed blog catalogue.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed_blog_posts();
        store
    }

    /// Creates a store as described by the configuration.
    pub fn from_config(config: &FolioConfig) -> Self {
        let mut store = Self::with_capacity(config.initial_table_capacity);
        if config.seed_blog_posts {
            store.seed_blog_posts();
        }
        store
    }

    fn seed_blog_posts(&mut self) {
        for seed in SEED_POSTS {
            self.insert_blog_post(seed.to_new_post(), seed.published_at());
        }
        tracing::info!("Seeded {} blog posts", SEED_POSTS.len());
    }

    /// Returns the number of rows in each table.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            blog_posts: self.blog_posts.len(),
            contacts: self.contacts.len(),
        }
    }

    // Users

    /// Looks up a user by id.
    pub fn get_user(&self, id: &RecordId) -> Option<User> {
        self.users.get(id).cloned()
    }

    /// Returns the first user, in insertion order, with exactly this username.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .find(|user| user.username == username)
            .cloned()
    }

    /// Stores a new user under a fresh id.
    ///
    /// Usernames are not checked for uniqueness; that is up to the caller.
    pub fn create_user(&mut self, new_user: NewUser) -> User {
        let user = self
            .users
            .insert_with(|id| User {
                id,
                username: new_user.username,
                password: new_user.password,
            })
            .clone();
        tracing::info!("Created user {} ({})", user.id, user.username);
        user
    }

    // Blog posts

    /// Returns every blog post, most recently published first.
    pub fn get_blog_posts(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self.blog_posts.iter().cloned().collect();
        newest_first(&mut posts, |post| post.published_at);
        posts
    }

    /// Looks up a blog post by id.
    pub fn get_blog_post(&self, id: &RecordId) -> Option<BlogPost> {
        self.blog_posts.get(id).cloned()
    }

    /// Publishes a new blog post, stamped with the current time.
    pub fn create_blog_post(&mut self, new_post: NewBlogPost) -> BlogPost {
        let post = self.insert_blog_post(new_post, Utc::now());
        tracing::info!("Created blog post {} ({})", post.id, post.title);
        post
    }

    fn insert_blog_post(&mut self, new_post: NewBlogPost, published_at: DateTime<Utc>) -> BlogPost {
        self.blog_posts
            .insert_with(|id| new_post.into_post(id, published_at))
            .clone()
    }

    /// Returns the posts matching `query`, most recently published first.
    ///
    /// See [`SearchQuery`] for the matching rules. The query is not trimmed,
    /// and the empty string matches every post.
    pub fn search_blog_posts(&self, query: &str) -> Vec<BlogPost> {
        let query = SearchQuery::new(query);
        let mut matches: Vec<BlogPost> = self
            .blog_posts
            .iter()
            .filter(|post| query.matches(post))
            .cloned()
            .collect();
        newest_first(&mut matches, |post| post.published_at);
        tracing::debug!(
            "Search {:?} matched {} of {} posts",
            query.needle(),
            matches.len(),
            self.blog_posts.len()
        );
        matches
    }

    // Contacts

    /// Returns every contact submission, newest first.
    pub fn get_contacts(&self) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = self.contacts.iter().cloned().collect();
        newest_first(&mut contacts, |contact| contact.created_at);
        contacts
    }

    /// Stores a contact submission, stamped with the current time.
    pub fn create_contact(&mut self, new_contact: NewContact) -> Contact {
        let created_at = Utc::now();
        let contact = self
            .contacts
            .insert_with(|id| Contact {
                id,
                name: new_contact.name,
                email: new_contact.email,
                subject: new_contact.subject,
                message: new_contact.message,
                created_at,
            })
            .clone();
        tracing::info!("Created contact {} from {}", contact.id, contact.email);
        contact
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
