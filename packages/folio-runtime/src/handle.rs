//! Async client for the store runtime.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time;

use folio_core::error::StoreError;
use folio_core::{
    BlogPost, Contact, NewBlogPost, NewContact, NewUser, RecordId, StoreStats, User,
};

use crate::api_request::ApiRequest;

/// Result type for store access through the runtime
pub type Result<T> = std::result::Result<T, StoreError>;

/// Cloneable async handle to the store runtime.
///
/// Each method queues one request and waits for its reply. The store never
/// fails an operation; errors only report that the runtime could not be
/// reached or did not answer in time.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    api_tx: mpsc::Sender<ApiRequest>,
    response_timeout: Duration,
}

impl StoreHandle {
    /// Creates a handle sending on `api_tx`.
    ///
    /// # Arguments
    /// * `api_tx` - Request channel read by the runtime
    /// * `response_timeout` - How long to wait for each reply
    pub fn new(api_tx: mpsc::Sender<ApiRequest>, response_timeout: Duration) -> Self {
        Self {
            api_tx,
            response_timeout,
        }
    }

    /// Sends one request and waits for the reply.
    async fn request<T, F>(&self, build: F) -> Result<T>
    where
        F: FnOnce(oneshot::Sender<T>) -> ApiRequest,
    {
        let (tx, rx) = oneshot::channel();
        self.api_tx
            .send(build(tx))
            .await
            .map_err(|_| StoreError::RuntimeStopped)?;

        time::timeout(self.response_timeout, rx)
            .await
            .map_err(|_| StoreError::Timeout {
                timeout_ms: self.response_timeout.as_millis() as u64,
            })?
            .map_err(|_| StoreError::ResponseDropped)
    }

    pub async fn get_user(&self, id: RecordId) -> Result<Option<User>> {
        self.request(|response| ApiRequest::GetUser { id, response })
            .await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let username = username.to_string();
        self.request(|response| ApiRequest::GetUserByUsername { username, response })
            .await
    }

    pub async fn create_user(&self, user: NewUser) -> Result<User> {
        self.request(|response| ApiRequest::CreateUser { user, response })
            .await
    }

    /// All blog posts, newest first.
    pub async fn get_blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.request(|response| ApiRequest::ListBlogPosts { response })
            .await
    }

    pub async fn get_blog_post(&self, id: RecordId) -> Result<Option<BlogPost>> {
        self.request(|response| ApiRequest::GetBlogPost { id, response })
            .await
    }

    pub async fn create_blog_post(&self, post: NewBlogPost) -> Result<BlogPost> {
        self.request(|response| ApiRequest::CreateBlogPost { post, response })
            .await
    }

    /// Posts matching `query`, newest first. The empty query matches all.
    pub async fn search_blog_posts(&self, query: &str) -> Result<Vec<BlogPost>> {
        let query = query.to_string();
        self.request(|response| ApiRequest::SearchBlogPosts { query, response })
            .await
    }

    /// All contact submissions, newest first.
    pub async fn get_contacts(&self) -> Result<Vec<Contact>> {
        self.request(|response| ApiRequest::ListContacts { response })
            .await
    }

    pub async fn create_contact(&self, contact: NewContact) -> Result<Contact> {
        self.request(|response| ApiRequest::CreateContact { contact, response })
            .await
    }

    pub async fn stats(&self) -> Result<StoreStats> {
        self.request(|response| ApiRequest::Stats { response })
            .await
    }
}
