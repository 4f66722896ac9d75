//! Request loop that owns the record store.

use tokio::sync::mpsc;

use folio_core::RecordStore;

use crate::api_request::{ApiRequest, ResponseSender};

/// Owns the store and executes requests one at a time.
///
/// Every request runs to completion before the next one is received, so
/// each store operation is atomic with respect to all others and the store
/// needs no locking.
pub struct Runtime {
    /// The store, exclusively owned
    store: RecordStore,
    /// API request receiver
    api_rx: mpsc::Receiver<ApiRequest>,
    /// Requests handled so far
    processed: u64,
    /// Replies whose caller had already gone away
    abandoned: u64,
}

impl Runtime {
    /// Creates a runtime over `store` fed by `api_rx`.
    pub fn new(store: RecordStore, api_rx: mpsc::Receiver<ApiRequest>) -> Self {
        Self {
            store,
            api_rx,
            processed: 0,
            abandoned: 0,
        }
    }

    /// Read access to the owned store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Number of requests handled so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Number of replies that could not be delivered.
    pub fn abandoned(&self) -> u64 {
        self.abandoned
    }

    /// Runs until every sender is dropped.
    ///
    /// # Returns
    /// The total number of requests handled.
    pub async fn run(mut self) -> u64 {
        tracing::info!("Store runtime started");
        while let Some(req) = self.api_rx.recv().await {
            self.handle_api_request(req);
        }
        let stats = self.store.stats();
        tracing::info!(
            "Store runtime stopped: processed={}, abandoned={}, users={}, blog_posts={}, contacts={}",
            self.processed,
            self.abandoned,
            stats.users,
            stats.blog_posts,
            stats.contacts
        );
        self.processed
    }

    /// Handles every request already queued without waiting for more.
    ///
    /// # Returns
    /// The number of requests handled by this call.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(req) = self.api_rx.try_recv() {
            self.handle_api_request(req);
            handled += 1;
        }
        handled
    }

    /// Handle API request
    fn handle_api_request(&mut self, req: ApiRequest) {
        tracing::debug!(
            "Handling {} (write={})",
            req.operation(),
            req.is_write()
        );
        let operation = req.operation();
        let delivered = match req {
            ApiRequest::GetUser { id, response } => reply(response, self.store.get_user(&id)),
            ApiRequest::GetUserByUsername { username, response } => {
                reply(response, self.store.get_user_by_username(&username))
            }
            ApiRequest::CreateUser { user, response } => {
                reply(response, self.store.create_user(user))
            }
            ApiRequest::ListBlogPosts { response } => {
                reply(response, self.store.get_blog_posts())
            }
            ApiRequest::GetBlogPost { id, response } => {
                reply(response, self.store.get_blog_post(&id))
            }
            ApiRequest::CreateBlogPost { post, response } => {
                reply(response, self.store.create_blog_post(post))
            }
            ApiRequest::SearchBlogPosts { query, response } => {
                reply(response, self.store.search_blog_posts(&query))
            }
            ApiRequest::ListContacts { response } => reply(response, self.store.get_contacts()),
            ApiRequest::CreateContact { contact, response } => {
                reply(response, self.store.create_contact(contact))
            }
            ApiRequest::Stats { response } => reply(response, self.store.stats()),
        };

        self.processed += 1;
        if !delivered {
            // Writes still happened; only the caller is gone
            self.abandoned += 1;
            tracing::debug!("Caller dropped before {} completed", operation);
        }
    }
}

/// Sends a result back, reporting whether the caller was still listening.
fn reply<T>(response: ResponseSender<T>, value: T) -> bool {
    response.send(value).is_ok()
}
