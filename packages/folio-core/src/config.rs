//! Store and server configuration.

/// Configuration shared by the store, runtime, and HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Load the fixed blog post catalogue when the store is built
    pub seed_blog_posts: bool,
    /// Initial capacity of each entity table in records
    pub initial_table_capacity: usize,
    /// Bound of the runtime request queue
    pub channel_capacity: usize,
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Store reply timeout in milliseconds
    pub response_timeout_ms: u64,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            seed_blog_posts: true,
            initial_table_capacity: 64,
            channel_capacity: 1024,
            request_timeout_ms: 5000,   // 5 seconds default
            response_timeout_ms: 10000, // 10 seconds default
            max_body_bytes: 64 * 1024,
        }
    }
}
