//! Requests accepted by the runtime.

use tokio::sync::oneshot;

use folio_core::{
    BlogPost, Contact, NewBlogPost, NewContact, NewUser, RecordId, StoreStats, User,
};

/// Reply channel for a request producing `T`
pub type ResponseSender<T> = oneshot::Sender<T>;

/// One store operation plus the channel its result is sent back on.
#[derive(Debug)]
pub enum ApiRequest {
    /// Look up a user by id
    GetUser {
        id: RecordId,
        response: ResponseSender<Option<User>>,
    },
    /// Look up a user by username
    GetUserByUsername {
        username: String,
        response: ResponseSender<Option<User>>,
    },
    /// Store a new user
    CreateUser {
        user: NewUser,
        response: ResponseSender<User>,
    },
    /// List every blog post, newest first
    ListBlogPosts {
        response: ResponseSender<Vec<BlogPost>>,
    },
    /// Look up a blog post by id
    GetBlogPost {
        id: RecordId,
        response: ResponseSender<Option<BlogPost>>,
    },
    /// Publish a new blog post
    CreateBlogPost {
        post: NewBlogPost,
        response: ResponseSender<BlogPost>,
    },
    /// Free-text search over blog posts
    SearchBlogPosts {
        query: String,
        response: ResponseSender<Vec<BlogPost>>,
    },
    /// List every contact submission, newest first
    ListContacts {
        response: ResponseSender<Vec<Contact>>,
    },
    /// Store a contact submission
    CreateContact {
        contact: NewContact,
        response: ResponseSender<Contact>,
    },
    /// Row counts per table
    Stats { response: ResponseSender<StoreStats> },
}

impl ApiRequest {
    /// Short operation name for log events.
    pub fn operation(&self) -> &'static str {
        match self {
            ApiRequest::GetUser { .. } => "get_user",
            ApiRequest::GetUserByUsername { .. } => "get_user_by_username",
            ApiRequest::CreateUser { .. } => "create_user",
            ApiRequest::ListBlogPosts { .. } => "get_blog_posts",
            ApiRequest::GetBlogPost { .. } => "get_blog_post",
            ApiRequest::CreateBlogPost { .. } => "create_blog_post",
            ApiRequest::SearchBlogPosts { .. } => "search_blog_posts",
            ApiRequest::ListContacts { .. } => "get_contacts",
            ApiRequest::CreateContact { .. } => "create_contact",
            ApiRequest::Stats { .. } => "stats",
        }
    }

    /// Returns true if this request adds a row to the store.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            ApiRequest::CreateUser { .. }
                | ApiRequest::CreateBlogPost { .. }
                | ApiRequest::CreateContact { .. }
        )
    }
}
