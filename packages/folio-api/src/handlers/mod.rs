//! HTTP endpoint implementations for blog posts and contacts.

mod blog_handlers;
mod contact_handlers;
pub mod request_utils;
mod response;

pub use blog_handlers::{
    get_blog_post, list_blog_posts, search_blog_posts, search_blog_posts_by_path,
};
pub use contact_handlers::{create_contact, list_contacts};
pub use response::{error_response, ApiError, ErrorResponse};
