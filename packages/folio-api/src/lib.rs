//! REST API server for the portfolio site.
//!
//! Provides HTTP endpoints for blog posts and the contact form,
//! backed by the store runtime.

pub mod handlers;
pub mod router;
pub mod server;

pub use router::{AppState, Router, RouterError};
pub use server::Server;
