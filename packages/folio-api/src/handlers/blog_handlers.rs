//! Blog post read and search handlers.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use folio_core::parse_record_id;

use super::request_utils::{
    decode_path_segment, json_response, map_store_error_to_router_error, query_param,
    MatchitParams,
};

/// Lists every blog post.
///
/// # Endpoint
/// `GET /api/blog-posts`
///
/// # Response
/// - **200 OK**: JSON array of posts, newest `publishedAt` first
///
/// # Errors
/// - **408 Request Timeout**: The store did not answer in time
/// - **500 Internal Server Error**: Store runtime unavailable
///
/// # Example
/// ```bash
/// curl http://localhost:5000/api/blog-posts
/// ```
pub async fn list_blog_posts<B>(
    _req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let posts = state
        .store
        .get_blog_posts()
        .await
        .map_err(map_store_error_to_router_error)?;

    json_response(200, &posts)
}

/// Fetches one blog post by id.
///
/// # Endpoint
/// `GET /api/blog-posts/{id}`
///
/// # Response
/// - **200 OK**: The post
///
/// # Errors
/// - **404 Not Found**: No post has this id, or the id is not a UUID
/// - **408 Request Timeout**: The store did not answer in time
/// - **500 Internal Server Error**: Store runtime unavailable
pub async fn get_blog_post<B>(
    _req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let raw_id = params.get("id").unwrap_or_default();
    let not_found = || RouterError::NotFound(format!("Blog post '{}' not found", raw_id));

    // Malformed ids cannot name a stored post
    let id = parse_record_id(raw_id).ok_or_else(not_found)?;

    let post = state
        .store
        .get_blog_post(id)
        .await
        .map_err(map_store_error_to_router_error)?
        .ok_or_else(not_found)?;

    json_response(200, &post)
}

/// Searches blog posts with the `q` query string parameter.
///
/// # Endpoint
/// `GET /api/blog-posts/search?q={query}`
///
/// # Response
/// - **200 OK**: JSON array of matching posts, newest first. A missing or
///   blank `q` returns every post.
///
/// # Errors
/// - **408 Request Timeout**: The store did not answer in time
/// - **500 Internal Server Error**: Store runtime unavailable
///
/// # Example
/// ```bash
/// curl "http://localhost:5000/api/blog-posts/search?q=cost+optimization"
/// ```
pub async fn search_blog_posts<B>(
    req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let query = query_param(req.uri().query(), "q").unwrap_or_default();
    run_search(&query, state).await
}

/// Searches blog posts with the query as a path segment.
///
/// # Endpoint
/// `GET /api/blog-posts/search/{query}`
///
/// Same results as the query string form; the segment is percent-decoded.
pub async fn search_blog_posts_by_path<B>(
    _req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let query = decode_path_segment(params.get("query").unwrap_or_default());
    run_search(&query, state).await
}

async fn run_search(query: &str, state: AppState) -> Result<Response<Bytes>, RouterError> {
    let query = query.trim();
    let posts = state
        .store
        .search_blog_posts(query)
        .await
        .map_err(map_store_error_to_router_error)?;

    tracing::debug!("Search '{}' matched {} posts", query, posts.len());
    json_response(200, &posts)
}
