//! Matchit routing configuration.

use std::sync::Arc;

use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use matchit::Router as MatchitRouter;

use crate::handlers;
use crate::handlers::request_utils::{BoxError, MatchitParams};
use folio_core::config::FolioConfig;
use folio_runtime::StoreHandle;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the store runtime
    pub store: StoreHandle,
    /// Server configuration
    pub config: Arc<FolioConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the portfolio routes.
    pub fn new(store: StoreHandle, config: Arc<FolioConfig>) -> Self {
        let mut router = MatchitRouter::new();

        // Blog endpoints
        router
            .insert("/api/blog-posts", RouteHandler::BlogPosts)
            .expect("Failed to insert /api/blog-posts route");
        router
            .insert("/api/blog-posts/search", RouteHandler::Search)
            .expect("Failed to insert /api/blog-posts/search route");
        router
            .insert("/api/blog-posts/search/{query}", RouteHandler::Search)
            .expect("Failed to insert /api/blog-posts/search/{query} route");
        router
            .insert("/api/blog-posts/{id}", RouteHandler::BlogPost)
            .expect("Failed to insert /api/blog-posts/{id} route");

        // Contact endpoints
        router
            .insert("/api/contact", RouteHandler::Contact)
            .expect("Failed to insert /api/contact route");
        router
            .insert("/api/contacts", RouteHandler::Contacts)
            .expect("Failed to insert /api/contacts route");

        Self {
            inner: router,
            state: AppState { store, config },
        }
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// # Arguments
    /// * `req` - HTTP request
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub async fn route<B>(&self, req: Request<B>) -> Result<Response<Bytes>, RouterError>
    where
        B: Body<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        let path = req.uri().path().to_string();

        match self.inner.at(&path) {
            Ok(matched) => {
                let handler = matched.value;
                handler
                    .handle(req, matched.params, self.state.clone())
                    .await
            }
            Err(_) => Err(RouterError::NotFound(format!(
                "No route found for {}",
                path
            ))),
        }
    }

    /// Routes a request and turns any error into its JSON error response.
    pub async fn respond<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: Body<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = match self.route(req).await {
            Ok(response) => response,
            Err(err) => {
                if matches!(err, RouterError::InternalError(_)) {
                    tracing::error!("{} {} failed: {}", method, path, err);
                } else {
                    tracing::debug!("{} {} rejected: {}", method, path, err);
                }
                Response::from(err)
            }
        };
        tracing::info!("{} {} -> {}", method, path, response.status().as_u16());
        response
    }
}

/// Route handler function.
enum RouteHandler {
    BlogPosts,
    BlogPost,
    Search,
    Contact,
    Contacts,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle<B>(
        &self,
        req: Request<B>,
        params: MatchitParams<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError>
    where
        B: Body<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        match self {
            RouteHandler::BlogPosts if req.method() == Method::GET => {
                handlers::list_blog_posts(req, params, state).await
            }
            RouteHandler::BlogPost if req.method() == Method::GET => {
                handlers::get_blog_post(req, params, state).await
            }
            RouteHandler::Search if req.method() == Method::GET => {
                if params.get("query").is_some() {
                    handlers::search_blog_posts_by_path(req, params, state).await
                } else {
                    handlers::search_blog_posts(req, params, state).await
                }
            }
            RouteHandler::Contact if req.method() == Method::POST => {
                handlers::create_contact(req, params, state).await
            }
            RouteHandler::Contacts if req.method() == Method::GET => {
                handlers::list_contacts(req, params, state).await
            }
            _ => Err(RouterError::MethodNotAllowed),
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    Timeout,
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
}

impl RouterError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            RouterError::MethodNotAllowed => 405,
            RouterError::InternalError(_) => 500,
            RouterError::Timeout => 408,
            RouterError::BadRequest(_) => 400,
            RouterError::NotFound(_) => 404,
            RouterError::PayloadTooLarge(_) => 413,
        }
    }
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::Timeout => write!(f, "Request Timeout"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            RouterError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let status = err.status();
        let message = match &err {
            RouterError::MethodNotAllowed => "Method Not Allowed",
            RouterError::Timeout => "Request Timeout",
            RouterError::InternalError(msg)
            | RouterError::BadRequest(msg)
            | RouterError::NotFound(msg)
            | RouterError::PayloadTooLarge(msg) => msg.as_str(),
        };

        let error_response = handlers::error_response(status, message.to_string(), None);
        let body = serde_json::to_vec(&error_response)
            .unwrap_or_else(|e| format!("{{\"success\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\"}}}}", e).into_bytes());

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                let mut fallback = Response::new(Bytes::from("Internal Server Error"));
                *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}
