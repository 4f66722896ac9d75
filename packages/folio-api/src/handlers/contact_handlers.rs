//! Contact form handlers.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use folio_core::NewContact;

use super::request_utils::{
    json_response, map_store_error_to_router_error, read_request_body_with_timeout,
    validate_contact, BoxError, MatchitParams,
};

/// Stores a contact form submission.
///
/// # Endpoint
/// `POST /api/contact`
///
/// # Request Body
/// ```json
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "subject": "Hello",
///   "message": "Nice portfolio"
/// }
/// ```
///
/// # Response
/// - **201 Created**: The stored contact with its `id` and `createdAt`
///
/// # Errors
/// - **400 Bad Request**: Malformed JSON, blank field, or invalid email
/// - **408 Request Timeout**: Body or store reply took too long
/// - **413 Payload Too Large**: Body exceeds `max_body_bytes`
/// - **500 Internal Server Error**: Store runtime unavailable
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:5000/api/contact \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello"}'
/// ```
pub async fn create_contact<B>(
    req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: hyper::body::Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let body_bytes = read_request_body_with_timeout(
        req,
        state.config.request_timeout_ms,
        state.config.max_body_bytes,
    )
    .await?;

    let submission: NewContact = serde_json::from_slice(&body_bytes)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))?;
    let submission = validate_contact(submission)?;

    let contact = state
        .store
        .create_contact(submission)
        .await
        .map_err(map_store_error_to_router_error)?;

    tracing::info!("Stored contact {} from {}", contact.id, contact.email);
    json_response(201, &contact)
}

/// Lists every contact submission.
///
/// # Endpoint
/// `GET /api/contacts`
///
/// # Response
/// - **200 OK**: JSON array of contacts, newest `createdAt` first
pub async fn list_contacts<B>(
    _req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let contacts = state
        .store
        .get_contacts()
        .await
        .map_err(map_store_error_to_router_error)?;

    json_response(200, &contacts)
}
