//! Request utilities for HTTP endpoints.

use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use tokio::time;

use crate::router::RouterError;
use folio_core::error::StoreError;
use folio_core::NewContact;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Boxed error produced by request bodies
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Helper function to read request body with timeout and size limit
pub async fn read_request_body_with_timeout<B>(
    req: Request<B>,
    timeout_ms: u64,
    max_bytes: usize,
) -> Result<Bytes, RouterError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let limited = Limited::new(req.into_body(), max_bytes);
    let body = time::timeout(timeout_duration, limited.collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                RouterError::PayloadTooLarge(format!(
                    "Request body exceeds {} bytes",
                    max_bytes
                ))
            } else {
                RouterError::InternalError(format!("Failed to read request body: {}", e))
            }
        })?;
    Ok(body.to_bytes())
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e {
        StoreError::Timeout { .. } => RouterError::Timeout,
        StoreError::RuntimeStopped | StoreError::ResponseDropped => {
            RouterError::InternalError(format!("Store error: {}", e))
        }
    }
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Serializes `data` as the JSON body of a response
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Bytes>, RouterError> {
    let json = serde_json::to_vec(data)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    build_response(status, json)
}

/// Decodes one query string component (`+` is a space).
fn decode_query_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Decodes a percent-encoded path segment.
pub fn decode_path_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Returns the decoded value of the first `key` parameter in a query string.
///
/// A key with no `=` yields an empty value.
pub fn query_param(query_str: Option<&str>, key: &str) -> Option<String> {
    query_str?
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_component(name) == key).then(|| decode_query_component(value))
        })
}

/// Checks a contact submission and trims its fields.
pub fn validate_contact(contact: NewContact) -> Result<NewContact, RouterError> {
    let trimmed = NewContact {
        name: contact.name.trim().to_string(),
        email: contact.email.trim().to_string(),
        subject: contact.subject.trim().to_string(),
        message: contact.message.trim().to_string(),
    };

    let blank: Vec<&str> = [
        ("name", &trimmed.name),
        ("email", &trimmed.email),
        ("subject", &trimmed.subject),
        ("message", &trimmed.message),
    ]
    .iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| *field)
    .collect();
    if !blank.is_empty() {
        return Err(RouterError::BadRequest(format!(
            "Missing required fields: {}",
            blank.join(", ")
        )));
    }

    if !is_plausible_email(&trimmed.email) {
        return Err(RouterError::BadRequest(format!(
            "Invalid email address '{}'",
            trimmed.email
        )));
    }

    Ok(trimmed)
}

/// One `@` with text on both sides and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
