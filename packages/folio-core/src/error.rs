//! Store access error types.
//!
//! The record store itself never fails: a missing id is reported as `None`.
//! These errors describe the channel between a caller and the runtime that
//! owns the store.

use thiserror::Error;

/// Failures reaching the store through its runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The runtime has shut down and no longer accepts requests
    #[error("Store runtime is not running")]
    RuntimeStopped,

    /// The runtime dropped the request without replying
    #[error("Store runtime dropped the response channel")]
    ResponseDropped,

    /// No reply arrived within the configured timeout
    #[error("Store did not respond within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
}
