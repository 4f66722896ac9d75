//! Serialized request loop for the record store.
//!
//! A single [`Runtime`] task owns the [`RecordStore`] and answers
//! [`ApiRequest`]s one at a time. Callers talk to it through cloneable
//! [`StoreHandle`]s.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use folio_core::config::FolioConfig;
use folio_core::RecordStore;

mod api_request;
mod handle;
mod runtime;

pub use api_request::{ApiRequest, ResponseSender};
pub use handle::{Result, StoreHandle};
pub use runtime::Runtime;

/// Moves `store` into a new runtime task.
///
/// The task ends once every clone of the returned handle is dropped; its
/// output is the number of requests it handled.
///
/// Must be called from within a tokio runtime.
pub fn spawn(store: RecordStore, config: &FolioConfig) -> (StoreHandle, JoinHandle<u64>) {
    let (api_tx, api_rx) = mpsc::channel(config.channel_capacity.max(1));
    let runtime = Runtime::new(store, api_rx);
    let task = tokio::spawn(runtime.run());
    let handle = StoreHandle::new(
        api_tx,
        Duration::from_millis(config.response_timeout_ms),
    );
    (handle, task)
}
