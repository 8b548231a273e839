//! Async wrapper around the synchronous ContactSourceClient.
//!
//! Runs the blocking HTTP fetch on tokio's blocking thread pool so the async
//! runtime serving MCP requests is never stalled.

use crate::client::ContactSourceClient;
use crate::error::{FetchError, FetchResult};
use crate::models::Contact;
use async_trait::async_trait;
use std::sync::Arc;

/// Async access to the contact list source.
#[async_trait]
pub trait AsyncContactSource: Send + Sync {
    async fn fetch_contacts(&self) -> FetchResult<Vec<Contact>>;
}

/// Async wrapper around synchronous ContactSourceClient.
#[derive(Clone)]
pub struct AsyncContactSourceImpl {
    client: Arc<ContactSourceClient>,
}

impl AsyncContactSourceImpl {
    pub fn new(client: ContactSourceClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncContactSource for AsyncContactSourceImpl {
    async fn fetch_contacts(&self) -> FetchResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.fetch_contacts())
            .await
            .map_err(|e| FetchError::HttpError(format!("Task join error: {}", e)))?
    }
}
