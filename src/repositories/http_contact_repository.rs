use crate::client::AsyncContactSource;
use crate::error::FetchResult;
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the static JSON contact list.
///
/// Every call performs a fresh fetch; the list is never cached, so each
/// search sees the resource as it is at that moment.
pub struct HttpContactRepository {
    source: Arc<dyn AsyncContactSource>,
}

impl HttpContactRepository {
    /// Create a new HttpContactRepository with the given source.
    pub fn new(source: Arc<dyn AsyncContactSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl ContactRepository for HttpContactRepository {
    async fn list_all(&self) -> FetchResult<Vec<Contact>> {
        self.source.fetch_contacts().await
    }
}
