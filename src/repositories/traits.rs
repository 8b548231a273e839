use crate::error::FetchResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for the contact directory.
///
/// Provides abstraction over where the contact list comes from,
/// enabling different implementations (HTTP source, in-memory mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve the full, unfiltered contact list.
    async fn list_all(&self) -> FetchResult<Vec<Contact>>;
}
