use async_trait::async_trait;
use contact_finder::error::{FetchError, FetchResult};
use contact_finder::models::Contact;
use contact_finder::repositories::ContactRepository;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Serves an in-memory contact list in insertion order, can be switched to
/// fail, and counts how often the list was fetched.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    failure: Arc<Mutex<Option<String>>>,
    fetch_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            fetch_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a repository preloaded with contacts.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        repo.set_contacts(contacts);
        repo
    }

    /// Replace the served contact list.
    pub fn set_contacts(&self, contacts: Vec<Contact>) {
        *self.contacts.lock().unwrap() = contacts;
    }

    /// Make every following fetch fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Let fetches succeed again.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of times the list was fetched.
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list_all(&self) -> FetchResult<Vec<Contact>> {
        *self.fetch_count.lock().unwrap() += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(FetchError::HttpError(message));
        }
        Ok(self.contacts.lock().unwrap().clone())
    }
}
