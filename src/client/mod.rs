//! HTTP client for the static contact list.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The contact source is a single JSON array; no
//! query parameters are sent and all filtering happens client-side.

mod async_wrapper;
pub use async_wrapper::{AsyncContactSource, AsyncContactSourceImpl};

use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::Contact;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the contact list resource.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactSourceClient {
    /// Full URL of the contact list
    url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactSourceClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(
            config.contacts_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a client for an explicit URL (useful for testing).
    #[doc(hidden)]
    pub fn with_url(url: String) -> Self {
        Self::with_timeout(url, Duration::from_secs(10))
    }

    fn with_timeout(url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full contact list.
    pub fn fetch_contacts(&self) -> FetchResult<Vec<Contact>> {
        let timer = HttpTimer::new(self.metrics.clone());
        tracing::debug!("GET {}", self.url);

        let response = match self
            .agent
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(e) => {
                timer.complete_with_error();
                let err = Self::map_error(e);
                tracing::error!("GET {} - Error: {:?}", self.url, err);
                return Err(err);
            }
        };

        let body = match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                timer.complete_with_error();
                return Err(FetchError::HttpError(e.to_string()));
            }
        };
        timer.complete();

        let contacts: Vec<Contact> = serde_json::from_str(&body).map_err(FetchError::JsonError)?;

        tracing::debug!("GET {} - {} contacts", self.url, contacts.len());
        self.metrics.record_contacts_fetched(contacts.len());
        Ok(contacts)
    }

    /// Map a ureq error to a FetchError.
    fn map_error(error: ureq::Error) -> FetchError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 => FetchError::NotFound(message),
                    _ => FetchError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    FetchError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io && is_timeout(&transport) {
                    FetchError::Timeout
                } else {
                    FetchError::HttpError(transport.to_string())
                }
            }
        }
    }
}

/// Whether an I/O transport error came from the read/connect timeout.
fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map(|io| {
            matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            )
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = Config {
            contacts_url: "http://localhost/contacts.json".to_string(),
            ..Default::default()
        };
        let client = ContactSourceClient::new(&config);
        assert_eq!(client.url(), "http://localhost/contacts.json");
        assert_eq!(client.metrics().http_requests_total(), 0);
    }

    #[test]
    fn test_shared_metrics() {
        let metrics = Metrics::new();
        let client = ContactSourceClient::with_url("http://localhost".to_string())
            .with_metrics(metrics.clone());
        client.metrics().record_contacts_fetched(2);
        assert_eq!(metrics.contacts_fetched_total(), 2);
    }

    #[test]
    fn test_io_timeout_maps_to_timeout() {
        let err = ureq::Error::from(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "read timed out",
        ));
        assert!(matches!(
            ContactSourceClient::map_error(err),
            FetchError::Timeout
        ));
    }

    #[test]
    fn test_connection_reset_is_not_a_timeout() {
        let err = ureq::Error::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        match ContactSourceClient::map_error(err) {
            FetchError::HttpError(message) => assert!(message.contains("connection reset")),
            other => panic!("Expected HttpError, got: {:?}", other),
        }
    }
}
