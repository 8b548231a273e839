//! Contact search service layer.
//!
//! Owns the current search criteria and the results session, and runs the
//! fetch → filter → reset sequence when a search is triggered.

use crate::error::{SessionError, SessionResult};
use crate::metrics::Metrics;
use crate::models::{ContactDetail, CriteriaUpdate, SearchCriteria};
use crate::repositories::ContactRepository;
use crate::session::{ContactSearchSession, PageView};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Search service trait for the contact finder form.
#[async_trait]
pub trait ContactSearchService: Send + Sync {
    /// Current criteria as entered in the form.
    async fn criteria(&self) -> SearchCriteria;

    /// Apply edits to individual criteria without searching.
    async fn update_criteria(&self, update: CriteriaUpdate) -> SearchCriteria;

    /// Reset every criterion to empty.
    async fn clear_criteria(&self) -> SearchCriteria;

    /// Fetch the contact list, filter it with the criteria current once the
    /// fetch completes and show page 1 of the matches.
    ///
    /// On a fetch failure the error is recorded on the session and returned;
    /// the previous results are kept.
    async fn search(&self) -> SessionResult<PageView>;

    /// The current page of results.
    async fn page_view(&self) -> PageView;

    /// Move to a page (clamped to the valid range).
    async fn set_page(&self, page: usize) -> PageView;

    async fn next_page(&self) -> PageView;

    async fn previous_page(&self) -> PageView;

    /// Flip the checkbox of one row.
    async fn toggle_checked(&self, contact_id: &str) -> PageView;

    /// Check every result, or clear all checkboxes.
    async fn set_all_checked(&self, checked: bool) -> PageView;

    /// Ids of the checked rows.
    async fn checked_ids(&self) -> Vec<String>;

    /// Show a result in the detail panel.
    async fn select_contact(&self, contact_id: &str) -> SessionResult<ContactDetail>;

    /// The detail panel, if a contact has been selected.
    async fn selected_contact(&self) -> Option<ContactDetail>;
}

/// Criteria and results, guarded together so applying a search result is a
/// single step.
#[derive(Debug, Default)]
struct SearchState {
    criteria: SearchCriteria,
    session: ContactSearchSession,
}

/// Default implementation of ContactSearchService.
pub struct ContactSearchServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    state: Arc<RwLock<SearchState>>,
    metrics: Metrics,
}

impl ContactSearchServiceImpl {
    /// Create a new search service.
    ///
    /// # Arguments
    /// * `contact_repo` - Source of the full contact list
    /// * `page_size` - Contacts shown per results page
    pub fn new(contact_repo: Arc<dyn ContactRepository>, page_size: usize) -> Self {
        Self {
            contact_repo,
            state: Arc::new(RwLock::new(SearchState {
                criteria: SearchCriteria::default(),
                session: ContactSearchSession::new(page_size),
            })),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[async_trait]
impl ContactSearchService for ContactSearchServiceImpl {
    async fn criteria(&self) -> SearchCriteria {
        self.state.read().await.criteria.clone()
    }

    async fn update_criteria(&self, update: CriteriaUpdate) -> SearchCriteria {
        let mut state = self.state.write().await;
        state.criteria.apply(update);
        state.criteria.clone()
    }

    async fn clear_criteria(&self) -> SearchCriteria {
        let mut state = self.state.write().await;
        state.criteria = SearchCriteria::default();
        state.criteria.clone()
    }

    async fn search(&self) -> SessionResult<PageView> {
        // fetched without holding the lock; the form stays readable meanwhile
        let fetched = self.contact_repo.list_all().await;
        let mut state = self.state.write().await;

        let contacts = match fetched {
            Ok(contacts) => contacts,
            Err(e) => {
                tracing::error!("Failed to load contacts: {}", e);
                let err = SessionError::from(e);
                state.session.record_error(err.to_string());
                return Err(err);
            }
        };

        let SearchState { criteria, session } = &mut *state;
        let matched = session.run_search(criteria, &contacts).len();
        self.metrics.record_search(matched);

        tracing::info!(
            criteria = criteria.populated().count(),
            fetched = contacts.len(),
            matched,
            "Search completed"
        );

        Ok(session.page_view())
    }

    async fn page_view(&self) -> PageView {
        self.state.read().await.session.page_view()
    }

    async fn set_page(&self, page: usize) -> PageView {
        let mut state = self.state.write().await;
        state.session.set_page(page);
        tracing::debug!(page = state.session.page(), "Page changed");
        state.session.page_view()
    }

    async fn next_page(&self) -> PageView {
        let mut state = self.state.write().await;
        state.session.next_page();
        state.session.page_view()
    }

    async fn previous_page(&self) -> PageView {
        let mut state = self.state.write().await;
        state.session.previous_page();
        state.session.page_view()
    }

    async fn toggle_checked(&self, contact_id: &str) -> PageView {
        let mut state = self.state.write().await;
        let now_checked = state.session.toggle_checked(contact_id);
        tracing::debug!(contact_id, checked = now_checked, "Checkbox toggled");
        state.session.page_view()
    }

    async fn set_all_checked(&self, checked: bool) -> PageView {
        let mut state = self.state.write().await;
        state.session.set_all_checked(checked);
        tracing::debug!(
            checked,
            count = state.session.checked().len(),
            "Header checkbox changed"
        );
        state.session.page_view()
    }

    async fn checked_ids(&self) -> Vec<String> {
        self.state.read().await.session.checked().ids()
    }

    async fn select_contact(&self, contact_id: &str) -> SessionResult<ContactDetail> {
        let mut state = self.state.write().await;
        let contact = state
            .session
            .find_result(contact_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownContact(contact_id.to_string()))?;

        state.session.select_detail(&contact);
        tracing::debug!(contact_id, "Detail selection changed");
        Ok(ContactDetail::from(&contact))
    }

    async fn selected_contact(&self) -> Option<ContactDetail> {
        self.state
            .read()
            .await
            .session
            .detail()
            .map(ContactDetail::from)
    }
}
