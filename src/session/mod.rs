//! Search session state: results, checkbox selection, detail selection and paging.
//!
//! `ContactSearchSession` is the single owner of everything the results table
//! renders. Each method is one transition triggered by one user action; none
//! of them can fail, and out-of-range pages are clamped rather than rejected.

pub mod pagination;
pub mod selection;

pub use pagination::{PageSummary, Pagination, DEFAULT_PAGE_SIZE};
pub use selection::{CheckedSet, HeaderCheckState};

use crate::matching::filter_contacts;
use crate::models::{Contact, ContactDetail, SearchCriteria};
use serde::Serialize;

/// State behind the contact results table and detail panel.
#[derive(Debug, Clone, Default)]
pub struct ContactSearchSession {
    results: Vec<Contact>,
    checked: CheckedSet,
    detail: Option<Contact>,
    pagination: Pagination,
    last_error: Option<String>,
}

impl ContactSearchSession {
    /// Create an empty session with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Default::default()
        }
    }

    /// Filter `contacts` and make the matches the new result list.
    ///
    /// Returns to page 1 and clears the checked set. The detail selection
    /// is a snapshot and is left alone.
    pub fn run_search(&mut self, criteria: &SearchCriteria, contacts: &[Contact]) -> &[Contact] {
        self.results = filter_contacts(criteria, contacts);
        self.pagination.reset();
        self.checked.clear();
        self.last_error = None;

        tracing::debug!(
            fetched = contacts.len(),
            matched = self.results.len(),
            "Result list replaced"
        );
        &self.results
    }

    /// Record a failed search; the previous results stay visible.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn results(&self) -> &[Contact] {
        &self.results
    }

    /// Find a contact of the current result list by id.
    pub fn find_result(&self, id: &str) -> Option<&Contact> {
        self.results.iter().find(|c| c.id == id)
    }

    // ========================= Checkbox selection =========================

    /// Flip the checkbox of one row. Returns whether it is now checked.
    pub fn toggle_checked(&mut self, id: &str) -> bool {
        self.checked.toggle(id)
    }

    /// Header checkbox: check every result (all pages) or clear the set.
    pub fn set_all_checked(&mut self, checked: bool) {
        if checked {
            self.checked
                .check_all(self.results.iter().map(|c| c.id.as_str()));
        } else {
            self.checked.clear();
        }
    }

    pub fn checked(&self) -> &CheckedSet {
        &self.checked
    }

    pub fn header_checkbox(&self) -> HeaderCheckState {
        self.checked.header_state(self.results.len())
    }

    // ========================= Detail selection =========================

    /// Show `contact` in the detail panel. The panel keeps this copy even if
    /// the result list changes later.
    pub fn select_detail(&mut self, contact: &Contact) {
        self.detail = Some(contact.clone());
    }

    pub fn detail(&self) -> Option<&Contact> {
        self.detail.as_ref()
    }

    // ========================= Pagination =========================

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.results.len())
    }

    /// Move to page `n`, clamped into the valid range.
    pub fn set_page(&mut self, n: usize) {
        self.pagination.set_page(n, self.results.len());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page().saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next(self.results.len())
    }

    /// Contacts on the current page.
    pub fn visible_slice(&self) -> &[Contact] {
        &self.results[self.pagination.window(self.results.len())]
    }

    pub fn summary(&self) -> Option<PageSummary> {
        self.pagination.summary(self.results.len())
    }

    /// Everything the results table shows for the current page.
    pub fn page_view(&self) -> PageView {
        let rows = self
            .visible_slice()
            .iter()
            .map(|contact| ResultRow {
                checked: self.checked.contains(&contact.id),
                name: contact.full_name(),
                contact: contact.clone(),
            })
            .collect();

        PageView {
            rows,
            page: self.page(),
            total_pages: self.total_pages(),
            page_size: self.page_size(),
            result_count: self.results.len(),
            summary: self.summary().map(|s| s.to_string()),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            header_checkbox: self.header_checkbox(),
            checked_count: self.checked.len(),
            selected: self.detail.as_ref().map(ContactDetail::from),
            error: self.last_error.clone(),
        }
    }
}

/// One row of the results table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResultRow {
    pub checked: bool,
    pub name: String,
    pub contact: Contact,
}

/// Render-ready snapshot of the results table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<ResultRow>,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub result_count: usize,
    pub summary: Option<String>,
    pub has_previous: bool,
    pub has_next: bool,
    pub header_checkbox: HeaderCheckState,
    pub checked_count: usize,
    pub selected: Option<ContactDetail>,
    pub error: Option<String>,
}
