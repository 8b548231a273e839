//! Contact Finder - search, page through and select contacts from a static directory.
//!
//! The full contact list is fetched from a JSON resource, filtered in memory
//! against the search form's criteria and presented as a paginated, checkable
//! result table with a detail panel. The form is exposed as MCP tools.
//!
//! # Architecture
//!
//! - **models**: Contact record, search criteria and province selector
//! - **matching**: Criteria filter over the contact list
//! - **session**: Results, checkbox selection, detail selection and paging
//! - **client**: HTTP client for the contact list resource
//! - **repositories**: Contact source abstraction
//! - **services**: Search orchestration behind the MCP tools
//! - **server**: MCP protocol server
//! - **config**, **error**, **metrics**: Ambient configuration, error types and counters

pub mod client;
pub mod config;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod session;

pub use client::ContactSourceClient;
pub use config::Config;
pub use error::{ConfigError, FetchError, SessionError};
pub use matching::{filter_contacts, matches_criteria, FieldRule};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, ContactDetail, CriteriaUpdate, CriterionField, Province, SearchCriteria};
pub use server::ContactFinderServer;
pub use services::{ContactSearchService, ContactSearchServiceImpl};
pub use session::{
    CheckedSet, ContactSearchSession, HeaderCheckState, PageSummary, PageView, Pagination,
};
