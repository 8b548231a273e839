//! Application service layer.
//!
//! Services contain the business logic behind the MCP handlers and
//! coordinate the contact repository with the search session. They provide
//! a clean boundary between the MCP surface and the data access layer.

mod search_service;

pub use search_service::{ContactSearchService, ContactSearchServiceImpl};
