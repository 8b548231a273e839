//! MCP tool handlers for the contact finder.
//!
//! Each tool corresponds to one control of the search form or results table,
//! using the rmcp SDK's tool_router pattern.

use crate::error::SessionError;
use crate::models::{province, CriteriaUpdate, CriterionField};
use crate::services::ContactSearchService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing the contact search form.
#[derive(Clone)]
pub struct ContactFinderServer {
    search_service: Arc<dyn ContactSearchService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactFinderServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-finder".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact finder - set search criteria, run a search over the contact directory, then page through, check and select results.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SetPageParams {
    /// 1-based page number; out-of-range values are clamped
    page: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SetAllCheckedParams {
    checked: bool,
}

/// A criterion as listed by `get_search_criteria`.
#[derive(Debug, Serialize)]
struct CriterionEntry<'a> {
    field: CriterionField,
    label: &'static str,
    value: &'a str,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn session_error(e: SessionError) -> McpError {
    match e {
        SessionError::UnknownContact(_) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        },
        SessionError::Fetch(_) => to_mcp_error(e),
    }
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let body = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

#[tool_router]
impl ContactFinderServer {
    /// Create a new contact finder server.
    pub fn new(search_service: Arc<dyn ContactSearchService>) -> Self {
        Self {
            search_service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Edit search criteria without searching. Fields: first_name, last_name, email, street, city (case-insensitive substring), phone, zip_code (substring), dob (exact YYYY-MM-DD), state (exact province code). Omitted fields are unchanged; an empty string clears a field."
    )]
    async fn update_search_criteria(
        &self,
        params: Parameters<CriteriaUpdate>,
    ) -> Result<CallToolResult, McpError> {
        let criteria = self.search_service.update_criteria(params.0).await;
        json_result(&criteria)
    }

    #[tool(description = "Reset every search criterion to empty")]
    async fn clear_search_criteria(&self) -> Result<CallToolResult, McpError> {
        let criteria = self.search_service.clear_criteria().await;
        json_result(&criteria)
    }

    #[tool(description = "Show the current search criteria with their form labels")]
    async fn get_search_criteria(&self) -> Result<CallToolResult, McpError> {
        let criteria = self.search_service.criteria().await;
        let entries: Vec<CriterionEntry<'_>> = CriterionField::ALL
            .into_iter()
            .map(|field| CriterionEntry {
                field,
                label: field.label(),
                value: criteria.get(field),
            })
            .collect();
        json_result(&entries)
    }

    #[tool(description = "List the province/state codes accepted by the state criterion")]
    async fn list_provinces(&self) -> Result<CallToolResult, McpError> {
        json_result(&province::selector_options())
    }

    #[tool(
        description = "Search the contact directory. Optional criteria fields are applied first. Returns page 1 of the matches; checked rows are cleared."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<CriteriaUpdate>,
    ) -> Result<CallToolResult, McpError> {
        self.search_service.update_criteria(params.0).await;
        let view = self.search_service.search().await.map_err(session_error)?;
        json_result(&view)
    }

    #[tool(description = "Show the current page of search results")]
    async fn get_results_page(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.page_view().await)
    }

    #[tool(description = "Go to a results page (clamped to the available pages)")]
    async fn set_page(&self, params: Parameters<SetPageParams>) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.set_page(params.0.page).await)
    }

    #[tool(description = "Go to the next results page")]
    async fn next_page(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.next_page().await)
    }

    #[tool(description = "Go to the previous results page")]
    async fn previous_page(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.previous_page().await)
    }

    #[tool(description = "Check or uncheck one result row by contact id")]
    async fn toggle_contact_checked(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.toggle_checked(&params.0.contact_id).await)
    }

    #[tool(
        description = "Header checkbox: check every result across all pages, or uncheck all"
    )]
    async fn set_all_contacts_checked(
        &self,
        params: Parameters<SetAllCheckedParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.set_all_checked(params.0.checked).await)
    }

    #[tool(description = "List the ids of all checked results")]
    async fn get_checked_contacts(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.checked_ids().await)
    }

    #[tool(description = "Select a result by contact id and show its details")]
    async fn select_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let detail = self
            .search_service
            .select_contact(&params.0.contact_id)
            .await
            .map_err(session_error)?;
        json_result(&detail)
    }

    #[tool(description = "Show the details of the selected contact, if any")]
    async fn get_selected_contact(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.search_service.selected_contact().await)
    }
}
