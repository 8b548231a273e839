//! MCP server for the contact finder.
//!
//! This module exposes the search form and results table to AI assistants
//! through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactFinderServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact finder with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: ContactFinderServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
