//! Contact Finder - Main entry point
//!
//! Serves the contact search form as a Model Context Protocol (MCP) server
//! over stdio.

use anyhow::Result;
use contact_finder::client::{AsyncContactSource, AsyncContactSourceImpl};
use contact_finder::repositories::{ContactRepository, HttpContactRepository};
use contact_finder::services::ContactSearchService;
use contact_finder::{Config, ContactFinderServer, ContactSearchServiceImpl, ContactSourceClient, Metrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // stderr only; stdout carries MCP frames
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting Contact Finder with contact list: {}", config.contacts_url);

    let metrics = Metrics::new();

    let client = ContactSourceClient::new(&config).with_metrics(metrics.clone());
    let source = Arc::new(AsyncContactSourceImpl::new(client)) as Arc<dyn AsyncContactSource>;
    let contact_repo = Arc::new(HttpContactRepository::new(source)) as Arc<dyn ContactRepository>;

    let search_service = Arc::new(
        ContactSearchServiceImpl::new(contact_repo, config.page_size).with_metrics(metrics.clone()),
    ) as Arc<dyn ContactSearchService>;

    let server = ContactFinderServer::new(search_service);
    info!("Page size: {}", config.page_size);

    info!("Starting MCP server with stdio transport");
    contact_finder::server::run_server(server).await?;

    info!("Contact Finder shutdown complete: {}", metrics.summary());
    Ok(())
}
