//! Contacts Service - Main entry point
//!
//! Serves the contact registry over the Model Context Protocol on stdio.

use anyhow::Result;
use contacts_service::repositories::{
    AddressRepository, ContactRepository, InMemoryStore, PhoneRepository,
};
use contacts_service::services::{ContactService, ContactServiceImpl};
use contacts_service::{Config, ContactsMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Logging goes to stderr only; stdout carries MCP traffic
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

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

    let store = match &config.data_file {
        Some(path) => Arc::new(InMemoryStore::open(path)?),
        None => {
            info!("No CONTACTS_DATA_FILE set, records will not outlive the process");
            Arc::new(InMemoryStore::new())
        }
    };

    // One store backs all three repositories
    let contact_repo = store.clone() as Arc<dyn ContactRepository>;
    let address_repo = store.clone() as Arc<dyn AddressRepository>;
    let phone_repo = store as Arc<dyn PhoneRepository>;

    let contact_service = Arc::new(ContactServiceImpl::new(
        contact_repo,
        address_repo,
        phone_repo,
        Arc::new(config.validation.clone()),
    )) as Arc<dyn ContactService>;

    let server = ContactsMcpServer::new(contact_service);
    info!("Contacts MCP Server initialized");

    info!("Starting MCP server with stdio transport");
    contacts_service::server::run_server(server).await?;

    info!("Contacts MCP Server shutdown complete");
    Ok(())
}
