//! MCP server for the contact registry.
//!
//! Exposes the contact service to MCP clients as one tool per operation.

pub mod handlers;

pub use handlers::ContactsMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contacts MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects, or with an error if the server fails to start.
pub async fn run_server(server: ContactsMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
