//! MCP server runner for campaign-mcp.

use campaign_core::control::CampaignControlPlane;
use rmcp::serve_server;
use rmcp::transport::io::stdio;

use crate::CampaignMcp;

/// Serves the MCP server over stdio until the peer closes the stream.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    control: CampaignControlPlane,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = CampaignMcp::new(control);
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}
