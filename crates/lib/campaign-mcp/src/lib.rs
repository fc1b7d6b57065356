//! MCP server implementation for campaign-mcp.
//!
//! This crate wires the campaign control plane into an rmcp tool handler
//! and exposes the single MCP-facing query operation.

mod helpers;
mod tools;
pub mod server;

use campaign_core::control::CampaignControlPlane;
use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool_handler,
};
use rmcp::model::{ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r#"campaign-mcp exposes one tool for analyzing email marketing data.

Tool:
- `get_email_campaign_data(query_type, campaign_name)` returns a plain-text
  report over the campaign record set.

Arguments:
- `query_type` selects the projection (default "all"):
  - "all": every field of each campaign.
  - "performance": open rate, conversion rate, and revenue.
  - "subjects": subject lines with their engagement sub-metrics.
  - "metrics": the full numeric metric set, audience free text excluded.
- `campaign_name` optionally narrows the report to one campaign. The match
  is exact but ignores ASCII case; an unknown name is an error, not an
  empty report.

Field order within a report is fixed, so repeated calls over unchanged data
are diffable."#;

/// MCP server wrapper around the campaign control plane and tool router.
#[derive(Clone)]
pub struct CampaignMcp {
    tool_router: ToolRouter<Self>,
    control: CampaignControlPlane,
}

impl CampaignMcp {
    /// Creates a new server over a control plane.
    #[must_use]
    pub fn new(control: CampaignControlPlane) -> Self {
        Self {
            tool_router: Self::tool_router_query(),
            control,
        }
    }

    pub(crate) const fn control(&self) -> &CampaignControlPlane {
        &self.control
    }
}

#[tool_handler]
impl ServerHandler for CampaignMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
