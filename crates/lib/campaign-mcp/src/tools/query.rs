use campaign_core::control::QueryType;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{CampaignMcp, helpers};

/// Parameters for retrieving email campaign data.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetEmailCampaignDataParams {
    /// Projection to apply: "all", "performance", "subjects", or "metrics".
    /// Defaults to "all".
    pub query_type: Option<String>,
    /// Campaign to narrow the report to. Matches a record name exactly,
    /// ignoring ASCII case.
    pub campaign_name: Option<String>,
}

#[tool_router(router = tool_router_query, vis = "pub")]
impl CampaignMcp {
    #[tool(
        description = "Retrieve email campaign data from the marketing record set. Returns campaign performance metrics, subject-line data, and audience information as a plain-text report for analysis."
    )]
    async fn get_email_campaign_data(
        &self,
        Parameters(params): Parameters<GetEmailCampaignDataParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = match params.query_type.as_deref() {
            None => QueryType::default(),
            Some(value) => value.parse().map_err(helpers::map_err)?,
        };
        let report = self
            .control()
            .get_campaign_data(query, params.campaign_name.as_deref())
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
