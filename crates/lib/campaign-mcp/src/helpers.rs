use std::borrow::Cow;

use campaign_core::control::ControlError;
use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Maps control-plane failures onto MCP error codes. Every variant is a
/// recoverable error result for the caller, never a transport fault.
pub fn map_err(err: ControlError) -> ErrorData {
    let code = match &err {
        ControlError::InvalidQueryType(_) => ErrorCode::INVALID_PARAMS,
        ControlError::CampaignNotFound(_) => ErrorCode::RESOURCE_NOT_FOUND,
        ControlError::Store(_) => ErrorCode::INTERNAL_ERROR,
    };
    mcp_err(code, err.to_string())
}
