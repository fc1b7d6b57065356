use std::str::FromStr;

use super::{CampaignControlPlane, ControlError};
use crate::models::Campaign;
use crate::render;

/// The query selector controlling which fields are projected into the
/// report. Selectors are the lowercase strings `all`, `performance`,
/// `subjects`, and `metrics`; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryType {
    #[default]
    All,
    Performance,
    Subjects,
    Metrics,
}

impl QueryType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Performance => "performance",
            Self::Subjects => "subjects",
            Self::Metrics => "metrics",
        }
    }
}

impl FromStr for QueryType {
    type Err = ControlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "performance" => Ok(Self::Performance),
            "subjects" => Ok(Self::Subjects),
            "metrics" => Ok(Self::Metrics),
            other => Err(ControlError::InvalidQueryType(other.to_string())),
        }
    }
}

impl CampaignControlPlane {
    /// Loads the record set, applies the optional campaign-name filter, and
    /// renders the projection selected by `query`.
    ///
    /// Name matching is exact but ASCII case-insensitive, so `"spring sale"`
    /// finds `"Spring Sale"`.
    ///
    /// # Errors
    /// Returns `ControlError::CampaignNotFound` when a filter matches no
    /// record and `ControlError::Store` when the backing file is missing or
    /// malformed.
    pub async fn get_campaign_data(
        &self,
        query: QueryType,
        campaign_name: Option<&str>,
    ) -> Result<String, ControlError> {
        let dataset = self.store().load().await?;
        let selected: Vec<Campaign> = match campaign_name {
            Some(name) => {
                let matched: Vec<Campaign> = dataset
                    .campaigns
                    .into_iter()
                    .filter(|campaign| campaign.name.eq_ignore_ascii_case(name))
                    .collect();
                if matched.is_empty() {
                    return Err(ControlError::CampaignNotFound(name.to_string()));
                }
                matched
            }
            None => dataset.campaigns,
        };
        tracing::debug!(
            query = query.as_str(),
            campaigns = selected.len(),
            "rendering campaign report"
        );
        Ok(render::render_report(&selected, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_selectors_parse() {
        assert_eq!("all".parse::<QueryType>().ok(), Some(QueryType::All));
        assert_eq!(
            "performance".parse::<QueryType>().ok(),
            Some(QueryType::Performance)
        );
        assert_eq!(
            "subjects".parse::<QueryType>().ok(),
            Some(QueryType::Subjects)
        );
        assert_eq!(
            "metrics".parse::<QueryType>().ok(),
            Some(QueryType::Metrics)
        );
    }

    #[test]
    fn unrecognized_selector_is_rejected() {
        let err = "averages".parse::<QueryType>().expect_err("should reject");
        assert!(matches!(err, ControlError::InvalidQueryType(value) if value == "averages"));
    }

    #[test]
    fn selector_match_is_case_sensitive() {
        assert!("All".parse::<QueryType>().is_err());
    }
}
