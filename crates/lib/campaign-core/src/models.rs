use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The on-disk record set. One document holds every campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignDataset {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

/// A single email marketing send with its performance data.
///
/// `name` is unique within a dataset and is the key used for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub name: String,
    pub sent_at: DateTime<Utc>,
    pub metrics: CampaignMetrics,
    pub subject: SubjectLine,
    pub audience: Audience,
}

/// Campaign-level performance counters and rates.
///
/// Rates are fractions in `[0, 1]`, revenue is in the account currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignMetrics {
    pub emails_sent: u64,
    pub open_rate: f64,
    pub click_rate: f64,
    pub conversion_rate: f64,
    pub unsubscribe_rate: f64,
    pub revenue: f64,
}

/// Subject-line text with its own engagement sub-metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectLine {
    pub text: String,
    pub open_rate: f64,
    pub click_to_open_rate: f64,
}

/// Who the campaign was sent to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Audience {
    pub size: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<String>,
    pub description: String,
}
