//! Plain-text report rendering.
//!
//! Reports are consumed by a language model rather than parsed, so the
//! output is prose-shaped text. Field order within each block is fixed and
//! rates are printed with two decimals, keeping repeated queries over an
//! unchanged record set byte-identical and diffable in tests.

use std::fmt::Write as _;

use crate::control::QueryType;
use crate::models::Campaign;

/// Renders the projection of `campaigns` selected by `query` as one
/// report: a header line followed by one block per campaign.
#[must_use]
pub fn render_report(campaigns: &[Campaign], query: QueryType) -> String {
    if campaigns.is_empty() {
        return "No campaign records available.".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Email campaign data ({} campaign{}, view: {})",
        campaigns.len(),
        if campaigns.len() == 1 { "" } else { "s" },
        query.as_str()
    );
    for campaign in campaigns {
        out.push('\n');
        match query {
            QueryType::All => render_all(&mut out, campaign),
            QueryType::Performance => render_performance(&mut out, campaign),
            QueryType::Subjects => render_subjects(&mut out, campaign),
            QueryType::Metrics => render_metrics(&mut out, campaign),
        }
    }
    out
}

fn render_all(out: &mut String, campaign: &Campaign) {
    let _ = writeln!(out, "Campaign: {}", campaign.name);
    let _ = writeln!(out, "Sent: {}", campaign.sent_at.format("%Y-%m-%d"));
    let _ = writeln!(out, "Subject: {}", campaign.subject.text);
    subject_metric_lines(out, campaign);
    let _ = writeln!(out, "Audience: {}", campaign.audience.description);
    let _ = writeln!(out, "  Audience size: {}", campaign.audience.size);
    if !campaign.audience.segments.is_empty() {
        let _ = writeln!(out, "  Segments: {}", campaign.audience.segments.join(", "));
    }
    let _ = writeln!(out, "Performance:");
    campaign_metric_lines(out, campaign);
}

fn render_performance(out: &mut String, campaign: &Campaign) {
    let metrics = &campaign.metrics;
    let _ = writeln!(out, "Campaign: {}", campaign.name);
    let _ = writeln!(out, "  Open rate: {:.2}", metrics.open_rate);
    let _ = writeln!(out, "  Conversion rate: {:.2}", metrics.conversion_rate);
    let _ = writeln!(out, "  Revenue: {:.2}", metrics.revenue);
}

fn render_subjects(out: &mut String, campaign: &Campaign) {
    let _ = writeln!(out, "Campaign: {}", campaign.name);
    let _ = writeln!(out, "  Subject: {}", campaign.subject.text);
    subject_metric_lines(out, campaign);
}

fn render_metrics(out: &mut String, campaign: &Campaign) {
    let _ = writeln!(out, "Campaign: {}", campaign.name);
    campaign_metric_lines(out, campaign);
    subject_metric_lines(out, campaign);
    let _ = writeln!(out, "  Audience size: {}", campaign.audience.size);
}

fn campaign_metric_lines(out: &mut String, campaign: &Campaign) {
    let metrics = &campaign.metrics;
    let _ = writeln!(out, "  Emails sent: {}", metrics.emails_sent);
    let _ = writeln!(out, "  Open rate: {:.2}", metrics.open_rate);
    let _ = writeln!(out, "  Click rate: {:.2}", metrics.click_rate);
    let _ = writeln!(out, "  Conversion rate: {:.2}", metrics.conversion_rate);
    let _ = writeln!(out, "  Unsubscribe rate: {:.2}", metrics.unsubscribe_rate);
    let _ = writeln!(out, "  Revenue: {:.2}", metrics.revenue);
}

fn subject_metric_lines(out: &mut String, campaign: &Campaign) {
    let subject = &campaign.subject;
    let _ = writeln!(out, "  Subject open rate: {:.2}", subject.open_rate);
    let _ = writeln!(
        out,
        "  Subject click-to-open rate: {:.2}",
        subject.click_to_open_rate
    );
}
