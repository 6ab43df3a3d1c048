//! DTOs for per-link earnings analytics.

use crate::application::services::LinkReport;
use serde::Serialize;

/// Analytics entry for one link in the stats listing.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub url: String,
    pub total_clicks: i64,
    pub total_earnings: f64,
    pub monthly_breakdown: Vec<MonthlyBreakdownItem>,
}

/// One calendar-month earnings bucket, month formatted `"MM/YYYY"`.
#[derive(Debug, Serialize)]
pub struct MonthlyBreakdownItem {
    pub month: String,
    pub earnings: f64,
}

impl From<LinkReport> for LinkStatsResponse {
    fn from(report: LinkReport) -> Self {
        Self {
            url: report.url,
            total_clicks: report.total_clicks,
            total_earnings: report.total_earnings,
            monthly_breakdown: report
                .monthly_breakdown
                .into_iter()
                .map(|bucket| MonthlyBreakdownItem {
                    month: format!("{:02}/{}", bucket.month, bucket.year),
                    earnings: bucket.earnings,
                })
                .collect(),
        }
    }
}
