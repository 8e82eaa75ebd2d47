use anyhow::anyhow;
use chrono::NaiveDate;
use tracing::debug;

use crate::{
    constants,
    shared_types::{AppContext, UsageSummaryStatisticsResponse},
};

use super::{get_sudo_builder, parse_response};

#[derive(Debug, Clone, PartialEq)]
pub struct UsageQuery {
    pub account_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UsageQuery {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(anyhow!("account id cannot be empty!"));
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(anyhow!(
                    "start date ({start}) must not be after end date ({end})"
                ));
            }
        }

        Ok(())
    }
}

pub async fn get_usage_summary_statistics(
    ctx: &AppContext<'_>,
    query: &UsageQuery,
) -> anyhow::Result<UsageSummaryStatisticsResponse> {
    query.validate()?;

    let mut url = super::get_base_url(ctx.config)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("base url cannot be used as a base!"))?
        .pop_if_empty()
        .extend([
            "api",
            "public",
            "v1",
            "accounts",
            query.account_id.trim(),
            "usage",
            "summary-statistics",
        ]);
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(start) = query.start_date {
            pairs.append_pair("start_date", &start.format(constants::DATE_FORMAT).to_string());
        }
        if let Some(end) = query.end_date {
            pairs.append_pair("end_date", &end.format(constants::DATE_FORMAT).to_string());
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }

    let res = get_sudo_builder(ctx, reqwest::Method::GET, url)?
        .send()
        .await?;

    let summary: UsageSummaryStatisticsResponse = parse_response(res).await?;
    debug!(
        "usage summary received, cluster_data: {}, infrastructure_data: {}",
        summary.cluster_data.is_some(),
        summary.infrastructure_data.is_some()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(start: Option<&str>, end: Option<&str>) -> UsageQuery {
        UsageQuery {
            account_id: "acc-1".to_string(),
            start_date: start.map(|s| s.parse().unwrap()),
            end_date: end.map(|s| s.parse().unwrap()),
        }
    }

    #[test]
    fn accepts_open_and_closed_ranges() {
        assert!(query(None, None).validate().is_ok());
        assert!(query(Some("2024-01-01"), None).validate().is_ok());
        assert!(query(None, Some("2024-01-31")).validate().is_ok());
        assert!(query(Some("2024-01-01"), Some("2024-01-01")).validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let err = query(Some("2024-02-01"), Some("2024-01-01"))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("must not be after"));
    }

    #[test]
    fn rejects_blank_account() {
        let mut q = query(None, None);
        q.account_id = "   ".to_string();
        assert!(q.validate().is_err());
    }
}
