use anyhow::anyhow;
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

use crate::{
    api::{self, usage::UsageQuery},
    config::{LogLevel, CONFIG},
    shared_types::{AppContext, CliSubCmd, CmdDateRange, UsageSummaryStatisticsResponse},
    utils::{local_auth::LocalAuthData, term, x2str},
};

#[derive(Parser)]
pub struct UsageCommand {
    #[arg(long)]
    /// account to fetch usage for, defaults to the configured account id
    account_id: Option<String>,

    #[command(flatten)]
    date_range: CmdDateRange,

    #[arg(long)]
    /// print the raw summary as json
    json: bool,
}

fn render_section<'a, I>(title: &str, fields: Option<I>) -> String
where
    I: Iterator<Item = (&'a String, &'a Value)>,
{
    let fields = match fields {
        Some(fields) => fields,
        None => return format!("{}: {}", title.bold(), "no data".dimmed()),
    };

    let cells: Vec<String> = fields
        .flat_map(|(key, value)| [x2str::key2label(key), x2str::value2str(value)])
        .collect();
    if cells.is_empty() {
        return format!("{}: {}", title.bold(), "no data".dimmed());
    }

    format!(
        "{}\n{}",
        title.bold().underline(),
        term::get_formatted_cols(cells, 2)
    )
}

pub fn render_summary(summary: &UsageSummaryStatisticsResponse) -> String {
    let clusters = render_section(
        "clusters",
        summary.cluster_data.as_ref().map(|data| data.iter()),
    );
    let infra = render_section(
        "infrastructure",
        summary.infrastructure_data.as_ref().map(|data| data.iter()),
    );

    format!("{}\n\n{}", clusters, infra)
}

impl CliSubCmd for UsageCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let config = CONFIG
            .read()
            .map_err(|_| anyhow!("config lock poisoned"))?
            .clone();
        let ctx = AppContext {
            config: &config,
            api_key: LocalAuthData::get()?,
        };

        let account_id = match self.account_id.as_deref().or(config.get_account_id()) {
            Some(account_id) => account_id.to_string(),
            None => {
                return Err(anyhow!(
                    "no account id! pass --account-id or run `config --set-account-id`"
                ))
            }
        };
        if self.date_range.is_unset() {
            debug!("no date range given, server picks the default window");
        }

        let query = UsageQuery {
            account_id,
            start_date: self.date_range.start_date,
            end_date: self.date_range.end_date,
        };

        let spinner = match config.get_log_level() {
            LogLevel::Stfu => None,
            _ => Some(term::get_spinner("fetching usage summary...")),
        };
        let summary = api::usage::get_usage_summary_statistics(&ctx, &query).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let summary = summary?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", render_summary(&summary));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_missing_sections() {
        colored::control::set_override(false);

        let out = render_summary(&UsageSummaryStatisticsResponse::default());
        assert_eq!(out, "clusters: no data\n\ninfrastructure: no data");
    }

    #[test]
    fn renders_present_sections() {
        colored::control::set_override(false);

        let summary: UsageSummaryStatisticsResponse = serde_json::from_value(json!({
            "cluster_data": { "num_clusters": 2, "total_vcpus": 8 }
        }))
        .unwrap();

        let out = render_summary(&summary);
        assert_eq!(
            out,
            "clusters\nnum clusters  2\ntotal vcpus   8\n\ninfrastructure: no data"
        );
    }
}
