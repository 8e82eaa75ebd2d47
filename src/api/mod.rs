use anyhow::anyhow;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::CliConfig,
    shared_types::{ApiResponse, AppContext},
};

pub mod usage;

pub fn get_base_url(config: &CliConfig) -> anyhow::Result<Url> {
    Ok(Url::parse(config.get_base_url())?)
}

pub fn get_builder(
    ctx: &AppContext<'_>,
    method: reqwest::Method,
    url: Url,
) -> anyhow::Result<reqwest::RequestBuilder> {
    let client = reqwest::Client::new();

    debug!("{} {}", method, url);
    let mut builder = client
        .request(method, url)
        .header(ACCEPT, "application/json")
        .header(
            USER_AGENT,
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
        );

    if let Some(api_key) = &ctx.api_key {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", api_key));
    }

    Ok(builder)
}

/// same as [`get_builder`] but refuses to build a request without credentials
pub fn get_sudo_builder(
    ctx: &AppContext<'_>,
    method: reqwest::Method,
    url: Url,
) -> anyhow::Result<reqwest::RequestBuilder> {
    if ctx.api_key.is_none() {
        return Err(anyhow!("Please login first!"));
    }

    get_builder(ctx, method, url)
}

pub async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> anyhow::Result<T> {
    let status = res.status();
    if !status.is_success() {
        let res_text = res.text().await?;
        warn!("request failed with status {}", status);

        return match serde_json::from_str::<ApiResponse<serde_json::Value>>(&res_text) {
            Ok(ApiResponse {
                error: Some(api_err),
                ..
            }) => Err(anyhow!("({status}): {api_err}")),
            _ => Err(anyhow!("({status}): {res_text}")),
        };
    }

    let res_data: ApiResponse<T> = res.json().await?;
    match res_data.data {
        Some(data) => Ok(data),
        None => Err(anyhow!("'data' is not present!")),
    }
}
