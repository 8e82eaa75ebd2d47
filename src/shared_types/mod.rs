use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::config::CliConfig;

mod cmd;
mod models;

pub use cmd::*;
pub use models::*;

pub trait CliSubCmd {
    async fn run(&self) -> anyhow::Result<()>;
}

pub struct AppContext<'a> {
    pub config: &'a CliConfig,
    pub api_key: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.detail, self.status) {
            (Some(detail), Some(status)) => write!(f, "{} ({})", detail, status),
            (Some(detail), None) => write!(f, "{}", detail),
            (None, Some(status)) => write!(f, "({})", status),
            (None, None) => write!(f, "unknown api error"),
        }
    }
}
