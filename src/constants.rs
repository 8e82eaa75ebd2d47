pub const API_KEY_KEYRING_TAG: &str = "api-key";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_BASE_URL: &str = "https://cloud.yugabyte.com";

pub const CONFIG_FILEPATH: &str = "~/.yb-usage/config.toml";

pub const ENV_API_KEY: &str = "YB_USAGE_API_KEY";
pub const ENV_BASE_URL: &str = "YB_USAGE_BASE_URL";
pub const ENV_ACCOUNT_ID: &str = "YB_USAGE_ACCOUNT_ID";
