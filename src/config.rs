use clap::ValueEnum;
use colored::Colorize;
use std::{
    env, fs, io, path,
    sync::{LazyLock, RwLock},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{constants, utils::paths::expand_tilde};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Chirpy,
    Normal,
    Stfu,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Chirpy
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    #[serde(skip_serializing_if = "is_default_base_url")]
    base_url: String,

    #[serde(skip_serializing_if = "is_default")]
    account_id: Option<String>,

    #[serde(skip_serializing_if = "is_default")]
    log_level: LogLevel,

    /// env overrides, never written back to the config file
    #[serde(skip)]
    env_base_url: Option<String>,
    #[serde(skip)]
    env_account_id: Option<String>,
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    value == &T::default()
}

fn is_default_base_url(value: &String) -> bool {
    value == constants::DEFAULT_BASE_URL
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            account_id: None,
            log_level: LogLevel::Chirpy,
            env_base_url: None,
            env_account_id: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// trimmed value of `key`, blank counts as unset
pub(crate) fn non_empty_env(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

impl CliConfig {
    pub fn get_config_filepath() -> path::PathBuf {
        expand_tilde(constants::CONFIG_FILEPATH)
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("config file is not valid toml")
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_account_id(mut self, account_id: &str) -> Self {
        self.account_id = Some(account_id.to_string());
        self
    }

    fn with_env_overrides(mut self) -> Self {
        self.env_base_url = non_empty_env(constants::ENV_BASE_URL);
        self.env_account_id = non_empty_env(constants::ENV_ACCOUNT_ID);
        self
    }

    /// reads the config file, writing a default one if there is none yet
    pub fn load() -> anyhow::Result<Self> {
        let config_filepath = CliConfig::get_config_filepath();
        let config = match fs::read_to_string(&config_filepath) {
            Ok(contents) => CliConfig::from_toml_str(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let default_config = CliConfig::default();
                default_config.save_to_file()?;
                default_config
            }
            Err(err) => {
                return Err(anyhow::Error::new(err).context(format!(
                    "error occured while reading {}",
                    config_filepath.display()
                )))
            }
        };

        Ok(config.with_env_overrides())
    }

    fn save_to_file(&self) -> anyhow::Result<()> {
        let config_filepath = CliConfig::get_config_filepath();
        if let Some(parent) = config_filepath.parent() {
            fs::DirBuilder::new().recursive(true).create(parent)?;
        }

        let toml_str = toml::to_string(&self)?;
        fs::write(config_filepath, toml_str)?;

        Ok(())
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(&self)?)
    }

    pub fn get_base_url(&self) -> &str {
        self.env_base_url.as_deref().unwrap_or(self.base_url.as_str())
    }

    pub fn get_account_id(&self) -> Option<&str> {
        self.env_account_id
            .as_deref()
            .or(self.account_id.as_deref())
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.clone()
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) -> anyhow::Result<()> {
        self.log_level = log_level;

        self.save_to_file()?;

        Ok(())
    }

    pub fn set_base_url(&mut self, base_url: &str) -> anyhow::Result<()> {
        url::Url::parse(base_url).context("invalid base url provided")?;
        self.base_url = base_url.trim_end_matches('/').to_string();

        self.save_to_file()?;

        Ok(())
    }

    pub fn set_account_id(&mut self, account_id: &str) -> anyhow::Result<()> {
        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(anyhow::anyhow!("account id cannot be empty!"));
        }
        self.account_id = Some(account_id.to_string());

        self.save_to_file()?;

        Ok(())
    }
}

pub static CONFIG: LazyLock<RwLock<CliConfig>> = LazyLock::new(|| {
    let config = CliConfig::load().unwrap_or_else(|err| {
        eprintln!(
            "{} {:#}, falling back to defaults",
            "warning:".yellow().bold(),
            err
        );
        CliConfig::default().with_env_overrides()
    });

    RwLock::new(config)
});
