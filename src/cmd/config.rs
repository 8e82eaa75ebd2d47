use anyhow::anyhow;
use clap::Parser;
use colored::Colorize;

use crate::{
    config::{CliConfig, LogLevel, CONFIG},
    shared_types::CliSubCmd,
};

#[derive(Parser)]
#[group(required = true, multiple = false)]
pub struct ConfigCommand {
    #[arg(long)]
    /// default log level is "chirpy", it can be annoying i totally get why you'd wa-
    set_log_level: Option<LogLevel>,

    #[arg(long)]
    /// api server to talk to, e.g. https://cloud.yugabyte.com
    set_base_url: Option<String>,

    #[arg(long)]
    /// account used when `usage` is run without --account-id
    set_account_id: Option<String>,

    #[arg(long)]
    /// print the current config
    show: bool,
}

impl CliSubCmd for ConfigCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let mut config = CONFIG
            .write()
            .map_err(|_| anyhow!("config lock poisoned"))?;

        if self.show {
            println!("{}", CliConfig::get_config_filepath().display().to_string().dimmed());
            println!("base_url   = {}", config.get_base_url());
            println!("account_id = {}", config.get_account_id().unwrap_or("-"));
            println!("log_level  = {:?}", config.get_log_level());
            return Ok(());
        }

        if let Some(log_level) = self.set_log_level.clone() {
            config.set_log_level(log_level)?;
        }
        if let Some(base_url) = &self.set_base_url {
            config.set_base_url(base_url)?;
        }
        if let Some(account_id) = &self.set_account_id {
            config.set_account_id(account_id)?;
        }

        println!("{}", String::from("Config saved!").bold());

        Ok(())
    }
}
