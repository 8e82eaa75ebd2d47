use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use yb_usage_cli::cmd::auth::AuthCommand;
use yb_usage_cli::cmd::config::ConfigCommand;
use yb_usage_cli::cmd::usage::UsageCommand;
use yb_usage_cli::config::CONFIG;
use yb_usage_cli::shared_types::CliSubCmd;
use yb_usage_cli::utils::logging;

#[derive(Parser)]
#[command(version, about = "usage summary statistics for your YugabyteDB account")]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Usage(UsageCommand),
    Auth(AuthCommand),
    Config(ConfigCommand),
}

#[tokio::main]
pub async fn main() -> ExitCode {
    let cli = Cli::parse();

    match CONFIG.read() {
        Ok(config) => logging::init(&config.get_log_level()),
        Err(_) => logging::init(&Default::default()),
    }

    let res = match cli.commands {
        Commands::Usage(_cmd) => _cmd.run().await,
        Commands::Auth(_cmd) => _cmd.run().await,
        Commands::Config(_cmd) => _cmd.run().await,
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
