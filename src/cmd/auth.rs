use clap::{Parser, Subcommand};
use colored::*;
use inquire::{Password, PasswordDisplayMode};

use crate::{shared_types::CliSubCmd, utils::local_auth::LocalAuthData};

#[derive(Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// store an api key in the OS keyring
    Login,
    Logout,
}

impl AuthCommand {
    async fn handle_login(&self) -> anyhow::Result<()> {
        print!("{}", String::from("Note: ").bright_black());
        println!(
            "{}",
            String::from("we use OS keyrings to save api keys.").bright_black()
        );

        let api_key = Password::new("API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;

        LocalAuthData::save(&api_key)?;

        println!("{}", String::from("Logged in!").bold().green());
        Ok(())
    }

    async fn handle_logout(&self) -> anyhow::Result<()> {
        LocalAuthData::delete()?;

        println!("{}", String::from("Logged out.").bold());
        Ok(())
    }
}

impl CliSubCmd for AuthCommand {
    async fn run(&self) -> anyhow::Result<()> {
        match self.commands {
            Commands::Login => self.handle_login().await,
            Commands::Logout => self.handle_logout().await,
        }
    }
}
