//! Admin Panel - Command-line host
//!
//! Drives the panel, form and editor controllers against the admin REST API:
//! - `feedback`: list, approve and delete customer feedback
//! - `vendor`: create vendor accounts
//! - `employees`: review, filter, approve and reject pending registrations
//! - `contact`: show and edit the public contact information

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context as _, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod contact_commands;
mod employee_commands;
mod feedback_commands;
mod settings;
mod vendor_commands;

use adminpanel_client::{AdminApi, AdminClient, EnvToken};
use cli::{Cli, Commands};
use commands::Context;
use settings::{Overrides, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let overrides = Overrides {
        base_url: cli.base_url.clone(),
        timeout_secs: cli.timeout_secs,
        refresh_strategy: cli.refresh.map(Into::into),
    };
    let settings =
        Settings::load(cli.config.as_deref(), &overrides).context("Invalid configuration")?;
    tracing::debug!(
        "Using {} (refresh: {}, token from ${})",
        settings.base_url,
        settings.refresh_strategy,
        settings.token_env
    );
    if std::env::var_os(&settings.token_env).is_none() {
        tracing::warn!("{} is not set; requests will be sent without a token", settings.token_env);
    }

    let client = AdminClient::new(
        settings.client_config(),
        Arc::new(EnvToken::new(settings.token_env.clone())),
    )
    .context("Failed to build API client")?;
    let api: Arc<dyn AdminApi> = Arc::new(client);
    let ctx = Context { api, panel: settings.panel_settings() };

    match cli.command {
        Commands::Feedback(cmd) => commands::handle_feedback_command(&ctx, cmd).await,
        Commands::Vendor(cmd) => commands::handle_vendor_command(&ctx, cmd).await,
        Commands::Employees(cmd) => commands::handle_employee_command(&ctx, cmd).await,
        Commands::Contact(cmd) => commands::handle_contact_command(&ctx, cmd).await,
    }
}
