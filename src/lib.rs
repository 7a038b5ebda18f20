//! `cscopes`: inspect per-application contact access scopes.
//!
//! The binary wires configuration, tracing and the `cs-infra` adapters into
//! the `cs-app` use cases and prints results as JSON on stdout. Logs go to
//! stderr.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use anyhow::Context;
use cs_app::UseCases;
use serde::Serialize;

use crate::cli::{Cli, Command};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = bootstrap::config::resolve_config(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let deps = bootstrap::wiring::build_app_deps(&config).await?;
    let use_cases = UseCases::new(deps);

    match cli.command {
        Command::ViewModel { app, blob } => {
            let view_model = commands::view_model::run(&use_cases, &app, blob.as_deref()).await?;
            print_json(&view_model)
        }
        Command::Groups => print_json(&commands::groups::run(&use_cases).await?),
        Command::Resolve { references } => {
            print_json(&commands::resolve::run(&use_cases, &references).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
