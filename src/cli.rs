use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cscopes")]
#[command(version)]
#[command(about = "Inspect per-application contact access scopes", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/contact-scopes/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Theme for resource label lookups, overrides the config value
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the scope view model of an application
    ViewModel {
        /// Application id
        #[arg(short, long)]
        app: String,

        /// Read the scope blob from this file instead of the scope directory
        #[arg(short, long)]
        blob: Option<PathBuf>,
    },
    /// List the groups a scope may include, sorted by title
    Groups,
    /// Resolve detail references to row ids (fails if any reference misses)
    Resolve {
        #[arg(required = true)]
        references: Vec<String>,
    },
}
