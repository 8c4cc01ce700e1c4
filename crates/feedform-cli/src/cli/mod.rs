//! CLI for the feedform route form builder.

mod commands;
mod input;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use feedform_core::config;

use commands::{run_build, run_fetch, run_keys, run_show};

/// Top-level CLI for feedform.
#[derive(Debug, Parser)]
#[command(name = "feedform")]
#[command(about = "feedform: build and fetch feed URLs from route descriptors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// The route payload and where it is mounted.
#[derive(Debug, Clone, Args)]
pub struct RouteArgs {
    /// Path to the route descriptor JSON, or `-` for stdin.
    pub route: String,

    /// Namespace prefix the route is mounted under (e.g. `github`).
    #[arg(long)]
    pub prefix: String,

    /// Display name of the namespace.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the form fields a route exposes.
    Keys {
        #[command(flatten)]
        route: RouteArgs,
    },

    /// Show the route heading, credits and description.
    Show {
        #[command(flatten)]
        route: RouteArgs,
    },

    /// Validate values and print the assembled feed URL.
    Build {
        #[command(flatten)]
        route: RouteArgs,

        /// Field value as `key=value`; repeatable.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = input::parse_assignment)]
        values: Vec<(String, String)>,
    },

    /// Build the feed URL and fetch it from an instance.
    Fetch {
        #[command(flatten)]
        route: RouteArgs,

        /// Field value as `key=value`; repeatable.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = input::parse_assignment)]
        values: Vec<(String, String)>,

        /// Instance base URL (overrides `instance_url` from config).
        #[arg(long)]
        instance: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Keys { route } => run_keys(&cfg, &route)?,
            CliCommand::Show { route } => run_show(&cfg, &route)?,
            CliCommand::Build { route, values } => run_build(&cfg, &route, &values)?,
            CliCommand::Fetch {
                route,
                values,
                instance,
            } => run_fetch(&cfg, &route, &values, instance.as_deref()).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
