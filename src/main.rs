//! Vellum - content pipeline for a markdown blog.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use vellum::cli::{self, Cli, Commands};
use vellum::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
    }
}
