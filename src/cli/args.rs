//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::content::Collection;

/// Content pipeline for a markdown blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: vellum.toml)
    #[arg(short = 'C', long, default_value = "vellum.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render one markdown file to an HTML fragment
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Query a collection page as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Build the site into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Markdown file; use `-` for stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub out: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Collection to query (blog, generative, talks)
    #[arg(short = 'l', long, default_value = "blog")]
    pub collection: Collection,

    /// Only entries tagged with this category
    #[arg(short = 'g', long)]
    pub category: Option<String>,

    /// Page number (1-based); anything else yields no page
    #[arg(short, long, conflicts_with = "index")]
    pub page: Option<String>,

    /// Return the first page regardless of --page
    #[arg(short, long)]
    pub index: bool,

    /// Include draft entries
    #[arg(short, long)]
    pub drafts: bool,

    /// Pretty-print JSON output
    #[arg(short = 'P', long)]
    pub pretty: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Include draft entries
    #[arg(short, long)]
    pub drafts: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let cli = Cli::parse_from(["vellum", "query", "--collection", "talks", "--page", "2", "-P"]);
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.collection, Collection::Talks);
        assert_eq!(args.page.as_deref(), Some("2"));
        assert!(args.pretty);
        assert!(!args.index);
    }

    #[test]
    fn test_parse_global_paths() {
        let cli = Cli::parse_from(["vellum", "-c", "posts", "-C", "site.toml", "build", "--clean"]);
        assert_eq!(cli.content, Some(PathBuf::from("posts")));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.is_build());
    }

    #[test]
    fn test_unknown_collection_rejected() {
        assert!(Cli::try_parse_from(["vellum", "query", "--collection", "notes"]).is_err());
    }

    #[test]
    fn test_page_conflicts_with_index() {
        assert!(Cli::try_parse_from(["vellum", "query", "--page", "1", "--index"]).is_err());
    }
}
