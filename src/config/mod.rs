//! Site configuration management for `vellum.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── code       # [code]
//! │   ├── links      # [links]
//! │   ├── output     # [feed], [sitemap], [robots]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every section is optional; a missing `vellum.toml` means all defaults.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildConfig, CodeConfig, FeedConfig, LinksConfig, RobotsConfig, RobotsRule, SiteInfoConfig,
    SitemapConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vellum.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub code: CodeConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub robots: RobotsConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when there is no file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides and resolve paths against the root.
    fn finalize(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.apply_command_options(&cli.command);

        let root = self.root.clone();
        self.normalize_paths(&root);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported and skipped.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Whether the feed can be written: enabled and a site URL to link to.
    pub fn feed_enabled(&self) -> bool {
        self.feed.enable && self.site.url.is_some()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Build { args } => {
                crate::logger::set_verbose(args.verbose);
                self.build.clean |= args.clean;
                self.build.drafts |= args.drafts;
            }
            Commands::Query { args } => {
                crate::logger::set_verbose(args.verbose);
                self.build.drafts |= args.drafts;
            }
            Commands::Render { args } => {
                crate::logger::set_verbose(args.verbose);
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve build directories against the root.
    ///
    /// Feed, sitemap and robots paths stay relative; they are joined with the
    /// output directory at write time.
    fn normalize_paths(&mut self, root: &Path) {
        self.build.content = root.join(&self.build.content);
        self.build.output = root.join(&self.build.output);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once. Warnings are
    /// printed and do not fail.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.links.validate(&mut diag);
        self.robots.validate(&mut diag);
        section::validate_output_path(FeedConfig::PATH, &self.feed.path, &mut diag);
        section::validate_output_path(SitemapConfig::PATH, &self.sitemap.path, &mut diag);

        if self.feed.enable && self.site.url.is_none() {
            diag.warn(
                FeedConfig::ENABLE,
                format!("feed is enabled but {} is not set, skipping feed", SiteInfoConfig::URL.as_str()),
            );
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
