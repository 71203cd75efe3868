//! robots.txt generation.

use super::{display_name, write_output};
use crate::config::{RobotsRule, SiteConfig};
use crate::log;
use anyhow::Result;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Build robots.txt if enabled.
pub fn build_robots(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.robots.enable {
        return Ok(None);
    }

    let path = write_output(&config.build.output, Path::new("robots.txt"), &render(config))?;

    log!("robots"; "{}", display_name(&path));
    Ok(Some(path))
}

/// One block per rule, then the sitemap location when it is absolute.
fn render(config: &SiteConfig) -> String {
    let mut blocks: Vec<String> = config.robots.rules.iter().map(render_rule).collect();

    if config.sitemap.enable && config.site.url.is_some() {
        let sitemap = config
            .site
            .absolute(&config.sitemap.path.to_string_lossy());
        blocks.push(format!("Sitemap: {sitemap}"));
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn render_rule(rule: &RobotsRule) -> String {
    let mut block = format!("User-agent: {}", rule.user_agent.trim());
    for path in &rule.allow {
        let _ = write!(block, "\nAllow: {path}");
    }
    for path in &rule.disallow {
        let _ = write!(block, "\nDisallow: {path}");
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_rules() {
        let config = test_parse_config("[site]\nurl = \"https://example.com\"");
        assert_eq!(
            render(&config),
            "User-agent: Googlebot\nDisallow: /nogooglebot/\n\n\
             User-agent: *\nAllow: /\n\n\
             Sitemap: https://example.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_no_sitemap_line_without_url() {
        let config = test_parse_config("");
        assert!(!render(&config).contains("Sitemap:"));

        let config = test_parse_config("[site]\nurl = \"https://example.com\"\n[sitemap]\nenable = false");
        assert!(!render(&config).contains("Sitemap:"));
    }

    #[test]
    fn test_custom_rule() {
        let rule = RobotsRule::new("GPTBot").allow("/public/").disallow("/");
        assert_eq!(render_rule(&rule), "User-agent: GPTBot\nAllow: /public/\nDisallow: /");
    }

    #[test]
    fn test_build_robots_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.output = tmp.path().to_path_buf();
        let path = build_robots(&config).unwrap().unwrap();
        assert_eq!(path, tmp.path().join("robots.txt"));

        config.robots.enable = false;
        assert!(build_robots(&config).unwrap().is_none());
    }
}
