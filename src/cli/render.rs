//! `vellum render`: one markdown file to an HTML fragment.

use anyhow::{Context, Result};
use std::fs;

use super::args::RenderArgs;
use super::common::{highlighter, read_input};
use crate::config::SiteConfig;
use crate::markdown::strip_frontmatter;
use crate::pipeline::{Pipeline, render_markdown};
use crate::{debug, log};

pub fn run_render(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let source = read_input(&args.file)?;
    let html = render_source(&source, config)?;

    match &args.out {
        Some(out) => {
            fs::write(out, &html).with_context(|| format!("Failed to write {}", out.display()))?;
            log!("render"; "wrote {}", out.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

/// Frontmatter-stripped markdown through the site pipeline.
pub fn render_source(source: &str, config: &SiteConfig) -> Result<String> {
    let highlighter = highlighter(config)?;
    let pipeline = Pipeline::site(config, highlighter.as_ref());
    debug!("render"; "passes: {}", pipeline.names().join(" → "));

    Ok(render_markdown(strip_frontmatter(source), &pipeline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::config::test_parse_config;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_render_source_strips_frontmatter() {
        let config = test_parse_config("[code]\nhighlight = false");
        let html = render_source("---\ntitle: x\n---\nHello `code`\n", &config).unwrap();
        assert_eq!(html, "<p>Hello <inline-code>code</inline-code></p>\n");
    }

    #[test]
    fn test_run_render_to_file() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("post.md");
        let output = tmp.path().join("post.html");
        fs::write(&input, "[a](https://elsewhere.dev)").unwrap();

        let cli = Cli::parse_from([
            "vellum",
            "render",
            input.to_str().unwrap(),
            "--out",
            output.to_str().unwrap(),
        ]);
        let Commands::Render { args } = &cli.command else {
            panic!("expected render");
        };
        run_render(args, &test_parse_config("")).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"<span class="link-content">a</span>"#));
    }
}
