//! Replace stylesheet links with inline `<style>` blocks.

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use super::embed::read_text;
use super::try_replace_all;
use crate::asset_paths::{AssetResolver, ReferenceKind, Resolution};
use crate::models::InlineStats;

fn stylesheet_link_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r#"<link\s+rel="stylesheet"\s+href="([^"]+)"\s*/?>"#)
      .expect("invalid stylesheet link regex")
  })
}

/// Inline every `<link rel="stylesheet" href="...">` whose target exists.
///
/// Only links written with `rel` before `href` are recognised; anything else is left for
/// the browser to fetch.
pub fn inline_stylesheets(
  html: &str,
  resolver: &AssetResolver,
  stats: &mut InlineStats,
) -> Result<String> {
  try_replace_all(stylesheet_link_pattern(), html, |caps| {
    let href = &caps[1];
    match resolver.resolve(ReferenceKind::Markup, href) {
      Resolution::Found(path) => {
        debug!(href, "inlining stylesheet");
        let css = read_text(&path)?;
        stats.stylesheets += 1;
        Ok(Some(format!("<style>{css}</style>")))
      }
      Resolution::Missing => {
        stats.record_unresolved(href);
        Ok(None)
      }
      Resolution::Skipped => Ok(None),
    }
  })
}
