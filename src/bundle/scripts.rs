//! Replace external `<script src>` tags with inline scripts.

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use super::embed::read_text;
use super::try_replace_all;
use crate::asset_paths::{AssetResolver, ReferenceKind, Resolution};
use crate::models::InlineStats;

fn script_src_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r#"<script\s+[^>]*src="([^"]+)"[^>]*></script>"#).expect("invalid script regex")
  })
}

fn type_attribute_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r#"type="([^"]+)""#).expect("invalid type attribute regex"))
}

/// Inline every external script whose source exists.
///
/// The `type` attribute survives so module scripts keep their semantics; `defer`, `async`
/// and the remaining attributes are dropped along with `src`.
pub fn inline_scripts(html: &str, resolver: &AssetResolver, stats: &mut InlineStats) -> Result<String> {
  try_replace_all(script_src_pattern(), html, |caps| {
    let src = &caps[1];
    match resolver.resolve(ReferenceKind::Markup, src) {
      Resolution::Found(path) => {
        debug!(src, "inlining script");
        let js = read_text(&path)?;
        let type_attr = type_attribute_pattern()
          .captures(&caps[0])
          .map(|type_caps| format!(" type=\"{}\"", &type_caps[1]))
          .unwrap_or_default();
        stats.scripts += 1;
        Ok(Some(format!("<script{type_attr}>{js}</script>")))
      }
      Resolution::Missing => {
        stats.record_unresolved(src);
        Ok(None)
      }
      Resolution::Skipped => Ok(None),
    }
  })
}
