//! Embed images, fonts and CSS `url()` resources as data URIs.

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use tracing::{debug, info, warn};

use super::embed::file_to_data_uri;
use super::try_replace_all;
use crate::asset_paths::{AssetResolver, ReferenceKind, Resolution, is_data_uri};
use crate::models::InlineStats;

fn image_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r#"<img\s+[^>]*src="([^"]+)"[^>]*>"#).expect("invalid image regex"))
}

fn font_face_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(
      r#"@font-face\s*\{[^}]*src:\s*url\((['"]?)([^'")]+)(['"]?)\)(?:\s*format\([^)]+\))?"#,
    )
    .expect("invalid font-face regex")
  })
}

fn css_url_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r#"url\((['"]?)([^'")]+)(['"]?)\)"#).expect("invalid url() regex"))
}

fn svg_source_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r#"src="([^"]+\.svg)""#).expect("invalid svg regex"))
}

/// Run the image, font-face, `url()` and SVG passes in that order.
pub fn inline_assets(html: &str, resolver: &AssetResolver, stats: &mut InlineStats) -> Result<String> {
  let html = inline_images(html, resolver, stats)?;
  let html = inline_font_faces(&html, resolver, stats)?;
  let html = inline_css_urls(&html, resolver, stats)?;
  inline_svg_sources(&html, resolver, stats)
}

/// Swap `<img src>` values for data URIs.
pub fn inline_images(html: &str, resolver: &AssetResolver, stats: &mut InlineStats) -> Result<String> {
  try_replace_all(image_pattern(), html, |caps| {
    let src = &caps[1];
    let Some(data_uri) = embed_reference(resolver, ReferenceKind::Markup, src, stats)? else {
      return Ok(None);
    };
    stats.images += 1;
    Ok(Some(caps[0].replacen(src, &data_uri, 1)))
  })
}

/// Swap the first `url()` source of `@font-face` rules for a data URI.
///
/// Sources under `../fonts/` are looked up by file name in the root font directory, which
/// is where stylesheets kept in a sibling directory expect them.
pub fn inline_font_faces(
  html: &str,
  resolver: &AssetResolver,
  stats: &mut InlineStats,
) -> Result<String> {
  try_replace_all(font_face_pattern(), html, |caps| {
    if caps[1] != caps[3] {
      return Ok(None);
    }
    let url = &caps[2];
    if is_data_uri(url) {
      return Ok(None);
    }

    match resolver.resolve(ReferenceKind::FontFace, url) {
      Resolution::Found(path) => {
        info!(font = %path.display(), "inlining font");
        let data_uri = file_to_data_uri(&path)?;
        stats.fonts += 1;
        Ok(Some(caps[0].replacen(url, &data_uri, 1)))
      }
      Resolution::Missing => {
        warn!(url, "font file not found");
        stats.record_unresolved(url);
        Ok(None)
      }
      Resolution::Skipped => Ok(None),
    }
  })
}

/// Swap every remaining CSS `url()` for an unquoted data URI.
pub fn inline_css_urls(html: &str, resolver: &AssetResolver, stats: &mut InlineStats) -> Result<String> {
  try_replace_all(css_url_pattern(), html, |caps| {
    if caps[1] != caps[3] {
      return Ok(None);
    }
    let Some(data_uri) = embed_reference(resolver, ReferenceKind::CssUrl, &caps[2], stats)? else {
      return Ok(None);
    };
    stats.css_urls += 1;
    Ok(Some(format!("url({data_uri})")))
  })
}

/// Catch `src="*.svg"` attributes the image pass did not reach.
pub fn inline_svg_sources(
  html: &str,
  resolver: &AssetResolver,
  stats: &mut InlineStats,
) -> Result<String> {
  try_replace_all(svg_source_pattern(), html, |caps| {
    let src = &caps[1];
    let Some(data_uri) = embed_reference(resolver, ReferenceKind::Markup, src, stats)? else {
      return Ok(None);
    };
    stats.svg_sources += 1;
    Ok(Some(caps[0].replacen(src, &data_uri, 1)))
  })
}

fn embed_reference(
  resolver: &AssetResolver,
  kind: ReferenceKind,
  reference: &str,
  stats: &mut InlineStats,
) -> Result<Option<String>> {
  match resolver.resolve(kind, reference) {
    Resolution::Found(path) => {
      debug!(reference, "embedding asset");
      file_to_data_uri(&path).map(Some)
    }
    Resolution::Missing => {
      stats.record_unresolved(reference);
      Ok(None)
    }
    Resolution::Skipped => Ok(None),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::fs;
  use tempfile::{TempDir, tempdir};

  fn fixture() -> (TempDir, AssetResolver) {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("img")).unwrap();
    fs::create_dir_all(dir.path().join("fonts")).unwrap();
    fs::write(dir.path().join("img/me.webp"), [1u8, 2, 3]).unwrap();
    fs::write(dir.path().join("img/bg.jpg"), [4u8, 5, 6]).unwrap();
    fs::write(dir.path().join("img/logo.svg"), "<svg/>").unwrap();
    fs::write(dir.path().join("fonts/inter.woff2"), [7u8, 8, 9]).unwrap();
    let resolver = AssetResolver::new(dir.path(), "fonts");
    (dir, resolver)
  }

  #[test]
  fn images_become_data_uris() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let html = r#"<img class="avatar" src="img/me.webp" alt="me">"#;

    let result = inline_images(html, &resolver, &mut stats).unwrap();
    assert_eq!(result, r#"<img class="avatar" src="data:image/webp;base64,AQID" alt="me">"#);
    assert_eq!(stats.images, 1);
  }

  #[test]
  fn inlined_images_are_left_alone() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let html = r#"<img src="data:image/webp;base64,AQID">"#;

    assert_eq!(inline_images(html, &resolver, &mut stats).unwrap(), html);
    assert!(stats.unresolved.is_empty());
  }

  #[test]
  fn sibling_font_paths_resolve_to_root_fonts() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let css = r#"@font-face { font-family: Inter; src: url('../fonts/inter.woff2') format('woff2'); }"#;

    let result = inline_font_faces(css, &resolver, &mut stats).unwrap();
    assert_eq!(
      result,
      r#"@font-face { font-family: Inter; src: url('data:font/woff2;base64,BwgJ') format('woff2'); }"#
    );
    assert_eq!(stats.fonts, 1);
  }

  #[test]
  fn missing_font_face_is_kept() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let css = r#"@font-face { src: url("../fonts/gone.woff2"); }"#;

    assert_eq!(inline_font_faces(css, &resolver, &mut stats).unwrap(), css);
    assert_eq!(stats.unresolved, vec!["../fonts/gone.woff2"]);
  }

  #[test]
  fn css_urls_are_unquoted_data_uris() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let css = r#"body{background:url("img/bg.jpg")} .x{background:url(https://example.com/a.png)}"#;

    let result = inline_css_urls(css, &resolver, &mut stats).unwrap();
    assert_eq!(
      result,
      r#"body{background:url(data:image/jpeg;base64,BAUG)} .x{background:url(https://example.com/a.png)}"#
    );
  }

  #[test]
  fn css_font_urls_fall_back_to_font_dir() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();

    let result = inline_css_urls("src:url(inter.woff2)", &resolver, &mut stats).unwrap();
    assert_eq!(result, "src:url(data:font/woff2;base64,BwgJ)");
  }

  #[test]
  fn mismatched_quotes_are_not_rewritten() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let css = r#"a{background:url("img/bg.jpg)}"#;

    assert_eq!(inline_css_urls(css, &resolver, &mut stats).unwrap(), css);
  }

  #[test]
  fn svg_sources_outside_img_tags_are_inlined() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let html = r#"<source src="img/logo.svg">"#;

    let result = inline_svg_sources(html, &resolver, &mut stats).unwrap();
    assert_eq!(result, r#"<source src="data:image/svg+xml;base64,PHN2Zy8+">"#);
    assert_eq!(stats.svg_sources, 1);
  }

  #[test]
  fn second_run_is_a_no_op() {
    let (_dir, resolver) = fixture();
    let mut stats = InlineStats::default();
    let html = r#"<img src="img/logo.svg"><style>@font-face{src:url(../fonts/inter.woff2)} b{background:url(img/bg.jpg)}</style>"#;

    let once = inline_assets(html, &resolver, &mut stats).unwrap();
    let twice = inline_assets(&once, &resolver, &mut stats).unwrap();
    assert_eq!(once, twice);
    assert!(once.contains("data:font/woff2;base64,BwgJ"));
  }
}
