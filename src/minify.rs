//! Regex-driven minification of the bundled document.
//!
//! This is not a parser: `//` or `/*` inside string literals and URLs of inline scripts
//! is treated as the start of a comment.

use std::sync::OnceLock;

use regex::{Captures, Regex};

struct Patterns {
  html_comment: Regex,
  whitespace: Regex,
  between_tags: Regex,
  style_block: Regex,
  block_comment: Regex,
  open_brace: Regex,
  close_brace: Regex,
  colon: Regex,
  semicolon: Regex,
  comma: Regex,
  script_block: Regex,
  line_comment: Regex,
  edge_whitespace: Regex,
  empty_script: Regex,
}

fn patterns() -> &'static Patterns {
  static PATTERNS: OnceLock<Patterns> = OnceLock::new();
  PATTERNS.get_or_init(|| Patterns {
    html_comment: Regex::new(r"<!--[\s\S]*?-->").expect("invalid html comment regex"),
    whitespace: Regex::new(r"[\s\x{FEFF}]+").expect("invalid whitespace regex"),
    between_tags: Regex::new(r">\s+<").expect("invalid inter-tag regex"),
    style_block: Regex::new(r"<style>([\s\S]*?)</style>").expect("invalid style regex"),
    block_comment: Regex::new(r"/\*[\s\S]*?\*/").expect("invalid block comment regex"),
    open_brace: Regex::new(r"\s*\{\s*").expect("invalid brace regex"),
    close_brace: Regex::new(r"\s*\}\s*").expect("invalid brace regex"),
    colon: Regex::new(r"\s*:\s*").expect("invalid colon regex"),
    semicolon: Regex::new(r"\s*;\s*").expect("invalid semicolon regex"),
    comma: Regex::new(r"\s*,\s*").expect("invalid comma regex"),
    script_block: Regex::new(r"<script([^>]*)>([\s\S]*?)</script>").expect("invalid script regex"),
    line_comment: Regex::new(r"(?m)//.*$").expect("invalid line comment regex"),
    edge_whitespace: Regex::new(r"(?m)^\s+|\s+$").expect("invalid edge whitespace regex"),
    empty_script: Regex::new(r"<script\s*></script>").expect("invalid empty script regex"),
  })
}

/// Minify an HTML document along with its inline styles and scripts.
pub fn minify_html(html: &str) -> String {
  let p = patterns();

  let html = p.html_comment.replace_all(html, "");
  let html = p.whitespace.replace_all(&html, " ");
  let html = p.between_tags.replace_all(&html, "><");

  let html = p.style_block.replace_all(&html, |caps: &Captures<'_>| {
    format!("<style>{}</style>", minify_css(&caps[1]))
  });

  let html = p.script_block.replace_all(&html, |caps: &Captures<'_>| {
    let js = minify_js(&caps[2]);
    if !js.trim().is_empty() {
      format!("<script{}>{}</script>", &caps[1], js)
    } else if caps[1].contains("src=") {
      // External scripts that were not inlined keep their tag.
      format!("<script{}></script>", &caps[1])
    } else {
      String::new()
    }
  });

  p.empty_script.replace_all(&html, "").into_owned()
}

/// Strip comments and the whitespace around CSS punctuation.
pub fn minify_css(css: &str) -> String {
  let p = patterns();

  let css = p.block_comment.replace_all(css, "");
  let css = p.whitespace.replace_all(&css, " ");
  let css = p.open_brace.replace_all(&css, "{");
  let css = p.close_brace.replace_all(&css, "}");
  let css = p.colon.replace_all(&css, ":");
  let css = p.semicolon.replace_all(&css, ";");
  p.comma.replace_all(&css, ",").into_owned()
}

/// Strip comments and collapse whitespace in a script body.
pub fn minify_js(js: &str) -> String {
  let p = patterns();

  let js = p.line_comment.replace_all(js, "");
  let js = p.block_comment.replace_all(&js, "");
  let js = p.whitespace.replace_all(&js, " ");
  p.edge_whitespace.replace_all(&js, "").into_owned()
}
