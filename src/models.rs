//! Data structures produced while bundling a page.

use std::path::PathBuf;

use serde::Serialize;

/// Counters collected by the inlining passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStats {
  /// Stylesheet links replaced with `<style>` blocks.
  pub stylesheets: usize,
  /// External scripts replaced with inline scripts.
  pub scripts: usize,
  /// `<img>` sources turned into data URIs.
  pub images: usize,
  /// `@font-face` sources turned into data URIs.
  pub fonts: usize,
  /// Remaining CSS `url()` values turned into data URIs.
  pub css_urls: usize,
  /// SVG `src` attributes caught by the final safety pass.
  pub svg_sources: usize,
  /// References left untouched because no file backs them.
  pub unresolved: Vec<String>,
}

impl InlineStats {
  /// Total number of references that were embedded.
  pub fn total_inlined(&self) -> usize {
    self.stylesheets + self.scripts + self.images + self.fonts + self.css_urls + self.svg_sources
  }

  pub(crate) fn record_unresolved(&mut self, reference: &str) {
    if !self.unresolved.iter().any(|known| known == reference) {
      self.unresolved.push(reference.to_string());
    }
  }
}

/// Summary of a finished build, printed by the CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
  /// Source document.
  pub input: PathBuf,
  /// Written document.
  pub output: PathBuf,
  /// Whether minification ran.
  pub minified: bool,
  /// Size of the source document in bytes.
  pub input_bytes: usize,
  /// Size of the written document in bytes.
  pub output_bytes: usize,
  /// What the inlining passes did.
  pub inlined: InlineStats,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unresolved_references_are_recorded_once() {
    let mut stats = InlineStats::default();
    stats.record_unresolved("missing.css");
    stats.record_unresolved("missing.css");
    stats.record_unresolved("gone.png");
    assert_eq!(stats.unresolved, vec!["missing.css", "gone.png"]);
  }

  #[test]
  fn report_serialises_in_camel_case() {
    let report = BuildReport {
      input: PathBuf::from("index.html"),
      output: PathBuf::from("dist/index.html"),
      minified: true,
      input_bytes: 10,
      output_bytes: 20,
      inlined: InlineStats {
        css_urls: 2,
        ..InlineStats::default()
      },
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outputBytes"], 20);
    assert_eq!(json["inlined"]["cssUrls"], 2);
  }
}
