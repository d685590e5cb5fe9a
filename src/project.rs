//! Resolved filesystem layout for a single bundling run.

use std::path::{Path, PathBuf};

/// Default name of the directory searched for fonts that cannot be found next to the page.
pub const DEFAULT_FONTS_DIR: &str = "fonts";

/// Filesystem layout describing where the page lives and where the bundle is written.
#[derive(Debug, Clone)]
pub struct BundleLayout {
  /// Directory every relative reference in the page is resolved against.
  pub base_dir: PathBuf,
  /// Source HTML document.
  pub input_html: PathBuf,
  /// Destination of the self-contained document.
  pub output_html: PathBuf,
  /// Name of the fallback font directory below `base_dir`.
  pub fonts_dir: String,
  /// Whether the inlined document is minified before it is written.
  pub minify: bool,
}

impl BundleLayout {
  /// Layout rooted at `base_dir` using the conventional `index.html` to `dist/index.html` paths.
  pub fn rooted_at(base_dir: impl Into<PathBuf>) -> Self {
    let base_dir = base_dir.into();
    Self {
      input_html: base_dir.join("index.html"),
      output_html: base_dir.join("dist").join("index.html"),
      base_dir,
      fonts_dir: DEFAULT_FONTS_DIR.to_string(),
      minify: true,
    }
  }

  /// Directory holding fallback fonts.
  pub fn fonts_path(&self) -> PathBuf {
    self.base_dir.join(&self.fonts_dir)
  }

  /// Directory the output document is written into, when it has one.
  pub fn output_dir(&self) -> Option<&Path> {
    self
      .output_html
      .parent()
      .filter(|parent| !parent.as_os_str().is_empty())
  }
}
