//! Project configuration loader for describing the bundle layout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::project::{BundleLayout, DEFAULT_FONTS_DIR};

/// File name looked up in the project directory when no explicit configuration is given.
pub const DEFAULT_CONFIG_FILE: &str = "inline.config.json";

/// Discoverable project configuration describing input and output documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
  /// Page to bundle, relative to the project directory.
  pub input_html: String,
  /// Where the self-contained page is written, relative to the project directory.
  pub output_html: String,
  /// Directory below the project root holding fallback fonts.
  pub fonts_dir: String,
  /// Minify the document after inlining.
  pub minify: bool,
}

impl Default for BundleConfig {
  fn default() -> Self {
    Self {
      input_html: "index.html".into(),
      output_html: "dist/index.html".into(),
      fonts_dir: DEFAULT_FONTS_DIR.into(),
      minify: true,
    }
  }
}

impl BundleConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fallback to default
  /// values so a bare project directory can still be bundled.
  pub fn discover(project_dir: &Path) -> Self {
    let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file, ignoring failures.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Read configuration from a file the caller asked for explicitly.
  pub fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read config at {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse config at {}", path.display()))
  }

  /// Resolve the configured paths against `project_dir`.
  pub fn into_layout(self, project_dir: &Path) -> BundleLayout {
    BundleLayout {
      base_dir: project_dir.to_path_buf(),
      input_html: project_dir.join(&self.input_html),
      output_html: project_dir.join(&self.output_html),
      fonts_dir: self.fonts_dir,
      minify: self.minify,
    }
  }
}
