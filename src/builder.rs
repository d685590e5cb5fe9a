//! Build orchestrator turning a page and its assets into one self-contained document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use same_file::is_same_file;
use tracing::{debug, info};

use crate::asset_paths::AssetResolver;
use crate::bundle::{inline_all, read_text};
use crate::minify::minify_html;
use crate::models::{BuildReport, InlineStats};
use crate::project::BundleLayout;

/// Failures that abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
  /// The source document could not be read.
  #[error("failed to read {}: {source}", .path.display())]
  ReadInput {
    /// Path of the source document.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },

  /// The output directory could not be created.
  #[error("failed to create {}: {source}", .path.display())]
  CreateOutputDir {
    /// Directory that could not be created.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },

  /// The bundled document could not be written.
  #[error("failed to write {}: {source}", .path.display())]
  WriteOutput {
    /// Destination path.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },

  /// Writing the output would overwrite the source document.
  #[error("output {} is the same file as the input", .path.display())]
  SameFile {
    /// Offending path.
    path: PathBuf,
  },

  /// An asset that exists could not be embedded.
  #[error(transparent)]
  Inline(#[from] anyhow::Error),
}

/// High-level helper bundling the page described by a [`BundleLayout`].
pub struct SiteBuilder {
  layout: BundleLayout,
  resolver: AssetResolver,
}

impl SiteBuilder {
  /// Create a builder for the provided layout.
  pub fn new(layout: BundleLayout) -> Self {
    let resolver = AssetResolver::from_layout(&layout);
    Self { layout, resolver }
  }

  /// Inline every resolvable asset of `html` and minify the result when enabled.
  pub fn render(&self, html: &str) -> Result<(String, InlineStats)> {
    let mut stats = InlineStats::default();
    let inlined = inline_all(html, &self.resolver, &mut stats)?;
    let rendered = if self.layout.minify {
      minify_html(&inlined)
    } else {
      inlined
    };
    Ok((rendered, stats))
  }

  /// Read the input page, render it and write the output page.
  ///
  /// Nothing is written until rendering has fully succeeded.
  pub fn build(&self) -> Result<BuildReport, BundleError> {
    let input = &self.layout.input_html;
    let output = &self.layout.output_html;

    let html = read_text(input).map_err(|err| BundleError::ReadInput {
      path: input.clone(),
      source: io_error_of(err),
    })?;
    debug!(input = %input.display(), bytes = html.len(), "read input page");

    let (rendered, inlined) = self.render(&html)?;

    ensure_distinct(input, output)?;
    if let Some(dir) = self.layout.output_dir() {
      fs::create_dir_all(dir).map_err(|source| BundleError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
      })?;
    }
    fs::write(output, &rendered).map_err(|source| BundleError::WriteOutput {
      path: output.clone(),
      source,
    })?;

    info!(
      output = %output.display(),
      inlined = inlined.total_inlined(),
      unresolved = inlined.unresolved.len(),
      "single-file page built"
    );

    Ok(BuildReport {
      input: input.clone(),
      output: output.clone(),
      minified: self.layout.minify,
      input_bytes: html.len(),
      output_bytes: rendered.len(),
      inlined,
    })
  }
}

fn ensure_distinct(input: &Path, output: &Path) -> Result<(), BundleError> {
  if matches!(is_same_file(input, output), Ok(true)) {
    return Err(BundleError::SameFile {
      path: output.to_path_buf(),
    });
  }
  Ok(())
}

fn io_error_of(err: anyhow::Error) -> io::Error {
  match err.downcast::<io::Error>() {
    Ok(io_err) => io_err,
    Err(other) => io::Error::other(other.to_string()),
  }
}
