use std::path::PathBuf;

use tracing::debug;

use super::candidates::{ReferenceKind, generate_resolution_candidates};
use super::filters::should_skip_reference;
use crate::project::BundleLayout;

/// Outcome of resolving a single reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// External URL or data URI; the markup stays as written.
    Skipped,
    /// No candidate exists on disk; the markup stays as written.
    Missing,
    /// The reference points at this file.
    Found(PathBuf),
}

/// Resolves page references against a base directory with the font fallback rules.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_dir: PathBuf,
    fonts_dir: String,
}

impl AssetResolver {
    /// Create a resolver rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, fonts_dir: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            fonts_dir: fonts_dir.into(),
        }
    }

    /// Create a resolver for the layout's base and font directories.
    pub fn from_layout(layout: &BundleLayout) -> Self {
        Self::new(&layout.base_dir, &layout.fonts_dir)
    }

    /// Resolve a reference to the first candidate that is a regular file.
    pub fn resolve(&self, kind: ReferenceKind, reference: &str) -> Resolution {
        if should_skip_reference(reference) {
            return Resolution::Skipped;
        }

        let candidates =
            generate_resolution_candidates(&self.base_dir, &self.fonts_dir, kind, reference);
        for candidate in candidates {
            debug!(reference, candidate = %candidate.display(), "trying asset candidate");
            if candidate.is_file() {
                return Resolution::Found(candidate);
            }
        }

        Resolution::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn skips_external_and_inlined_references() {
        let resolver = AssetResolver::new("/nowhere", "fonts");
        assert_eq!(
            resolver.resolve(ReferenceKind::Markup, "https://cdn.example.com/x.js"),
            Resolution::Skipped
        );
        assert_eq!(
            resolver.resolve(ReferenceKind::CssUrl, "data:image/png;base64,AA=="),
            Resolution::Skipped
        );
    }

    #[test]
    fn finds_direct_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body{}").unwrap();

        let resolver = AssetResolver::new(dir.path(), "fonts");
        assert_eq!(
            resolver.resolve(ReferenceKind::Markup, "css/site.css"),
            Resolution::Found(dir.path().join("css/site.css"))
        );
    }

    #[test]
    fn falls_back_to_font_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/inter.woff2"), [0u8, 1]).unwrap();

        let resolver = AssetResolver::new(dir.path(), "fonts");
        assert_eq!(
            resolver.resolve(ReferenceKind::CssUrl, "inter.woff2"),
            Resolution::Found(dir.path().join("fonts").join("inter.woff2"))
        );
    }

    #[test]
    fn directories_do_not_count_as_assets() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();

        let resolver = AssetResolver::new(dir.path(), "fonts");
        assert_eq!(resolver.resolve(ReferenceKind::Markup, "img"), Resolution::Missing);
    }
}
