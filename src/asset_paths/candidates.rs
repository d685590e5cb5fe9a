use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::join::{join_reference, normalize_lexically};

/// File extensions treated as web fonts.
pub const FONT_EXTENSIONS: &[&str] = &["woff2", "woff", "ttf", "otf"];

/// Prefix stylesheets in a sibling directory use to reach the root font directory.
const SIBLING_FONTS_PREFIX: &str = "../fonts/";

/// Where a reference was found, which decides the fallbacks tried for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `href`/`src` attributes of links, scripts and images.
    Markup,
    /// First `url()` source of an `@font-face` rule.
    FontFace,
    /// Any other CSS `url()`.
    CssUrl,
}

/// Generate candidate files for a reference, in the order they should be tried.
///
/// Markup references resolve against the base directory only. Font faces pointing at
/// `../fonts/` are redirected to the root font directory by file name, while other font
/// face sources follow plain path joining. CSS `url()` values naming a font outside of any
/// `fonts` path fall back to the root font directory when the direct path is missing.
pub fn generate_resolution_candidates(
    base_dir: &Path,
    fonts_dir: &str,
    kind: ReferenceKind,
    reference: &str,
) -> Vec<PathBuf> {
    if reference.is_empty() {
        return Vec::new();
    }

    let mut builder = CandidateBuilder::new(base_dir, fonts_dir, reference);
    match kind {
        ReferenceKind::Markup => builder.add_direct_candidate(),
        ReferenceKind::FontFace => builder.add_font_face_candidate(),
        ReferenceKind::CssUrl => {
            builder.add_direct_candidate();
            builder.add_font_dir_fallback();
        }
    }
    builder.finish()
}

struct CandidateBuilder<'a> {
    base_dir: &'a Path,
    fonts_dir: &'a str,
    reference: &'a str,
    seen: BTreeSet<PathBuf>,
    result: Vec<PathBuf>,
}

impl<'a> CandidateBuilder<'a> {
    fn new(base_dir: &'a Path, fonts_dir: &'a str, reference: &'a str) -> Self {
        Self {
            base_dir,
            fonts_dir,
            reference,
            seen: BTreeSet::new(),
            result: Vec::new(),
        }
    }

    fn add_direct_candidate(&mut self) {
        let direct = join_reference(self.base_dir, self.reference);
        self.push(direct);
    }

    fn add_font_face_candidate(&mut self) {
        if self.reference.starts_with(SIBLING_FONTS_PREFIX) {
            self.add_root_font_candidate();
        } else {
            let resolved = normalize_lexically(&self.base_dir.join(self.reference));
            self.push(resolved);
        }
    }

    fn add_font_dir_fallback(&mut self) {
        if is_font_reference(self.reference) && !self.reference.contains("fonts") {
            self.add_root_font_candidate();
        }
    }

    fn add_root_font_candidate(&mut self) {
        if let Some(file_name) = Path::new(self.reference).file_name() {
            let candidate = self.base_dir.join(self.fonts_dir).join(file_name);
            self.push(candidate);
        }
    }

    fn finish(self) -> Vec<PathBuf> {
        self.result
    }

    fn push(&mut self, candidate: PathBuf) {
        if self.seen.insert(candidate.clone()) {
            self.result.push(candidate);
        }
    }
}

fn is_font_reference(reference: &str) -> bool {
    Path::new(reference)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|font| font.eq_ignore_ascii_case(ext))
        })
}
