//! Helpers for resolving asset references found in the page to files on disk.
//!
//! Responsibilities are split into focused submodules so that filtering references,
//! joining paths and expanding fallback candidates can be tested independently of the
//! inlining passes that consume them.

mod candidates;
mod filters;
mod join;
mod resolve;

pub use candidates::{FONT_EXTENSIONS, ReferenceKind, generate_resolution_candidates};
pub use filters::{is_data_uri, should_skip_reference};
pub use join::{join_reference, normalize_lexically};
pub use resolve::{AssetResolver, Resolution};
