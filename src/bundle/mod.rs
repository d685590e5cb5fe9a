//! Substitution passes that embed a page's stylesheets, scripts, images and fonts.
//!
//! Passes are applied in a fixed order because later passes scan text produced by
//! earlier ones: stylesheets inlined first are searched for `url()` references by the
//! asset pass.

pub mod assets;
pub mod embed;
pub mod mime;
pub mod scripts;
pub mod styles;

use anyhow::Result;
use regex::{Captures, Regex};

use crate::asset_paths::AssetResolver;
use crate::models::InlineStats;

pub use assets::inline_assets;
pub use embed::{file_to_data_uri, read_text};
pub use mime::mime_type_for;
pub use scripts::inline_scripts;
pub use styles::inline_stylesheets;

/// Run every inlining pass over `html` in order.
pub fn inline_all(html: &str, resolver: &AssetResolver, stats: &mut InlineStats) -> Result<String> {
  let html = inline_stylesheets(html, resolver, stats)?;
  let html = inline_scripts(&html, resolver, stats)?;
  inline_assets(&html, resolver, stats)
}

/// Regex replace where the replacement may fail or decline.
///
/// Returning `Ok(None)` keeps the matched text verbatim.
pub(crate) fn try_replace_all<F>(pattern: &Regex, text: &str, mut replace: F) -> Result<String>
where
  F: FnMut(&Captures<'_>) -> Result<Option<String>>,
{
  let mut output = String::with_capacity(text.len());
  let mut last = 0;

  for caps in pattern.captures_iter(text) {
    let Some(whole) = caps.get(0) else {
      continue;
    };
    output.push_str(&text[last..whole.start()]);
    match replace(&caps)? {
      Some(replacement) => output.push_str(&replacement),
      None => output.push_str(whole.as_str()),
    }
    last = whole.end();
  }

  output.push_str(&text[last..]);
  Ok(output)
}
