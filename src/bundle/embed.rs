//! Reading referenced files as text or as base64 data URIs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};

use super::mime::mime_type_for;

/// Read a text asset, replacing invalid UTF-8 sequences instead of failing.
///
/// A leading byte-order mark is dropped so it cannot end up inside an inlined selector.
pub fn read_text(path: &Path) -> Result<String> {
  let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
  let text = String::from_utf8_lossy(&bytes);
  Ok(text.strip_prefix('\u{feff}').unwrap_or(&*text).to_string())
}

/// Encode a file as `data:<mime>;base64,<payload>`.
pub fn file_to_data_uri(path: &Path) -> Result<String> {
  let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
  let encoded = general_purpose::STANDARD.encode(bytes);
  Ok(format!("data:{};base64,{}", mime_type_for(path), encoded))
}
