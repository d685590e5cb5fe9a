//! Extension to MIME type table used for data URIs.

use std::path::Path;

/// MIME type used for extensions missing from the table.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

const MIME_TYPES: &[(&str, &str)] = &[
  ("css", "text/css"),
  ("js", "application/javascript"),
  ("svg", "image/svg+xml"),
  ("jpeg", "image/jpeg"),
  ("jpg", "image/jpeg"),
  ("png", "image/png"),
  ("gif", "image/gif"),
  ("webp", "image/webp"),
  ("ico", "image/x-icon"),
  ("woff2", "font/woff2"),
  ("woff", "font/woff"),
  ("ttf", "font/ttf"),
  ("otf", "font/otf"),
];

/// Look up the MIME type for a path by its (case-insensitive) extension.
pub fn mime_type_for(path: &Path) -> &'static str {
  let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
    return FALLBACK_MIME_TYPE;
  };

  MIME_TYPES
    .iter()
    .find(|(known, _)| known.eq_ignore_ascii_case(ext))
    .map(|(_, mime)| *mime)
    .unwrap_or(FALLBACK_MIME_TYPE)
}
