//! Serializer — renders an [`Extraction`] as ordered `field=value` lines.

use crate::types::{Extraction, Field};

/// Walk the canonical field order and emit one `field=value` line per field
/// holding a non-blank value, newline-separated with no trailing newline.
/// Nothing recognized means an empty string, not an error.
pub fn render(extraction: &Extraction) -> String {
    let mut lines = Vec::with_capacity(extraction.len());
    for field in Field::ALL {
        if let Some(value) = extraction.get(field) {
            if !value.trim().is_empty() {
                lines.push(format!("{field}={value}"));
            }
        }
    }
    lines.join("\n")
}
