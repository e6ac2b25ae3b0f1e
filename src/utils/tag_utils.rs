//! TIFF tag utilities
//!
//! Helpers for presenting tags: names and value formatting.

use crate::tiff::field_type::Format;
use crate::tiff::tag::Tag;
use crate::tiff::tag_names;

/// Largest number of elements shown when formatting a value
const MAX_DISPLAYED_VALUES: usize = 16;

/// Get the name of a tag
///
/// Returns a human-readable name for a tag based on its numeric ID,
/// or "Unknown-<id>" if the tag is not recognized.
pub fn get_tag_name(tag: u16) -> String {
    tag_names::get_tag_name(tag)
}

/// Formats a tag value for display
///
/// ASCII values are quoted, undefined values shown as hex bytes and
/// everything else as a list of decoded elements. Long values are cut off.
pub fn format_value(tag: &Tag) -> String {
    match tag.format() {
        Format::String => match tag.string_val() {
            Ok(s) => format!("{:?}", s),
            Err(e) => format!("<{}>", e),
        },
        Format::Undefined => {
            let hex: Vec<String> = tag.raw().iter()
                .take(MAX_DISPLAYED_VALUES)
                .map(|b| format!("{:02x}", b))
                .collect();
            with_ellipsis(hex.join(" "), tag.raw().len())
        },
        _ => {
            let values: Vec<String> = tag.values().iter()
                .take(MAX_DISPLAYED_VALUES)
                .map(|v| v.to_string())
                .collect();
            with_ellipsis(format!("[{}]", values.join(", ")), tag.count as usize)
        },
    }
}

fn with_ellipsis(text: String, total: usize) -> String {
    if total > MAX_DISPLAYED_VALUES {
        format!("{} ... ({} total)", text, total)
    } else {
        text
    }
}
