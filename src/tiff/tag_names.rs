//! Tag name definitions
//!
//! Names for TIFF, Exif, GPS and Interoperability tags, loaded from the
//! embedded `exif_tags.toml`. Names are used for display and logging only.

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::tiff::errors::{TiffError, TiffResult};

lazy_static! {
    // Parse the TOML table on first use
    static ref TAG_DEFINITIONS: TagDefinitions = {
        let content = include_str!("../../exif_tags.toml");
        TagDefinitions::from_str(content).unwrap_or_else(|e| {
            log::warn!("Failed to parse tag name definitions: {}", e);
            TagDefinitions::default()
        })
    };
}

/// Tag ID to name tables, one per namespace
#[derive(Debug, Default)]
pub struct TagDefinitions {
    // Maps TIFF, Exif and Interoperability tag IDs to names
    pub tag_names: HashMap<u16, String>,
    // Maps GPS tag IDs to names; these IDs overlap the main table
    pub gps_tag_names: HashMap<u16, String>,
}

impl TagDefinitions {
    /// Parse tag definitions from a TOML string
    pub fn from_str(content: &str) -> TiffResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(TiffError::structural(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = TagDefinitions::default();
        Self::parse_table(&toml_value, "tag_ids", &mut defs.tag_names);
        Self::parse_table(&toml_value, "gps_tag_ids", &mut defs.gps_tag_names);

        Ok(defs)
    }

    /// Helper to parse an ID table from TOML
    ///
    /// Keys may be decimal or `0x`-prefixed hexadecimal.
    fn parse_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Some(id), Some(name)) = (parse_id(k), v.as_str()) {
                    target.insert(id, name.to_string());
                }
            }
        }
    }

    /// Get a tag name by ID
    pub fn get_tag_name(&self, tag_id: u16) -> String {
        self.tag_names.get(&tag_id)
            .cloned()
            .unwrap_or_else(|| format!("Unknown-{}", tag_id))
    }

    /// Get a GPS tag name by ID
    pub fn get_gps_tag_name(&self, tag_id: u16) -> String {
        self.gps_tag_names.get(&tag_id)
            .cloned()
            .unwrap_or_else(|| format!("Unknown-{}", tag_id))
    }
}

fn parse_id(key: &str) -> Option<u16> {
    match key.strip_prefix("0x") {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => key.parse::<u16>().ok(),
    }
}

/// Get the name of a TIFF/Exif tag
pub fn get_tag_name(tag: u16) -> String {
    TAG_DEFINITIONS.get_tag_name(tag)
}

/// Get the name of a tag found in a GPS IFD
pub fn get_gps_tag_name(tag: u16) -> String {
    TAG_DEFINITIONS.get_gps_tag_name(tag)
}
