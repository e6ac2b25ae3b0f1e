//! Nikon type 3 maker notes
//!
//! Layout: `"Nikon\0"`, a two byte version, two reserved bytes, then a
//! complete TIFF structure whose offsets are relative to its own header.

use std::io::Cursor;

use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::reader;
use crate::tiff::tag::Tag;
use crate::tiff::types::Tiff;
use super::handler::MakerNoteParser;

const SIGNATURE: &[u8] = b"Nikon\0";

/// Start of the embedded TIFF header
const TIFF_START: usize = 10;

/// Parser for Nikon type 3 maker notes
pub struct NikonV3Parser;

impl MakerNoteParser for NikonV3Parser {
    fn name(&self) -> &'static str {
        "Nikon"
    }

    fn is_valid(&self, value: &[u8]) -> bool {
        value.starts_with(SIGNATURE)
    }

    fn parse(&self, tag: &Tag) -> TiffResult<Tiff> {
        let embedded = tag.raw().get(TIFF_START..).ok_or_else(|| {
            TiffError::structural(format!("Nikon maker note too short: {} bytes", tag.raw().len()))
        })?;

        reader::decode(&mut Cursor::new(embedded))
    }
}
