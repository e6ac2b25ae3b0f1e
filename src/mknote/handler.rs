//! Maker note parser trait definition

use crate::tiff::errors::TiffResult;
use crate::tiff::tag::Tag;
use crate::tiff::types::Tiff;

/// Strategy trait for vendor-specific maker note parsers
pub trait MakerNoteParser: Send + Sync {
    /// Get the vendor name of this parser
    fn name(&self) -> &'static str;

    /// Whether this parser claims a maker note with the given raw value
    ///
    /// Must look at the bytes only; no parsing happens here.
    fn is_valid(&self, value: &[u8]) -> bool;

    /// Decode the maker note's directories
    fn parse(&self, tag: &Tag) -> TiffResult<Tiff>;
}

/// A decoded maker note
#[derive(Debug, Clone, PartialEq)]
pub struct MakerNote {
    /// Name of the vendor parser that claimed the note
    pub vendor: &'static str,
    /// Directories found inside the note
    pub tiff: Tiff,
}
