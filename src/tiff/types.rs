//! Core TIFF container structure

use std::fmt;

use crate::io::byte_order::ByteOrder;
use crate::tiff::ifd::Dir;

/// A decoded TIFF structure
///
/// Directories are kept in IFD-chain order; index 0 is IFD0.
#[derive(Debug, Clone, PartialEq)]
pub struct Tiff {
    /// Image File Directories in chain order
    pub dirs: Vec<Dir>,
    /// Byte order of the structure
    pub order: ByteOrder,
    /// Whether offsets are 64-bit (BigTIFF)
    pub is_big: bool,
}

impl Tiff {
    /// Creates a new TIFF structure without directories
    pub fn new(order: ByteOrder, is_big: bool) -> Self {
        Tiff {
            dirs: Vec::new(),
            order,
            is_big,
        }
    }

    /// Returns the main (first) directory if available
    pub fn main_dir(&self) -> Option<&Dir> {
        self.dirs.first()
    }

    /// Returns the number of directories
    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }
}

impl fmt::Display for Tiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TIFF:")?;
        writeln!(f, "  Format: {}", if self.is_big { "BigTIFF" } else { "TIFF" })?;
        writeln!(f, "  Byte order: {}", self.order.name())?;
        writeln!(f, "  Number of IFDs: {}", self.dirs.len())?;

        for (i, dir) in self.dirs.iter().enumerate() {
            writeln!(f, "IFD #{}", i)?;
            write!(f, "{}", dir)?;
        }

        Ok(())
    }
}
