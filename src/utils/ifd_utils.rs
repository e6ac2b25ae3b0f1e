//! IFD utilities
//!
//! Readers for the variant-dependent fields of an Image File Directory:
//! offsets and entry counts are 32/16 bits wide in classic TIFF and 64 bits
//! wide in BigTIFF.

use std::io;

use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;

/// Reads a file offset at the current position
///
/// # Arguments
/// * `reader` - The seekable reader to use
/// * `is_big_tiff` - Whether the structure uses 64-bit offsets
/// * `byte_order_handler` - Handler for the structure's byte order
///
/// # Returns
/// The offset, widened to 64 bits. The reader advances by 4 or 8 bytes.
pub fn read_offset(
    reader: &mut dyn SeekableReader,
    is_big_tiff: bool,
    byte_order_handler: &dyn ByteOrderHandler,
) -> io::Result<u64> {
    if is_big_tiff {
        byte_order_handler.read_u64(reader)
    } else {
        byte_order_handler.read_u32(reader).map(u64::from)
    }
}

/// Reads the number of entries at the start of an IFD
pub fn read_entry_count(
    reader: &mut dyn SeekableReader,
    is_big_tiff: bool,
    byte_order_handler: &dyn ByteOrderHandler,
) -> io::Result<u64> {
    if is_big_tiff {
        byte_order_handler.read_u64(reader)
    } else {
        byte_order_handler.read_u16(reader).map(u64::from)
    }
}

/// Reads the value count of a tag record
///
/// Counts share the width of offsets in both variants.
pub fn read_value_count(
    reader: &mut dyn SeekableReader,
    is_big_tiff: bool,
    byte_order_handler: &dyn ByteOrderHandler,
) -> io::Result<u64> {
    read_offset(reader, is_big_tiff, byte_order_handler)
}
