//! TIFF format utilities
//!
//! Utilities for working with TIFF header specifics like
//! byte order detection and variant detection.

use log::debug;
use crate::io::seekable::SeekableReader;
use crate::io::byte_order::ByteOrderHandler;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::constants::header;

/// Detects whether a structure is classic TIFF or BigTIFF from its version marker
///
/// # Arguments
/// * `reader` - Reader positioned just after the byte order marker
/// * `byte_order_handler` - Handler for the structure's byte order
///
/// # Returns
/// true for BigTIFF, false for classic TIFF
pub fn detect_tiff_variant(
    reader: &mut dyn SeekableReader,
    byte_order_handler: &dyn ByteOrderHandler,
) -> TiffResult<bool> {
    let version = byte_order_handler.read_u16(reader)
        .map_err(|e| TiffError::read_failed("could not find special tiff marker", e))?;
    debug!("TIFF version: {}", version);

    match version {
        header::BIG_TIFF_VERSION => {
            debug!("Detected BigTIFF format");
            Ok(true)
        },
        header::TIFF_VERSION => {
            debug!("Detected standard TIFF format");
            Ok(false)
        },
        _ => Err(TiffError::structural(format!(
            "could not find special tiff marker: unsupported version {}",
            version
        ))),
    }
}
