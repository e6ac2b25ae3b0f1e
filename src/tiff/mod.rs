//! TIFF structure decoding module
//!
//! This module provides the data model and decoders for TIFF and BigTIFF
//! structures as found in image files and EXIF blocks.

pub mod errors;
pub mod field_type;
pub mod tag;
pub mod ifd;
pub mod types;
pub mod reader;
pub mod tag_names;
pub mod constants;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use errors::{TiffError, TiffResult};
pub use field_type::{DataType, Format, Value};
pub use ifd::{decode_dir, Dir};
pub use reader::{decode, CycleGuard, TiffDecoder, TiffDecoderBuilder};
pub use tag::{decode_tag, Tag};
pub use types::Tiff;
