//! Fujifilm maker notes
//!
//! Layout: `"FUJIFILM"`, then a little-endian 32-bit offset of a classic
//! little-endian IFD. Offsets are relative to the start of the note,
//! whatever the byte order of the enclosing file.

use std::io::{Cursor, SeekFrom, Seek};

use crate::io::byte_order::ByteOrder;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd;
use crate::tiff::tag::Tag;
use crate::tiff::types::Tiff;
use super::handler::MakerNoteParser;

const SIGNATURE: &[u8] = b"FUJIFILM";

/// Parser for Fujifilm maker notes
pub struct FujifilmParser;

impl MakerNoteParser for FujifilmParser {
    fn name(&self) -> &'static str {
        "Fujifilm"
    }

    fn is_valid(&self, value: &[u8]) -> bool {
        value.starts_with(SIGNATURE)
    }

    fn parse(&self, tag: &Tag) -> TiffResult<Tiff> {
        let raw = tag.raw();
        let offset_field = raw.get(SIGNATURE.len()..SIGNATURE.len() + 4).ok_or_else(|| {
            TiffError::structural(format!("Fujifilm maker note too short: {} bytes", raw.len()))
        })?;
        let ifd_offset = ByteOrder::LittleEndian.u32_from(offset_field) as u64;

        let mut cursor = Cursor::new(raw);
        cursor.seek(SeekFrom::Start(ifd_offset))
            .map_err(|e| TiffError::read_failed("seek to maker note IFD failed", e))?;

        let (dir, _) = ifd::decode_dir(&mut cursor, ByteOrder::LittleEndian, false)?;

        let mut tiff = Tiff::new(ByteOrder::LittleEndian, false);
        tiff.dirs.push(dir);
        Ok(tiff)
    }
}
