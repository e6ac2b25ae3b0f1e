//! Image File Directory (IFD) structures and the directory decoder
//!
//! An IFD is a count of tag records followed by the records themselves and
//! the offset of the next IFD in the chain.

use std::fmt;
use log::{debug, warn};

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::tag::{self, Tag};
use crate::utils::ifd_utils;

/// Represents an Image File Directory (IFD)
///
/// Tags keep their on-disk order. Malformed files may repeat a tag id, so
/// lookups return the first match and `get_all` exposes the duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dir {
    /// Tags in this IFD
    pub tags: Vec<Tag>,
}

impl Dir {
    /// Creates a new empty directory
    pub fn new() -> Self {
        Dir { tags: Vec::new() }
    }

    /// Gets all tags of this directory
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Gets the number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Gets the first tag with the given id
    pub fn get(&self, id: u16) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Gets every tag with the given id, in on-disk order
    pub fn get_all(&self, id: u16) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(move |t| t.id == id)
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Number of tags: {}", self.tags.len())?;
        for tag in &self.tags {
            writeln!(f, "    {}", tag)?;
        }
        Ok(())
    }
}

/// Decodes the IFD at the reader's current position
///
/// Offsets inside the IFD are resolved from the start of the reader, not from
/// the start of the IFD.
///
/// # Arguments
/// * `reader` - Reader positioned at the first byte of an IFD
/// * `order` - Byte order of the structure
/// * `is_big` - Whether the structure is BigTIFF
///
/// # Returns
/// The directory and the offset of the next IFD (0 at the end of the chain)
pub fn decode_dir(reader: &mut dyn SeekableReader, order: ByteOrder, is_big: bool) -> TiffResult<(Dir, u64)> {
    let handler = order.create_handler();
    read_dir(reader, handler.as_ref(), order, is_big)
}

pub(crate) fn read_dir(
    reader: &mut dyn SeekableReader,
    handler: &dyn ByteOrderHandler,
    order: ByteOrder,
    is_big: bool,
) -> TiffResult<(Dir, u64)> {
    let tag_count = ifd_utils::read_entry_count(reader, is_big, handler)
        .map_err(|e| TiffError::ifd_read("failed to read IFD tag count", e))?;
    debug!("IFD tag count: {}", tag_count);

    let mut dir = Dir::new();
    for _ in 0..tag_count {
        match tag::read_tag(reader, handler, order, is_big) {
            Ok(tag) => dir.tags.push(tag),
            Err(TiffError::UnhandledType { tag_id, type_code }) => {
                warn!("Skipping tag {:#06x} with unhandled type {}", tag_id, type_code);
            },
            Err(e) => return Err(e),
        }
    }

    let next_offset = ifd_utils::read_offset(reader, is_big, handler)
        .map_err(|e| TiffError::ifd_read("failed to read offset to next IFD", e))?;
    debug!("Read IFD with {} tags, next IFD offset: {}", dir.len(), next_offset);

    Ok((dir, next_offset))
}
