//! Tag records and the tag decoder
//!
//! A tag owns its raw value bytes. Interpreting those bytes as integers,
//! rationals, floats or text happens on demand through the accessors and
//! depends only on the stored type, count and byte order.

use std::fmt;
use std::io::Read;
use log::trace;

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::{self, SeekableReader};
use crate::tiff::constants::layout;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::field_type::{self, DataType, Format, Value};
use crate::utils::{ifd_utils, string_utils, tag_utils};

/// One field record of an IFD
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// Numeric tag identifier
    pub id: u16,
    /// Element type of the value
    pub data_type: DataType,
    /// Number of elements in the value
    pub count: u64,
    /// Absolute offset the value was fetched from, 0 when stored inline
    pub val_offset: u64,
    /// Byte order the raw value is encoded in
    pub order: ByteOrder,
    /// Raw value bytes
    pub val: Vec<u8>,
}

impl Tag {
    /// Creates a tag holding an inline value
    pub fn new(id: u16, data_type: DataType, count: u64, order: ByteOrder, val: Vec<u8>) -> Self {
        Tag {
            id,
            data_type,
            count,
            val_offset: 0,
            order,
            val,
        }
    }

    /// Raw value bytes
    pub fn raw(&self) -> &[u8] {
        &self.val
    }

    pub fn format(&self) -> Format {
        self.data_type.format()
    }

    /// Decodes element `i` of the value
    pub fn value(&self, i: u64) -> TiffResult<Value> {
        if i >= self.count {
            return Err(TiffError::invalid_value(
                self.id,
                format!("index {} out of range (count {})", i, self.count),
            ));
        }

        let info = self.data_type.info();
        let bytes = i.checked_mul(info.width)
            .and_then(|start| usize::try_from(start).ok())
            .and_then(|start| self.val.get(start..start.checked_add(info.width as usize)?))
            .ok_or_else(|| TiffError::invalid_value(self.id, format!("value too short for element {}", i)))?;

        Ok((info.decode)(bytes, self.order))
    }

    /// Decodes every element of the value
    pub fn values(&self) -> Vec<Value> {
        let info = self.data_type.info();
        self.val.chunks_exact(info.width as usize)
            .take(self.count as usize)
            .map(|bytes| (info.decode)(bytes, self.order))
            .collect()
    }

    /// Element `i` of an integer-typed tag
    pub fn int(&self, i: u64) -> TiffResult<i64> {
        self.expect_format(Format::Int)?;
        match self.value(i)? {
            Value::Unsigned(v) => i64::try_from(v)
                .map_err(|_| TiffError::invalid_value(self.id, format!("value {} overflows i64", v))),
            Value::Signed(v) => Ok(v),
            other => Err(TiffError::invalid_value(self.id, format!("{} is not an integer", other))),
        }
    }

    /// Element `i` of a rational-typed tag as (numerator, denominator)
    pub fn rat(&self, i: u64) -> TiffResult<(i64, i64)> {
        self.expect_format(Format::Rational)?;
        match self.value(i)? {
            Value::Rational(n, d) => Ok((n as i64, d as i64)),
            Value::SignedRational(n, d) => Ok((n as i64, d as i64)),
            other => Err(TiffError::invalid_value(self.id, format!("{} is not a rational", other))),
        }
    }

    /// Element `i` of a float-typed tag
    pub fn float(&self, i: u64) -> TiffResult<f64> {
        self.expect_format(Format::Float)?;
        match self.value(i)? {
            Value::Float(v) => Ok(v),
            other => Err(TiffError::invalid_value(self.id, format!("{} is not a float", other))),
        }
    }

    /// Text of an ASCII tag, cut at the first NUL
    pub fn string_val(&self) -> TiffResult<String> {
        self.expect_format(Format::String)?;
        let text = string_utils::until_nul(&self.val);
        Ok(String::from_utf8_lossy(text).into_owned())
    }

    fn expect_format(&self, expected: Format) -> TiffResult<()> {
        let actual = self.format();
        if actual != expected {
            return Err(TiffError::invalid_value(
                self.id,
                format!("expected {:?} format, tag has {:?} ({})", expected, actual, self.data_type),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#06x}) {}[{}]: {}",
               tag_utils::get_tag_name(self.id),
               self.id,
               self.data_type,
               self.count,
               tag_utils::format_value(self))
    }
}

/// Decodes the tag record at the reader's current position
///
/// The reader always ends up at the end of the record, including when the
/// type is unhandled, so the caller can move on to the next record.
///
/// # Arguments
/// * `reader` - Reader positioned at the start of a tag record
/// * `order` - Byte order of the structure
/// * `is_big` - Whether the structure is BigTIFF
///
/// # Returns
/// The decoded tag, or `TiffError::UnhandledType` for unknown type codes
pub fn decode_tag(reader: &mut dyn SeekableReader, order: ByteOrder, is_big: bool) -> TiffResult<Tag> {
    let handler = order.create_handler();
    read_tag(reader, handler.as_ref(), order, is_big)
}

pub(crate) fn read_tag(
    reader: &mut dyn SeekableReader,
    handler: &dyn ByteOrderHandler,
    order: ByteOrder,
    is_big: bool,
) -> TiffResult<Tag> {
    let id = handler.read_u16(reader)
        .map_err(|e| TiffError::ifd_read("failed to read tag id", e))?;
    let type_code = handler.read_u16(reader)
        .map_err(|e| TiffError::ifd_read("failed to read tag type", e))?;
    let count = ifd_utils::read_value_count(reader, is_big, handler)
        .map_err(|e| TiffError::ifd_read("failed to read tag count", e))?;

    let slot_size = layout::slot_size(is_big) as usize;
    let mut slot = [0u8; layout::BIG_SLOT_SIZE as usize];

    let info = match field_type::lookup(type_code) {
        Some(info) => info,
        None => {
            reader.read_exact(&mut slot[..slot_size])
                .map_err(|e| TiffError::ifd_read("failed to read tag value", e))?;
            return Err(TiffError::UnhandledType { tag_id: id, type_code });
        }
    };

    let length = info.width.checked_mul(count).ok_or_else(|| {
        TiffError::structural(format!("tag {:#06x} value length overflows (count {})", id, count))
    })?;

    if length <= slot_size as u64 {
        reader.read_exact(&mut slot[..slot_size])
            .map_err(|e| TiffError::ifd_read("failed to read tag value", e))?;

        trace!("Tag {:#06x}: {} x {} inline", id, count, info.data_type);
        return Ok(Tag::new(id, info.data_type, count, order, slot[..length as usize].to_vec()));
    }

    let offset = ifd_utils::read_offset(reader, is_big, handler)
        .map_err(|e| TiffError::ifd_read("failed to read tag value offset", e))?;

    let val = seekable::read_at(reader, offset, length)
        .map_err(|e| TiffError::read_failed("tag value read failed", e))?;
    if val.len() as u64 != length {
        return Err(TiffError::structural(format!(
            "short read of tag {:#06x} value: expected {} bytes at offset {}, got {}",
            id, length, offset, val.len()
        )));
    }

    trace!("Tag {:#06x}: {} x {} at offset {}", id, count, info.data_type, offset);
    Ok(Tag {
        id,
        data_type: info.data_type,
        count,
        val_offset: offset,
        order,
        val,
    })
}
