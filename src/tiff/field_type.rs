//! Tag field types and the type-code dispatch table
//!
//! Every recognized type code maps to its element width and a function that
//! decodes one element from raw bytes. Codes outside the table are unhandled.

use std::fmt;

use crate::io::byte_order::ByteOrder;
use crate::tiff::constants::field_types;

/// The fixed TIFF/BigTIFF type enumeration
///
/// Variant order matches the rows of `TYPE_TABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Byte,
    Ascii,
    Short,
    Long,
    Rational,
    SByte,
    Undefined,
    SShort,
    SLong,
    SRational,
    Float,
    Double,
    Ifd,
    Long8,
    SLong8,
    Ifd8,
}

/// Broad interpretation class of a tag's data type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Int,
    Rational,
    Float,
    String,
    Undefined,
}

/// One decoded element of a tag value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Rational(u32, u32),
    SignedRational(i32, i32),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::Signed(v) => write!(f, "{}", v),
            Value::Rational(n, d) => write!(f, "{}/{}", n, d),
            Value::SignedRational(n, d) => write!(f, "{}/{}", n, d),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Decodes one element; the slice is exactly `width` bytes long
pub type DecodeFn = fn(&[u8], ByteOrder) -> Value;

/// Dispatch table entry
pub struct TypeInfo {
    pub code: u16,
    pub data_type: DataType,
    pub width: u64,
    pub decode: DecodeFn,
}

fn decode_u8(buf: &[u8], _: ByteOrder) -> Value {
    Value::Unsigned(buf[0] as u64)
}

fn decode_i8(buf: &[u8], _: ByteOrder) -> Value {
    Value::Signed(buf[0] as i8 as i64)
}

fn decode_u16(buf: &[u8], order: ByteOrder) -> Value {
    Value::Unsigned(order.u16_from(buf) as u64)
}

fn decode_i16(buf: &[u8], order: ByteOrder) -> Value {
    Value::Signed(order.u16_from(buf) as i16 as i64)
}

fn decode_u32(buf: &[u8], order: ByteOrder) -> Value {
    Value::Unsigned(order.u32_from(buf) as u64)
}

fn decode_i32(buf: &[u8], order: ByteOrder) -> Value {
    Value::Signed(order.u32_from(buf) as i32 as i64)
}

fn decode_u64(buf: &[u8], order: ByteOrder) -> Value {
    Value::Unsigned(order.u64_from(buf))
}

fn decode_i64(buf: &[u8], order: ByteOrder) -> Value {
    Value::Signed(order.u64_from(buf) as i64)
}

fn decode_rational(buf: &[u8], order: ByteOrder) -> Value {
    Value::Rational(order.u32_from(buf), order.u32_from(&buf[4..]))
}

fn decode_srational(buf: &[u8], order: ByteOrder) -> Value {
    Value::SignedRational(order.u32_from(buf) as i32, order.u32_from(&buf[4..]) as i32)
}

fn decode_f32(buf: &[u8], order: ByteOrder) -> Value {
    Value::Float(f32::from_bits(order.u32_from(buf)) as f64)
}

fn decode_f64(buf: &[u8], order: ByteOrder) -> Value {
    Value::Float(f64::from_bits(order.u64_from(buf)))
}

static TYPE_TABLE: [TypeInfo; 16] = [
    TypeInfo { code: field_types::BYTE, data_type: DataType::Byte, width: 1, decode: decode_u8 },
    TypeInfo { code: field_types::ASCII, data_type: DataType::Ascii, width: 1, decode: decode_u8 },
    TypeInfo { code: field_types::SHORT, data_type: DataType::Short, width: 2, decode: decode_u16 },
    TypeInfo { code: field_types::LONG, data_type: DataType::Long, width: 4, decode: decode_u32 },
    TypeInfo { code: field_types::RATIONAL, data_type: DataType::Rational, width: 8, decode: decode_rational },
    TypeInfo { code: field_types::SBYTE, data_type: DataType::SByte, width: 1, decode: decode_i8 },
    TypeInfo { code: field_types::UNDEFINED, data_type: DataType::Undefined, width: 1, decode: decode_u8 },
    TypeInfo { code: field_types::SSHORT, data_type: DataType::SShort, width: 2, decode: decode_i16 },
    TypeInfo { code: field_types::SLONG, data_type: DataType::SLong, width: 4, decode: decode_i32 },
    TypeInfo { code: field_types::SRATIONAL, data_type: DataType::SRational, width: 8, decode: decode_srational },
    TypeInfo { code: field_types::FLOAT, data_type: DataType::Float, width: 4, decode: decode_f32 },
    TypeInfo { code: field_types::DOUBLE, data_type: DataType::Double, width: 8, decode: decode_f64 },
    TypeInfo { code: field_types::IFD, data_type: DataType::Ifd, width: 4, decode: decode_u32 },
    TypeInfo { code: field_types::LONG8, data_type: DataType::Long8, width: 8, decode: decode_u64 },
    TypeInfo { code: field_types::SLONG8, data_type: DataType::SLong8, width: 8, decode: decode_i64 },
    TypeInfo { code: field_types::IFD8, data_type: DataType::Ifd8, width: 8, decode: decode_u64 },
];

/// Looks up a type code; `None` means the type is unhandled
pub fn lookup(code: u16) -> Option<&'static TypeInfo> {
    TYPE_TABLE.iter().find(|info| info.code == code)
}

impl DataType {
    /// Maps a type code to its data type
    pub fn from_code(code: u16) -> Option<DataType> {
        lookup(code).map(|info| info.data_type)
    }

    /// Returns the dispatch table entry for this type
    pub fn info(&self) -> &'static TypeInfo {
        // Table rows are laid out in variant order.
        &TYPE_TABLE[*self as usize]
    }

    pub fn code(&self) -> u16 {
        self.info().code
    }

    /// Size in bytes of one element
    pub fn width(&self) -> u64 {
        self.info().width
    }

    pub fn format(&self) -> Format {
        match self {
            DataType::Ascii => Format::String,
            DataType::Undefined => Format::Undefined,
            DataType::Rational | DataType::SRational => Format::Rational,
            DataType::Float | DataType::Double => Format::Float,
            _ => Format::Int,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Byte => "BYTE",
            DataType::Ascii => "ASCII",
            DataType::Short => "SHORT",
            DataType::Long => "LONG",
            DataType::Rational => "RATIONAL",
            DataType::SByte => "SBYTE",
            DataType::Undefined => "UNDEFINED",
            DataType::SShort => "SSHORT",
            DataType::SLong => "SLONG",
            DataType::SRational => "SRATIONAL",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Ifd => "IFD",
            DataType::Long8 => "LONG8",
            DataType::SLong8 => "SLONG8",
            DataType::Ifd8 => "IFD8",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
