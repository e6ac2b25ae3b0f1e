//! TIFF format constants
//!
//! This module defines constants used throughout the TIFF decoding code,
//! replacing magic numbers with descriptive names.

/// TIFF header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// BigTIFF version number (43)
    pub const BIG_TIFF_VERSION: u16 = 43;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// Position of the first IFD offset in a BigTIFF header
    pub const BIG_TIFF_FIRST_OFFSET_POSITION: u64 = 8;
}

/// Sizes of the variant-dependent record fields
pub mod layout {
    /// Inline value slot of a classic tag record
    pub const CLASSIC_SLOT_SIZE: u64 = 4;

    /// Inline value slot of a BigTIFF tag record
    pub const BIG_SLOT_SIZE: u64 = 8;

    /// Returns the inline slot size for the given variant
    pub fn slot_size(is_big: bool) -> u64 {
        if is_big { BIG_SLOT_SIZE } else { CLASSIC_SLOT_SIZE }
    }
}

/// Field types as defined in the TIFF and BigTIFF specs
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
    pub const IFD: u16 = 13;       // 32-bit IFD offset
    pub const LONG8: u16 = 16;     // BigTIFF 64-bit unsigned integer
    pub const SLONG8: u16 = 17;    // BigTIFF 64-bit signed integer
    pub const IFD8: u16 = 18;      // BigTIFF 64-bit IFD offset
}

/// Tags that point at nested structures
pub mod tags {
    pub const EXIF_IFD_POINTER: u16 = 0x8769;    // Offset of the Exif sub-IFD
    pub const GPS_IFD_POINTER: u16 = 0x8825;     // Offset of the GPS sub-IFD
    pub const INTEROP_IFD_POINTER: u16 = 0xA005; // Offset of the Interoperability sub-IFD
    pub const MAKER_NOTE: u16 = 0x927C;          // Vendor-defined opaque payload
}
