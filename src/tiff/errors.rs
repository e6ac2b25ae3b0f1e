//! Error types for TIFF decoding

use std::io;
use thiserror::Error;

/// TIFF-specific error types
///
/// The decoder distinguishes failures that abort a decode from the two soft
/// conditions (`UnhandledType`, `EndOfInput`) that callers are expected to
/// skip over.
#[derive(Debug, Error)]
pub enum TiffError {
    /// Malformed structure: bad magic, bad marker, unreadable or short value
    #[error("tiff: {message}{}", cause_suffix(.source))]
    Structural {
        message: String,
        #[source]
        source: Option<io::Error>,
    },

    /// Tag type code outside the recognized enumeration
    #[error("tiff: unhandled tag type {type_code} (tag {tag_id:#06x})")]
    UnhandledType { tag_id: u16, type_code: u16 },

    /// The stream ran out while reading an IFD
    #[error("tiff: {message}: {source}")]
    EndOfInput {
        message: String,
        #[source]
        source: io::Error,
    },

    /// An IFD's next pointer leads back to an IFD already visited
    #[error("tiff: recursive IFD at offset {offset}")]
    RecursiveIfd { offset: u64 },

    /// A tag accessor was used on a value it cannot interpret
    #[error("tiff: tag {tag_id:#06x}: {message}")]
    InvalidValue { tag_id: u16, message: String },
}

fn cause_suffix(source: &Option<io::Error>) -> String {
    match source {
        Some(e) => format!(": {}", e),
        None => String::new(),
    }
}

impl TiffError {
    /// Structural failure without an underlying cause
    pub fn structural(message: impl Into<String>) -> Self {
        TiffError::Structural {
            message: message.into(),
            source: None,
        }
    }

    /// Structural failure wrapping an I/O error
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        TiffError::Structural {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Classifies an I/O error raised while reading IFD structure.
    ///
    /// Running out of input becomes `EndOfInput`, everything else is structural.
    pub fn ifd_read(message: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::UnexpectedEof {
            TiffError::EndOfInput {
                message: message.into(),
                source,
            }
        } else {
            TiffError::read_failed(message, source)
        }
    }

    pub(crate) fn invalid_value(tag_id: u16, message: impl Into<String>) -> Self {
        TiffError::InvalidValue {
            tag_id,
            message: message.into(),
        }
    }

    /// Whether the condition is one a caller skips rather than aborts on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TiffError::UnhandledType { .. } | TiffError::EndOfInput { .. })
    }
}

/// Result type for TIFF operations
pub type TiffResult<T> = Result<T, TiffError>;
