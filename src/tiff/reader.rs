//! TIFF container decoder
//!
//! Detects byte order and variant from the header, then walks the IFD chain
//! with the directory decoder.

use log::{debug, info, warn};
use std::collections::HashSet;
use std::io::{Seek, SeekFrom};

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::header;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd::{self, Dir};
use crate::tiff::types::Tiff;
use crate::utils::format_utils;
use crate::utils::ifd_utils;

/// How the decoder detects cycles in the IFD chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleGuard {
    /// Reject an IFD whose next pointer is its own offset (A -> A)
    #[default]
    Previous,
    /// Reject any pointer to an IFD already visited (A -> B -> A)
    Visited,
}

/// Builder for TiffDecoder
///
/// Provides a clean way to construct a TiffDecoder with various configurations.
#[derive(Debug, Clone, Default)]
pub struct TiffDecoderBuilder {
    cycle_guard: CycleGuard,
    max_dirs: Option<usize>,
}

impl TiffDecoderBuilder {
    /// Create a new TiffDecoderBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the cycle detection strategy
    pub fn cycle_guard(mut self, cycle_guard: CycleGuard) -> Self {
        self.cycle_guard = cycle_guard;
        self
    }

    /// Fail when the IFD chain holds more than `max_dirs` directories
    pub fn max_dirs(mut self, max_dirs: usize) -> Self {
        self.max_dirs = Some(max_dirs);
        self
    }

    /// Build the TiffDecoder
    pub fn build(self) -> TiffDecoder {
        TiffDecoder {
            cycle_guard: self.cycle_guard,
            max_dirs: self.max_dirs,
        }
    }
}

/// Decoder for TIFF and BigTIFF structures
///
/// Holds configuration only; every call to `decode` is independent.
#[derive(Debug, Clone, Default)]
pub struct TiffDecoder {
    cycle_guard: CycleGuard,
    max_dirs: Option<usize>,
}

impl TiffDecoder {
    /// Creates a decoder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TiffDecoderBuilder {
        TiffDecoderBuilder::new()
    }

    /// Decodes a TIFF structure from the given reader
    ///
    /// This method handles the core process of decoding:
    /// 1. Detect byte order (little/big endian)
    /// 2. Detect classic TIFF or BigTIFF
    /// 3. Walk the IFD chain
    ///
    /// The first byte of `reader` must be the first byte of the TIFF data.
    /// Either every reachable directory is returned or an error; an IFD that
    /// runs past the end of the input is dropped along with the rest of the
    /// chain.
    pub fn decode(&self, reader: &mut dyn SeekableReader) -> TiffResult<Tiff> {
        debug!("TiffDecoder::decode starting");

        let order = ByteOrder::detect(reader)?;
        debug!("Detected byte order: {}", order.name());
        let handler = order.create_handler();

        let is_big = format_utils::detect_tiff_variant(reader, handler.as_ref())?;
        if is_big {
            reader.seek(SeekFrom::Start(header::BIG_TIFF_FIRST_OFFSET_POSITION))
                .map_err(|e| TiffError::read_failed("could not seek to first IFD", e))?;
        }

        let first_ifd_offset = ifd_utils::read_offset(reader, is_big, handler.as_ref())
            .map_err(|e| TiffError::read_failed("could not read offset to first IFD", e))?;
        debug!("First IFD offset: {}", first_ifd_offset);

        let mut tiff = Tiff::new(order, is_big);
        tiff.dirs = self.read_dir_chain(reader, handler.as_ref(), order, is_big, first_ifd_offset)?;

        info!("Decoded {} IFDs", tiff.dirs.len());
        Ok(tiff)
    }

    /// Reads the chain of IFDs starting at the given offset
    fn read_dir_chain(
        &self,
        reader: &mut dyn SeekableReader,
        handler: &dyn ByteOrderHandler,
        order: ByteOrder,
        is_big: bool,
        first_ifd_offset: u64,
    ) -> TiffResult<Vec<Dir>> {
        let mut dirs = Vec::new();
        let mut visited = HashSet::new();
        let mut offset = first_ifd_offset;

        while offset != 0 {
            if let Some(limit) = self.max_dirs {
                if dirs.len() >= limit {
                    return Err(TiffError::structural(format!(
                        "IFD chain exceeds limit of {} directories",
                        limit
                    )));
                }
            }

            debug!("Reading IFD at offset: {}", offset);
            reader.seek(SeekFrom::Start(offset))
                .map_err(|e| TiffError::read_failed("seek to IFD failed", e))?;

            let (dir, next_offset) = match ifd::read_dir(reader, handler, order, is_big) {
                Ok(result) => result,
                Err(e @ TiffError::EndOfInput { .. }) => {
                    // The pointer to this IFD dangles past the end of the input.
                    warn!("Ignoring IFD at offset {}: {}", offset, e);
                    break;
                },
                Err(e) => return Err(e),
            };

            let prev = offset;
            visited.insert(prev);
            let recursive = match self.cycle_guard {
                CycleGuard::Previous => next_offset == prev,
                CycleGuard::Visited => visited.contains(&next_offset),
            };
            if recursive {
                return Err(TiffError::RecursiveIfd { offset: next_offset });
            }

            dirs.push(dir);
            offset = next_offset;
        }

        Ok(dirs)
    }
}

/// Decodes a TIFF structure with the default decoder configuration
pub fn decode(reader: &mut dyn SeekableReader) -> TiffResult<Tiff> {
    TiffDecoder::new().decode(reader)
}
