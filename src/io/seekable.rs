//! Seekable reader trait and random-access helpers
//!
//! This module provides a unified trait for readers that support both
//! reading and seeking operations.

use std::io::{self, Read, Seek, SeekFrom};

/// Trait for readers that can both read and seek
///
/// Offsets handed to the decoder are absolute, so position 0 of the reader
/// must be the first byte of the TIFF structure.
pub trait SeekableReader: Read + Seek {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek> SeekableReader for T {}

/// Reads up to `len` bytes at an absolute `offset`, then restores the
/// reader's position.
///
/// Fewer bytes are returned when the input ends early. The buffer grows with
/// the data actually read, so a corrupt length never triggers a large
/// allocation on its own.
pub fn read_at(reader: &mut dyn SeekableReader, offset: u64, len: u64) -> io::Result<Vec<u8>> {
    let position = reader.stream_position()?;

    reader.seek(SeekFrom::Start(offset))?;
    let mut buffer = Vec::new();
    let result = (&mut *reader).take(len).read_to_end(&mut buffer);

    reader.seek(SeekFrom::Start(position))?;
    result.map(|_| buffer)
}

/// View of a reader that starts at a fixed base offset
///
/// Position 0 of the view is `base` in the inner reader, so a TIFF block
/// embedded in a larger file can be decoded with offsets relative to its
/// own header.
pub struct OffsetReader<R> {
    inner: R,
    base: u64,
}

impl<R: Read + Seek> OffsetReader<R> {
    /// Wraps `inner` and positions it at `base`
    pub fn new(mut inner: R, base: u64) -> io::Result<Self> {
        inner.seek(SeekFrom::Start(base))?;
        Ok(OffsetReader { inner, base })
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn relative(&self, absolute: u64) -> io::Result<u64> {
        absolute.checked_sub(self.base).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "seek before start of offset reader")
        })
    }
}

impl<R: Read> Read for OffsetReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read + Seek> Seek for OffsetReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let absolute = match pos {
            SeekFrom::Start(n) => {
                let target = self.base.checked_add(n).ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "seek offset overflows")
                })?;
                self.inner.seek(SeekFrom::Start(target))?
            },
            SeekFrom::Current(_) | SeekFrom::End(_) => {
                let current = self.inner.stream_position()?;
                let absolute = self.inner.seek(pos)?;
                if absolute < self.base {
                    self.inner.seek(SeekFrom::Start(current))?;
                }
                absolute
            },
        };
        self.relative(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_at_restores_position() {
        let mut cursor = Cursor::new(b"0123456789".to_vec());
        cursor.set_position(3);

        let bytes = read_at(&mut cursor, 6, 3).unwrap();
        assert_eq!(bytes, b"678");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_read_at_short_input() {
        let mut cursor = Cursor::new(b"0123".to_vec());

        assert_eq!(read_at(&mut cursor, 2, 10).unwrap(), b"23");
        assert!(read_at(&mut cursor, 50, 4).unwrap().is_empty());
    }

    #[test]
    fn test_offset_reader_rebases_positions() {
        let cursor = Cursor::new(b"JUNKII*\x00".to_vec());
        let mut reader = OffsetReader::new(cursor, 4).unwrap();

        let mut magic = [0u8; 2];
        reader.read_exact(&mut magic).unwrap();
        assert_eq!(&magic, b"II");
        assert_eq!(reader.stream_position().unwrap(), 2);

        assert_eq!(reader.seek(SeekFrom::Start(0)).unwrap(), 0);
        assert_eq!(reader.seek(SeekFrom::End(-1)).unwrap(), 3);
        assert!(reader.seek(SeekFrom::Current(-10)).is_err());
        assert_eq!(reader.into_inner().position(), 7);
    }
}
