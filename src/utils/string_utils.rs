//! String utility functions
//!
//! Utilities for working with strings and text data.

/// Returns the bytes before the first NUL, or all of them if there is none
pub fn until_nul(buffer: &[u8]) -> &[u8] {
    match buffer.iter().position(|&b| b == 0) {
        Some(end) => &buffer[..end],
        None => buffer,
    }
}
