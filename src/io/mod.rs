//! I/O utilities for reading TIFF data
//!
//! This module provides the reader trait and byte order strategies.

pub mod seekable;
pub mod byte_order;
