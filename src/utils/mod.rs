//! Utility modules for common functionality
//!
//! This module provides helper functions used throughout the decoder.

pub(crate) mod ifd_utils;
pub(crate) mod string_utils;
pub(crate) mod format_utils;
pub mod tag_utils;
