//! Maker note parsing
//!
//! Vendors store opaque payloads in the MakerNote tag. Each vendor parser
//! recognizes its payload from the raw bytes and decodes the embedded IFDs.

pub mod handler;
pub mod registry;
pub mod nikon;
pub mod fujifilm;

pub use handler::{MakerNote, MakerNoteParser};
pub use registry::MakerNoteRegistry;
pub use nikon::NikonV3Parser;
pub use fujifilm::FujifilmParser;
