pub mod io;
pub mod tiff;
pub mod utils;
pub mod mknote;
pub mod commands;

pub use tiff::{decode, decode_dir, decode_tag, Dir, Tag, Tiff, TiffDecoder, TiffError, TiffResult};
pub use mknote::{MakerNote, MakerNoteParser, MakerNoteRegistry};
