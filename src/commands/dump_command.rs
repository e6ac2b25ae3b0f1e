//! TIFF structure dump command
//!
//! Decodes the TIFF block of a file and prints every directory. With
//! `--makernote` it also follows the Exif sub-IFD of IFD0 and decodes the
//! maker note found there through the vendor registry.

use clap::ArgMatches;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};

use crate::commands::command_traits::Command;
use crate::io::seekable::{OffsetReader, SeekableReader};
use crate::mknote::MakerNoteRegistry;
use crate::tiff::constants::tags;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd::{self, Dir};
use crate::tiff::reader::{CycleGuard, TiffDecoder};
use crate::tiff::types::Tiff;

/// Command for dumping the directories of a TIFF block
pub struct DumpCommand {
    /// Path to the input file
    input_file: String,
    /// Offset of the TIFF header inside the file
    offset: u64,
    /// Whether to reject any revisited IFD instead of self-loops only
    visited: bool,
    /// Optional cap on the IFD chain length
    max_dirs: Option<usize>,
    /// Whether to decode the maker note
    makernote: bool,
}

impl DumpCommand {
    /// Create a new dump command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new DumpCommand instance or an error
    pub fn new(args: &ArgMatches) -> TiffResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| TiffError::structural("missing input file"))?
            .clone();

        Ok(DumpCommand {
            input_file,
            offset: args.get_one::<u64>("offset").copied().unwrap_or(0),
            visited: args.get_flag("visited"),
            max_dirs: args.get_one::<usize>("max-dirs").copied(),
            makernote: args.get_flag("makernote"),
        })
    }

    /// Build the decoder from the command's options
    fn decoder(&self) -> TiffDecoder {
        let mut builder = TiffDecoder::builder();
        if self.visited {
            builder = builder.cycle_guard(CycleGuard::Visited);
        }
        if let Some(limit) = self.max_dirs {
            builder = builder.max_dirs(limit);
        }
        builder.build()
    }

    /// Open the input positioned at the TIFF header
    fn open(&self) -> TiffResult<OffsetReader<BufReader<File>>> {
        let file = File::open(&self.input_file)
            .map_err(|e| TiffError::read_failed(format!("could not open {}", self.input_file), e))?;

        OffsetReader::new(BufReader::new(file), self.offset)
            .map_err(|e| TiffError::read_failed(format!("could not seek to offset {}", self.offset), e))
    }

    /// Decode and print the maker note referenced from IFD0
    ///
    /// # Arguments
    /// * `reader` - The reader the structure was decoded from
    /// * `tiff` - The decoded structure
    fn dump_maker_note(&self, reader: &mut dyn SeekableReader, tiff: &Tiff) -> TiffResult<()> {
        let exif_dir = match read_exif_dir(reader, tiff)? {
            Some(dir) => dir,
            None => {
                println!("No Exif IFD");
                return Ok(());
            }
        };

        println!("Exif IFD");
        print!("{}", exif_dir);

        let maker_note = match exif_dir.get(tags::MAKER_NOTE) {
            Some(tag) => tag,
            None => {
                println!("No maker note");
                return Ok(());
            }
        };

        let registry = MakerNoteRegistry::with_defaults();
        match registry.parse(maker_note) {
            Some(result) => {
                let note = result?;
                println!("Maker note ({})", note.vendor);
                print!("{}", note.tiff);
            },
            None => println!("Maker note: no registered vendor recognizes the payload"),
        }

        Ok(())
    }
}

/// Decode the Exif sub-IFD pointed to from IFD0, if any
fn read_exif_dir(reader: &mut dyn SeekableReader, tiff: &Tiff) -> TiffResult<Option<Dir>> {
    let pointer = match tiff.main_dir().and_then(|dir| dir.get(tags::EXIF_IFD_POINTER)) {
        Some(tag) => tag,
        None => return Ok(None),
    };

    let offset = u64::try_from(pointer.int(0)?)
        .map_err(|_| TiffError::structural("negative Exif IFD offset"))?;
    debug!("Exif IFD at offset {}", offset);

    reader.seek(SeekFrom::Start(offset))
        .map_err(|e| TiffError::read_failed("seek to Exif IFD failed", e))?;
    let (dir, _) = ifd::decode_dir(reader, tiff.order, tiff.is_big)?;

    Ok(Some(dir))
}

impl Command for DumpCommand {
    fn execute(&self) -> TiffResult<()> {
        info!("Dumping {} from offset {}", self.input_file, self.offset);

        let mut reader = self.open()?;
        let tiff = self.decoder().decode(&mut reader)?;
        print!("{}", tiff);

        if self.makernote {
            self.dump_maker_note(&mut reader, &tiff)?;
        }

        Ok(())
    }
}
