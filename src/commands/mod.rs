//! CLI command implementations
//!
//! This module contains the commands supported by the CLI application,
//! built with the Command pattern.

pub mod command_traits;
pub mod dump_command;

pub use command_traits::{Command, CommandFactory};
pub use dump_command::DumpCommand;

use clap::ArgMatches;
use crate::tiff::errors::TiffResult;

/// Factory for creating command instances based on CLI arguments
#[derive(Default)]
pub struct ExifTiffCommandFactory;

impl ExifTiffCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifTiffCommandFactory
    }
}

impl CommandFactory for ExifTiffCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> TiffResult<Box<dyn Command>> {
        // Dumping is the only operation; maker note decoding is a flag on it.
        Ok(Box::new(DumpCommand::new(args)?))
    }
}
