use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use env_logger::Env;
use log::error;
use std::process;

use exif_tiff::commands::{CommandFactory, ExifTiffCommandFactory};

fn main() {
    let matches = ClapCommand::new("exif-tiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dump the TIFF/BigTIFF directory structure of a file or EXIF block")
        .arg(
            Arg::new("input")
                .help("Input file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .help("Byte offset of the TIFF header inside the file")
                .value_name("BYTES")
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            Arg::new("visited")
                .long("visited")
                .help("Reject any IFD pointer that revisits a directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-dirs")
                .long("max-dirs")
                .help("Fail when the IFD chain is longer than this")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("makernote")
                .short('m')
                .long("makernote")
                .help("Decode the maker note of the Exif IFD")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let factory = ExifTiffCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
