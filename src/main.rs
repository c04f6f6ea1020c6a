use clap::{Parser, ValueEnum};
use log::debug;
use std::{path::PathBuf, process};
use zonefile::{parse_zone_with, render, Config, ParserError};

// the doc comments for this struct turn into the CLI help text
#[derive(Parser)]
/// Parse a DNS master file and print the records it contains.
struct Args {
    /// Zone file in RFC 1035 master file format.
    zone_file: PathBuf,

    /// TOML file with a [parser] table of options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat malformed or unknown directives as errors.
    #[arg(long)]
    strict: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Toml,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::parse(path).unwrap_or_else(|e| {
            eprintln!("Error: {}: {}", path.display(), e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    if args.strict {
        config.parser.strict_directives = true;
    }
    debug!("{:?}", config);

    if !args.zone_file.exists() {
        eprintln!("Error: File '{}' does not exist", args.zone_file.display());
        process::exit(1);
    }

    let zone = match parse_zone_with(&args.zone_file, &config.parser) {
        Ok(zone) => zone,
        Err(ParserError::Io(e)) => {
            eprintln!("Error: cannot read '{}': {}", args.zone_file.display(), e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error parsing zone file: {}", e);
            process::exit(1);
        }
    };

    match args.format {
        Format::Text => print!("{}", zone),
        Format::Toml => match render::to_toml(&zone) {
            Ok(out) => print!("{}", out),
            Err(e) => {
                eprintln!("Error rendering zone: {}", e);
                process::exit(1);
            }
        },
    }
}
