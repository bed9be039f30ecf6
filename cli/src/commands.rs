pub mod lookup;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use hosthunter_common::config::Config;
use tracing::level_filters::LevelFilter;

use crate::export::{DEFAULT_OUTPUT, ExportFormat};

/// Spelling of the file input flag on the command line.
const LEGACY_FILE_FLAG: &str = "-iF";

#[derive(Parser, Debug)]
#[command(name = "hosthunter", version)]
#[command(about = "Resolve IPv4 addresses to hostnames via reverse DNS.")]
#[command(override_usage = "hosthunter (-i <IP-ADDRESSES> | -iF <FILE-PATH>) [-o [<OUTPUT-FILE>]]")]
pub struct CommandLine {
    /// Comma separated IPv4 addresses, e.g. "10.0.0.1,10.0.0.2"
    #[arg(short = 'i', long = "input", value_name = "IP-ADDRESSES")]
    pub input: Option<String>,

    /// File with one IPv4 address per line (-iF <FILE-PATH>)
    #[arg(long = "input-file", value_name = "FILE-PATH")]
    pub input_file: Option<PathBuf>,

    /// Save the results to a file [default file: output.csv]
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT-FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_OUTPUT
    )]
    pub output: Option<PathBuf>,

    /// Output file format. Inferred from the file extension when omitted
    #[arg(long, value_enum, requires = "output")]
    pub format: Option<ExportFormat>,

    /// Less decoration, repeat to also hide the summary and info logs
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// More logging, repeat for trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse_from(normalize_args(std::env::args_os()))
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (q, _) if q >= 2 => LevelFilter::WARN,
            (_, 0) => LevelFilter::INFO,
            (_, 1) => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Rewrites `-iF` into `--input-file`. Multi letter short flags are not
/// something clap parses, it would read `-iF` as `-i F`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == LEGACY_FILE_FLAG {
                OsString::from("--input-file")
            } else {
                arg
            }
        })
        .collect()
}
