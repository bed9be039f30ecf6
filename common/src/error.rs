use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems with the input. Any of these ends the run before a single
/// lookup is made.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input given. Usage: hosthunter -i <IP-Address or IP-Addresses> or -iF <File-Path> [-o <Output-File>]")]
    Usage,

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no IP addresses provided")]
    EmptyInput,

    #[error("only IPs are accepted, convert the CIDR into the list of IPs and update the input")]
    MixedAddressKinds,

    #[error("CIDR ranges are not handled, provide a list of IPs instead")]
    UnsupportedCidr,
}
