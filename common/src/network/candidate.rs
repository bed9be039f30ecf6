//! # Candidate Classification
//!
//! Every input string is one of:
//! * A single IPv4 address in dotted-quad form (e.g., `192.168.1.5`).
//! * A CIDR indicator, i.e. anything containing a `/` (e.g., `10.0.0.0/24`).
//! * Malformed text, which still gets a row in the results.
//!
//! CIDR blocks are detected, never expanded. A set that contains them is
//! rejected as a whole by [`validate`].

use std::fmt;
use std::net::Ipv4Addr;

use tracing::debug;

use crate::error::InputError;

/// A classified input string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Candidate {
    /// A well formed IPv4 address, ready to be looked up.
    Host { raw: String, addr: Ipv4Addr },
    /// Anything containing `/`. The prefix is not checked.
    CidrRange { raw: String },
    /// Neither of the above. Recorded as invalid, never looked up.
    Malformed { raw: String },
}

impl Candidate {
    /// Classifies one string.
    ///
    /// The `/` check comes first, so `1.2.3.4/99` and `foo/bar` are both
    /// CIDR indicators.
    pub fn classify(s: &str) -> Self {
        let raw = s.to_string();

        if is_cidr_indicator(s) {
            return Self::CidrRange { raw };
        }

        match parse_host(s) {
            Some(addr) => Self::Host { raw, addr },
            None => Self::Malformed { raw },
        }
    }

    /// The input exactly as given (after trimming).
    pub fn raw(&self) -> &str {
        match self {
            Self::Host { raw, .. } | Self::CidrRange { raw } | Self::Malformed { raw } => raw,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host { .. })
    }

    pub fn is_cidr(&self) -> bool {
        matches!(self, Self::CidrRange { .. })
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

/// Classifies the whole input set and applies the CIDR gate.
///
/// * CIDR together with at least one valid address: [`InputError::MixedAddressKinds`].
/// * CIDR without any valid address: [`InputError::UnsupportedCidr`].
///
/// Malformed entries on their own never abort; they come back as
/// [`Candidate::Malformed`] in input order.
pub fn validate<S: AsRef<str>>(addresses: &[S]) -> Result<Vec<Candidate>, InputError> {
    let candidates: Vec<Candidate> = addresses
        .iter()
        .map(|s| Candidate::classify(s.as_ref()))
        .collect();

    let has_cidr = candidates.iter().any(Candidate::is_cidr);
    let has_hosts = candidates.iter().any(Candidate::is_host);

    match (has_cidr, has_hosts) {
        (true, true) => Err(InputError::MixedAddressKinds),
        (true, false) => Err(InputError::UnsupportedCidr),
        _ => {
            let malformed = candidates
                .iter()
                .filter(|c| matches!(c, Candidate::Malformed { .. }))
                .count();
            debug!(total = candidates.len(), malformed, "classified candidates");
            Ok(candidates)
        }
    }
}

/// Presence of a slash is enough.
pub fn is_cidr_indicator(s: &str) -> bool {
    s.contains('/')
}

/// Parses a dotted quad: four decimal octets in `0..=255`, nothing else.
pub fn parse_host(s: &str) -> Option<Ipv4Addr> {
    s.parse::<Ipv4Addr>().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
