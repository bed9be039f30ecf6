//! The lookup pass.
//!
//! Walks the classified candidates strictly in order, one blocking lookup at
//! a time, and produces exactly one [`AddressRecord`] per candidate. A failed
//! lookup is recorded and the walk moves on; nothing here aborts the run.

use tracing::{debug, trace};

use hosthunter_common::network::candidate::Candidate;
use hosthunter_common::network::record::{AddressRecord, Outcome};

use crate::resolver::HostnameResolver;

/// Called before each candidate is handled, with its zero based position.
pub type OnLookup = Box<dyn Fn(usize, &Candidate)>;

/// Resolves every candidate and returns the records in input order.
///
/// Only [`Candidate::Host`] entries reach the resolver. CIDR indicators should
/// have been rejected by validation already; if one slips through it is
/// recorded as invalid like any other non-address.
pub fn perform_lookups<R>(
    candidates: &[Candidate],
    resolver: &R,
    on_lookup: Option<OnLookup>,
) -> Vec<AddressRecord>
where
    R: HostnameResolver + ?Sized,
{
    let mut records: Vec<AddressRecord> = Vec::with_capacity(candidates.len());

    for (idx, candidate) in candidates.iter().enumerate() {
        if let Some(cb) = &on_lookup {
            cb(idx, candidate);
        }
        records.push(lookup_one(candidate, resolver));
    }

    records
}

/// Produces the record for a single candidate.
pub fn lookup_one<R>(candidate: &Candidate, resolver: &R) -> AddressRecord
where
    R: HostnameResolver + ?Sized,
{
    let outcome = match candidate {
        Candidate::Host { addr, .. } => match resolver.reverse(*addr) {
            Ok(hostname) => {
                trace!(%addr, %hostname, "resolved");
                Outcome::Resolved(hostname)
            }
            Err(e) => {
                debug!(%addr, "{e}");
                Outcome::Unresolved
            }
        },
        Candidate::CidrRange { .. } | Candidate::Malformed { .. } => {
            debug!(input = candidate.raw(), "invalid IP address format");
            Outcome::Invalid
        }
    };

    AddressRecord::new(candidate.raw(), outcome)
}
