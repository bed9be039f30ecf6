//! The lookup engine of `hosthunter`.
//!
//! [`lookup`] drives the per-address pass over already validated candidates.
//! [`resolver`] holds the [`resolver::HostnameResolver`] abstraction the pass
//! depends on, plus the system backed implementation.

pub mod lookup;
pub mod resolver;
