//! Reverse DNS resolution.
//!
//! The lookup engine only talks to [`HostnameResolver`]. [`SystemResolver`]
//! is the production implementation and goes through the platform resolver
//! (`getnameinfo`), so `/etc/hosts`, nsswitch and the configured DNS servers
//! all apply. Timeouts are whatever the platform resolver uses.

use std::net::{IpAddr, Ipv4Addr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no PTR record for {0}")]
    NotFound(Ipv4Addr),

    #[error("reverse lookup for {addr} failed: {reason}")]
    Resolver { addr: Ipv4Addr, reason: String },
}

/// Anything that can turn an address into a hostname.
pub trait HostnameResolver {
    /// Returns the first name the address resolves to.
    fn reverse(&self, addr: Ipv4Addr) -> Result<String, LookupError>;
}

/// Blocking resolver backed by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl HostnameResolver for SystemResolver {
    fn reverse(&self, addr: Ipv4Addr) -> Result<String, LookupError> {
        let name = dns_lookup::lookup_addr(&IpAddr::V4(addr)).map_err(|e| LookupError::Resolver {
            addr,
            reason: e.to_string(),
        })?;

        normalize(addr, &name).ok_or(LookupError::NotFound(addr))
    }
}

/// `getnameinfo` hands back the numeric address when there is no PTR record,
/// which is treated as no name at all.
fn normalize(addr: Ipv4Addr, name: &str) -> Option<String> {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name == addr.to_string() {
        return None;
    }
    Some(name.to_string())
}
