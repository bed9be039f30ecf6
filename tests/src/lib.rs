//! Shared fixtures for the cross-crate tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;

use hosthunter_common::network::candidate;
use hosthunter_common::network::record::AddressRecord;
use hosthunter_core::lookup;
use hosthunter_core::resolver::{HostnameResolver, LookupError};

/// Answers from a fixed table and remembers every address it was asked about.
///
/// Addresses registered with [`ScriptedResolver::failing`] behave like a
/// resolver that could not be reached instead of one with no PTR record.
#[derive(Default)]
pub struct ScriptedResolver {
    names: HashMap<Ipv4Addr, String>,
    unreachable: HashSet<Ipv4Addr>,
    calls: RefCell<Vec<Ipv4Addr>>,
}

impl ScriptedResolver {
    pub fn new<'a>(names: impl IntoIterator<Item = (Ipv4Addr, &'a str)>) -> Self {
        Self {
            names: names.into_iter().map(|(a, n)| (a, n.to_string())).collect(),
            unreachable: HashSet::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(mut self, addr: Ipv4Addr) -> Self {
        self.unreachable.insert(addr);
        self
    }

    pub fn calls(&self) -> Vec<Ipv4Addr> {
        self.calls.borrow().clone()
    }
}

impl HostnameResolver for ScriptedResolver {
    fn reverse(&self, addr: Ipv4Addr) -> Result<String, LookupError> {
        self.calls.borrow_mut().push(addr);
        if self.unreachable.contains(&addr) {
            return Err(LookupError::Resolver {
                addr,
                reason: "temporary failure in name resolution".to_string(),
            });
        }
        self.names.get(&addr).cloned().ok_or(LookupError::NotFound(addr))
    }
}

/// Validation plus lookups, the same order the binary runs them in.
pub fn run_pipeline<S: AsRef<str>>(
    addresses: &[S],
    resolver: &ScriptedResolver,
) -> anyhow::Result<Vec<AddressRecord>> {
    let candidates = candidate::validate(addresses)?;
    Ok(lookup::perform_lookups(&candidates, resolver, None))
}
