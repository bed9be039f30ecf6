use std::fmt;

/// Hostname column for an address that resolved to nothing.
pub const NO_HOSTNAME: &str = "No hostname found";
/// Hostname column for an address that was never looked up.
pub const NOT_APPLICABLE: &str = "N/A";

/// Status column of a result row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failed,
    Invalid,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Failed => "Failed",
            Status::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a single address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Reverse lookup returned a name.
    Resolved(String),
    /// Reverse lookup ran and found nothing (or the resolver errored).
    Unresolved,
    /// Not a valid IPv4 address, so no lookup was attempted.
    Invalid,
}

/// One row of the final report. Built once, never changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressRecord {
    address: String,
    outcome: Outcome,
}

impl AddressRecord {
    pub fn new(address: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            address: address.into(),
            outcome,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn status(&self) -> Status {
        match self.outcome {
            Outcome::Resolved(_) => Status::Success,
            Outcome::Unresolved => Status::Failed,
            Outcome::Invalid => Status::Invalid,
        }
    }

    /// Hostname column, with the placeholder text for non-successful rows.
    pub fn hostname(&self) -> &str {
        match &self.outcome {
            Outcome::Resolved(name) => name,
            Outcome::Unresolved => NO_HOSTNAME,
            Outcome::Invalid => NOT_APPLICABLE,
        }
    }

    /// The three report columns in order.
    pub fn columns(&self) -> [&str; 3] {
        [self.address(), self.status().as_str(), self.hostname()]
    }
}

/// Per-status counts over a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub resolved: usize,
    pub failed: usize,
    pub invalid: usize,
}

impl Tally {
    pub fn of(records: &[AddressRecord]) -> Self {
        records.iter().fold(Self::default(), |mut tally, record| {
            match record.status() {
                Status::Success => tally.resolved += 1,
                Status::Failed => tally.failed += 1,
                Status::Invalid => tally.invalid += 1,
            }
            tally
        })
    }

    pub fn total(&self) -> usize {
        self.resolved + self.failed + self.invalid
    }
}
