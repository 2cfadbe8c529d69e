use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// NewType wrapper for a customer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parses a raw route parameter.
    ///
    /// The parameter must be a positive decimal integer with no surrounding
    /// whitespace or sign.
    pub fn parse(raw: &str) -> Result<Self> {
        parse_positive(raw, "Customer id").map(Self)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// NewType wrapper for a bill identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(u64);

impl BillId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        parse_positive(raw, "Bill id").map(Self)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BillId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

fn parse_positive(raw: &str, label: &str) -> Result<u64> {
    if raw.is_empty() {
        anyhow::bail!("{} is missing", label);
    }

    // u64::from_str accepts a leading '+', which is not a valid identifier here
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        anyhow::bail!("{} '{}' is not a positive integer", label, raw);
    }

    let value: u64 = raw
        .parse()
        .map_err(|e| anyhow::anyhow!("{} '{}' is out of range: {}", label, raw, e))?;

    if value == 0 {
        anyhow::bail!("{} must be greater than zero", label);
    }

    Ok(value)
}
