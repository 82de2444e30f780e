//! Seam to the network-status directory.
//!
//! The panel never talks to the network itself: a [`ConsensusSource`]
//! supplies raw network-status records (plus optional display lookups), and
//! the positional parsing of those records is contained in one function so
//! the brittle field-index layout stays in a single tested place.

pub mod resolver;

pub use resolver::RelayResolver;

/// (address, ORPort) pair for a relay. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayInfo {
    pub address: String,
    pub or_port: String,
}

impl RelayInfo {
    /// Placeholder returned when a lookup fails.
    pub fn sentinel() -> Self {
        Self {
            address: "192.168.0.1".into(),
            or_port: "0".into(),
        }
    }
}

/// Provider of raw network-status data and optional display lookups.
///
/// `nickname`, `hostname`, and `locale` are served by external resolution
/// services when available; the default impls report nothing known.
pub trait ConsensusSource {
    /// Raw network-status record for a relay, if the directory has one.
    fn consensus_entry(&self, fingerprint: &str) -> Option<String>;

    /// Relay nickname from the directory.
    fn nickname(&self, _fingerprint: &str) -> Option<String> {
        None
    }

    /// Reverse-resolved hostname for a relay address.
    fn hostname(&self, _address: &str) -> Option<String> {
        None
    }

    /// Two-letter locale for a relay address.
    fn locale(&self, _address: &str) -> Option<String> {
        None
    }
}

/// Pull the address and ORPort out of a raw network-status record.
///
/// The first line is space-delimited with the address at field index 6 and
/// the port at index 7. Anything with fewer than 8 fields is a failed
/// lookup.
pub fn parse_consensus_entry(entry: &str) -> Option<RelayInfo> {
    let first = entry.lines().next()?;
    let fields: Vec<&str> = first.split(' ').collect();
    if fields.len() < 8 {
        return None;
    }
    Some(RelayInfo {
        address: fields[6].to_string(),
        or_port: fields[7].to_string(),
    })
}
