//! Memoized fingerprint → relay address resolution.

use std::collections::HashMap;

use tracing::debug;

use super::{parse_consensus_entry, ConsensusSource, RelayInfo};

/// Memoized resolver over a [`ConsensusSource`].
///
/// Successful lookups are cached for the resolver's lifetime — a relay's
/// address is treated as static for the session, so there is no eviction.
/// Failed lookups return the sentinel and are never cached, so a later call
/// retries against the source.
pub struct RelayResolver<S> {
    source: S,
    cache: HashMap<String, RelayInfo>,
}

impl<S: ConsensusSource> RelayResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Resolve a fingerprint to its (address, ORPort) pair.
    ///
    /// Never fails: a missing or malformed network-status record yields
    /// [`RelayInfo::sentinel`].
    pub fn resolve(&mut self, fingerprint: &str) -> RelayInfo {
        if let Some(info) = self.cache.get(fingerprint) {
            return info.clone();
        }

        let Some(entry) = self.source.consensus_entry(fingerprint) else {
            debug!(fingerprint, "no consensus entry; using sentinel address");
            return RelayInfo::sentinel();
        };
        let Some(info) = parse_consensus_entry(&entry) else {
            debug!(fingerprint, "malformed consensus entry; using sentinel address");
            return RelayInfo::sentinel();
        };

        self.cache.insert(fingerprint.to_string(), info.clone());
        info
    }

    /// The backing source, for display lookups (nickname, hostname, locale).
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeDirectory {
        entries: RefCell<HashMap<String, String>>,
        queries: Cell<usize>,
    }

    impl FakeDirectory {
        fn insert(&self, fingerprint: &str, entry: &str) {
            self.entries
                .borrow_mut()
                .insert(fingerprint.into(), entry.into());
        }
    }

    impl ConsensusSource for FakeDirectory {
        fn consensus_entry(&self, fingerprint: &str) -> Option<String> {
            self.queries.set(self.queries.get() + 1);
            self.entries.borrow().get(fingerprint).cloned()
        }
    }

    fn record(address: &str, port: &str) -> String {
        format!("r nick id digest 2026-08-21 10:00:00 {address} {port} 0")
    }

    #[test]
    fn unknown_fingerprint_yields_sentinel() {
        let mut resolver = RelayResolver::new(FakeDirectory::default());
        assert_eq!(resolver.resolve("$FP_A"), RelayInfo::sentinel());
    }

    #[test]
    fn success_is_cached() {
        let dir = FakeDirectory::default();
        dir.insert("$FP_A", &record("5.6.7.8", "443"));
        let mut resolver = RelayResolver::new(dir);

        let first = resolver.resolve("$FP_A");
        let second = resolver.resolve("$FP_A");
        assert_eq!(first, second);
        assert_eq!(first.address, "5.6.7.8");
        // Second resolve came from the cache, not the source.
        assert_eq!(resolver.source().queries.get(), 1);
    }

    #[test]
    fn failure_is_not_cached() {
        let dir = FakeDirectory::default();
        dir.insert("$FP_A", "r nick id"); // fewer than 8 fields
        let mut resolver = RelayResolver::new(dir);

        assert_eq!(resolver.resolve("$FP_A"), RelayInfo::sentinel());

        // A well-formed record shows up later; the retry must hit the source.
        resolver.source().insert("$FP_A", &record("9.9.9.9", "9001"));
        let info = resolver.resolve("$FP_A");
        assert_eq!(info.address, "9.9.9.9");
        assert_eq!(info.or_port, "9001");
        assert_eq!(resolver.source().queries.get(), 2);
    }

    #[test]
    fn missing_entry_retries() {
        let dir = FakeDirectory::default();
        let mut resolver = RelayResolver::new(dir);

        assert_eq!(resolver.resolve("$FP_B"), RelayInfo::sentinel());
        resolver.source().insert("$FP_B", &record("1.2.3.4", "80"));
        assert_eq!(resolver.resolve("$FP_B").address, "1.2.3.4");
    }
}
