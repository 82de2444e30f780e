//! One circuit's listing entry: construction and the status/path update
//! cycle.

use std::fmt;

use crate::directory::{ConsensusSource, RelayResolver};

use super::line::{HeaderLine, HopLine};

/// Build state of a circuit, as reported by the update feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitStatus {
    Launched,
    Extended,
    Built,
    Failed,
    Closed,
    Unknown,
}

impl CircuitStatus {
    /// Parse the feed's status vocabulary, case-insensitively.
    ///
    /// Anything unrecognized is [`CircuitStatus::Unknown`], which every
    /// consumer treats as not-built.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "LAUNCHED" => CircuitStatus::Launched,
            "EXTENDED" => CircuitStatus::Extended,
            "BUILT" => CircuitStatus::Built,
            "FAILED" => CircuitStatus::Failed,
            "CLOSED" => CircuitStatus::Closed,
            _ => CircuitStatus::Unknown,
        }
    }

    pub fn is_built(self) -> bool {
        matches!(self, CircuitStatus::Built)
    }
}

impl fmt::Display for CircuitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CircuitStatus::Launched => "Launched",
            CircuitStatus::Extended => "Extended",
            CircuitStatus::Built => "Built",
            CircuitStatus::Failed => "Failed",
            CircuitStatus::Closed => "Closed",
            CircuitStatus::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}

/// One live circuit in the connection panel: a header row plus a row per
/// hop in the current path.
pub struct CircuitEntry {
    circuit_id: u64,
    status: CircuitStatus,
    path: Vec<String>,
    header: HeaderLine,
    hops: Vec<HopLine>,
}

impl CircuitEntry {
    /// Build an entry for a newly observed circuit.
    ///
    /// The purpose label is normalized to a capitalized first letter with
    /// the rest lowercased.
    pub fn new<S: ConsensusSource>(
        circuit_id: u64,
        status: CircuitStatus,
        purpose: &str,
        path: Vec<String>,
        resolver: &mut RelayResolver<S>,
    ) -> Self {
        let mut entry = Self {
            circuit_id,
            status,
            path: Vec::new(),
            header: HeaderLine::new(circuit_id, normalize_purpose(purpose)),
            hops: Vec::new(),
        };
        entry.update(status, path, resolver);
        entry
    }

    /// Apply a status/path update.
    ///
    /// Status and path change while the circuit is still being built. The
    /// hop rows are discarded and rebuilt from the new path — the rendered
    /// list is always exactly consistent with the latest (status, path)
    /// pair, with no incremental patching. The header instance is kept so
    /// references to it stay valid across updates.
    pub fn update<S: ConsensusSource>(
        &mut self,
        status: CircuitStatus,
        path: Vec<String>,
        resolver: &mut RelayResolver<S>,
    ) {
        self.status = status;
        self.hops.clear();

        if status.is_built() && !self.header.is_built() {
            if let Some(exit) = path.last() {
                let info = resolver.resolve(exit);
                let locale = resolver.source().locale(&info.address);
                self.header.mark_built(&info, exit, locale);
            }
        }

        let last = path.len().saturating_sub(1);
        for (i, fingerprint) in path.iter().enumerate() {
            let info = resolver.resolve(fingerprint);
            let role = if i == last {
                if status.is_built() {
                    "Exit"
                } else {
                    "Extending"
                }
            } else if i == 0 {
                "Guard"
            } else {
                "Middle"
            };

            let nickname = resolver.source().nickname(fingerprint);
            let hostname = resolver.source().hostname(&info.address);
            let locale = resolver.source().locale(&info.address);
            self.hops.push(HopLine::new(
                info,
                fingerprint.clone(),
                format!("{} / {role}", i + 1),
                nickname,
                hostname,
                locale,
            ));
        }
        if let Some(hop) = self.hops.last_mut() {
            hop.is_last = true;
        }

        self.path = path;
    }

    pub fn circuit_id(&self) -> u64 {
        self.circuit_id
    }

    pub fn status(&self) -> CircuitStatus {
        self.status
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn header(&self) -> &HeaderLine {
        &self.header
    }

    /// Current hop rows, first to last.
    ///
    /// Snapshot semantics: the sequence is replaced on every [`update`], so
    /// callers must re-fetch rather than hold rows across updates.
    ///
    /// [`update`]: CircuitEntry::update
    pub fn hops(&self) -> &[HopLine] {
        &self.hops
    }
}

/// Capitalize the first letter, lowercase the rest. Labels shorter than two
/// chars pass through unchanged.
fn normalize_purpose(purpose: &str) -> String {
    let mut chars = purpose.chars();
    match chars.next() {
        Some(first) if !chars.as_str().is_empty() => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        _ => purpose.to_string(),
    }
}
