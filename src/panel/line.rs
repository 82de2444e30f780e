//! Header and hop row values for the circuit listing.

use crate::directory::RelayInfo;

/// Where a circuit's header points: a placeholder until the circuit is
/// built, then the exit relay, permanently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Building,
    Resolved {
        address: String,
        or_port: String,
        fingerprint: String,
        locale: Option<String>,
    },
}

/// The circuit-wide row of a listing entry.
///
/// Created once per entry and kept across updates so references held by the
/// panel stay valid. The only mutation is [`HeaderLine::mark_built`].
#[derive(Debug, Clone)]
pub struct HeaderLine {
    circuit_id: u64,
    purpose: String,
    destination: Destination,
}

impl HeaderLine {
    pub(crate) fn new(circuit_id: u64, purpose: String) -> Self {
        Self {
            circuit_id,
            purpose,
            destination: Destination::Building,
        }
    }

    /// Record the exit relay once the circuit reaches the built state.
    ///
    /// One-way: a header that already resolved ignores further calls, so a
    /// later status change never reverts it to the placeholder.
    pub(crate) fn mark_built(&mut self, info: &RelayInfo, fingerprint: &str, locale: Option<String>) {
        if matches!(self.destination, Destination::Resolved { .. }) {
            return;
        }
        self.destination = Destination::Resolved {
            address: info.address.clone(),
            or_port: info.or_port.clone(),
            fingerprint: fingerprint.to_string(),
            locale,
        };
    }

    pub fn is_built(&self) -> bool {
        matches!(self.destination, Destination::Resolved { .. })
    }

    pub fn circuit_id(&self) -> u64 {
        self.circuit_id
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }
}

/// One hop of a circuit path.
///
/// Immutable once constructed; the entry model discards and rebuilds the
/// whole hop sequence on every update rather than patching rows in place.
#[derive(Debug, Clone)]
pub struct HopLine {
    pub(crate) address: String,
    pub(crate) or_port: String,
    pub(crate) fingerprint: String,
    pub(crate) nickname: Option<String>,
    pub(crate) hostname: Option<String>,
    pub(crate) locale: Option<String>,
    pub(crate) placement_label: String,
    pub(crate) is_last: bool,
}

impl HopLine {
    pub(crate) fn new(
        info: RelayInfo,
        fingerprint: String,
        placement_label: String,
        nickname: Option<String>,
        hostname: Option<String>,
        locale: Option<String>,
    ) -> Self {
        Self {
            address: info.address,
            or_port: info.or_port,
            fingerprint,
            nickname,
            hostname,
            locale,
            placement_label,
            is_last: false,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn or_port(&self) -> &str {
        &self.or_port
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// `"<position> / <role>"`, e.g. `"1 / Guard"`.
    pub fn placement_label(&self) -> &str {
        &self.placement_label
    }

    /// Whether this is the final hop of the current path. Controls the
    /// bracket glyph only.
    pub fn is_last(&self) -> bool {
        self.is_last
    }
}
