//! circpanel — circuit listing core for a text-mode relay monitor.
//!
//! Renders a live, hierarchical view of anonymization-circuit state: one
//! header row per circuit plus one row per hop, kept consistent as circuits
//! grow hop-by-hop during construction.
//!
//! ```text
//!    128.31.0.34:9101 (us)   Purpose: General, Circuit ID: 7          Built
//! │  85.8.28.4 (se)          98FBC3B2B93897A78CDD797EF549E6B62C9A8523 1 / Guard
//! │  91.121.204.76 (fr)      546387D93F8D40CFF8842BB9D3A8EC477CEDA984 2 / Middle
//! └─ 128.31.0.34 (us)        5CFA9EA136C0EA0AC096E5CEA7EB674F1207CF86 3 / Exit
//! ```
//!
//! Three pieces:
//! - [`RelayResolver`] — memoized fingerprint → (address, ORPort) lookup
//!   over a caller-supplied [`ConsensusSource`], with a sentinel fallback.
//! - [`CircuitEntry`] — one circuit's header plus ordered hop rows, rebuilt
//!   wholesale on every status/path update.
//! - the listing layout (`panel::layout`) — packs each row into a
//!   caller-supplied width under four listing modes and hands back styled
//!   `ratatui` segments for the drawing layer.
//!
//! The crate does no I/O of its own: network-status data comes in through
//! the [`ConsensusSource`] seam, and rendering stops at styled segments.

pub mod cell;
pub mod config;
pub mod directory;
pub mod panel;

pub use config::{ConfigError, ListingMode, PanelConfig};
pub use directory::{ConsensusSource, RelayInfo, RelayResolver};
pub use panel::entry::{CircuitEntry, CircuitStatus};
pub use panel::layout::LINE_OVERHEAD;
pub use panel::line::{Destination, HeaderLine, HopLine};
