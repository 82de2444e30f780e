//! Circuit listing: one header row per circuit plus a row per hop.
//!
//! ```text
//!    128.31.0.34:9101 (us)   Purpose: General, Circuit ID: 7          Built
//! │  85.8.28.4 (se)          98FBC3B2B93897A78CDD797EF549E6B62C9A8523 1 / Guard
//! │  91.121.204.76 (fr)      546387D93F8D40CFF8842BB9D3A8EC477CEDA984 2 / Middle
//! └─ 128.31.0.34 (us)        5CFA9EA136C0EA0AC096E5CEA7EB674F1207CF86 3 / Exit
//! ```
//!
//! The entry model rebuilds the hop rows wholesale on every status/path
//! update; the layout code packs each row into a caller-supplied width.

pub mod entry;
pub mod layout;
pub mod line;

use ratatui::style::Color;

/// Category color shared by every circuit row. The tree-bracket glyph is the
/// one segment that stays in the terminal's default style.
pub(crate) const CIRCUIT_COLOR: Color = Color::Cyan;
