//! Fixed-width layout for listing rows.
//!
//! Every row is assembled from the same four areas, left to right:
//!
//! ```text
//! | bracket (3) | primary + auxiliary content | gap fill | label (14) |
//! ```
//!
//! The bracket and label areas are fixed; the content area is shared
//! between a primary field (chosen by the listing mode) and an auxiliary
//! attribute summary that greedily drops whole attributes from its tail
//! until it fits. Five of the reserved cells are a minimum gap between the
//! content and the label, so 22 cells are spoken for before any content is
//! sized.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::cell::{display_width, pad_right, truncate_to_width};
use crate::config::{ListingMode, PanelConfig};

use super::line::{Destination, HeaderLine, HopLine};
use super::CIRCUIT_COLOR;

const BRACKET_CELLS: usize = 3;
const LABEL_CELLS: usize = 14;
const GAP_CELLS: usize = 5;

/// Cells reserved before any content field is sized.
pub const LINE_OVERHEAD: usize = BRACKET_CELLS + LABEL_CELLS + GAP_CELLS;

/// Fixed primary width in address mode.
const ADDRESS_CELLS: usize = 53;
/// Fixed primary width in fingerprint mode.
const FINGERPRINT_CELLS: usize = 55;
/// Auxiliary reservation in hostname mode.
const HOSTNAME_AUX_RESERVE: usize = 40;
/// Auxiliary reservation in nickname mode.
const NICKNAME_AUX_RESERVE: usize = 50;

/// Branch terminator for the final hop.
const BRACKET_LAST: &str = "└─ ";
/// Continuing trunk for interior hops.
const BRACKET_TRUNK: &str = "│  ";
/// The header is the tree root; its bracket area stays blank.
const BRACKET_HEADER: &str = "   ";

impl HopLine {
    /// Render this hop as one listing row of styled segments.
    ///
    /// The rendered text is exactly `width` cells for any `width >= 17`
    /// (the bracket and label floor); below that the fixed areas still
    /// render and the row overflows `width`.
    pub fn listing_line(&self, width: usize, config: &PanelConfig) -> Line<'static> {
        let primary = match config.listing_mode {
            ListingMode::Address => self.destination_label(ADDRESS_CELLS, config.include_locale),
            ListingMode::Hostname => self
                .hostname
                .clone()
                .unwrap_or_else(|| self.address.clone()),
            ListingMode::Fingerprint => self.fingerprint.clone(),
            ListingMode::Nickname => self
                .nickname
                .clone()
                .unwrap_or_else(|| "Unnamed".to_string()),
        };
        let content = content_for_mode(config.listing_mode, &primary, &self.attr_candidates(config.listing_mode), width);

        let bracket = if self.is_last { BRACKET_LAST } else { BRACKET_TRUNK };
        assemble(bracket, content, &self.placement_label, width, Style::default().fg(CIRCUIT_COLOR))
    }

    /// `"<address> (<locale>)"`, truncated to `max` cells. Ports are not
    /// shown on hop rows.
    fn destination_label(&self, max: usize, include_locale: bool) -> String {
        let mut label = self.address.clone();
        if include_locale {
            if let Some(locale) = &self.locale {
                label.push_str(&format!(" ({locale})"));
            }
        }
        truncate_to_width(&label, max).to_string()
    }

    /// Identity fields not already shown as the primary, most significant
    /// first. The summary drops from the tail, so the fingerprint outlives
    /// the nickname when space runs out.
    fn attr_candidates(&self, mode: ListingMode) -> Vec<String> {
        let mut attrs = Vec::new();
        match mode {
            ListingMode::Address | ListingMode::Hostname => {
                attrs.push(self.fingerprint.clone());
                if let Some(nickname) = &self.nickname {
                    attrs.push(nickname.clone());
                }
            }
            ListingMode::Fingerprint => {
                if let Some(nickname) = &self.nickname {
                    attrs.push(nickname.clone());
                }
            }
            ListingMode::Nickname => attrs.push(self.fingerprint.clone()),
        }
        attrs
    }
}

impl HeaderLine {
    /// Render the circuit-wide row.
    ///
    /// Same field arithmetic as a hop row, with the destination label as
    /// the primary field — overridden entirely by `"Building..."` until the
    /// circuit is built — and `Purpose`/`Circuit ID` as the attribute
    /// summary. Header text is bold; the trailing column shows the build
    /// state where a hop shows its placement label.
    pub fn listing_line(&self, width: usize, config: &PanelConfig) -> Line<'static> {
        let primary = match self.destination() {
            Destination::Building => "Building...".to_string(),
            Destination::Resolved { address, or_port, fingerprint, locale } => {
                if config.listing_mode == ListingMode::Fingerprint {
                    fingerprint.clone()
                } else {
                    let mut label = format!("{address}:{or_port}");
                    if config.include_locale {
                        if let Some(locale) = locale {
                            label.push_str(&format!(" ({locale})"));
                        }
                    }
                    label
                }
            }
        };
        let attrs = [
            format!("Purpose: {}", self.purpose()),
            format!("Circuit ID: {}", self.circuit_id()),
        ];
        let content = content_for_mode(config.listing_mode, &primary, &attrs, width);

        let state = if self.is_built() { "Built" } else { "Building" };
        let style = Style::default().fg(CIRCUIT_COLOR).add_modifier(Modifier::BOLD);
        assemble(BRACKET_HEADER, content, state, width, style)
    }
}

/// Size the primary and auxiliary fields for one listing mode and join
/// them into the content area text.
fn content_for_mode(mode: ListingMode, primary: &str, attrs: &[String], width: usize) -> String {
    match mode {
        ListingMode::Address => fixed_primary(primary, ADDRESS_CELLS, attrs, width),
        ListingMode::Fingerprint => fixed_primary(primary, FINGERPRINT_CELLS, attrs, width),
        ListingMode::Hostname => flexible_primary(primary, HOSTNAME_AUX_RESERVE, attrs, width),
        ListingMode::Nickname => flexible_primary(primary, NICKNAME_AUX_RESERVE, attrs, width),
    }
}

/// Primary occupies a fixed cell count; the auxiliary summary is sized
/// with whatever width remains.
fn fixed_primary(primary: &str, cells: usize, attrs: &[String], width: usize) -> String {
    let primary = pad_right(truncate_to_width(primary, cells), cells);
    let aux = attr_summary(attrs, width.saturating_sub(LINE_OVERHEAD + cells));
    primary + &aux
}

/// The auxiliary summary is sized first against its reservation; the
/// primary is then left-justified in everything that remains.
fn flexible_primary(primary: &str, aux_reserve: usize, attrs: &[String], width: usize) -> String {
    let aux = attr_summary(attrs, width.saturating_sub(LINE_OVERHEAD + aux_reserve));
    let primary_cells = width.saturating_sub(LINE_OVERHEAD + display_width(&aux));
    pad_right(primary, primary_cells) + &aux
}

/// Greedy right-truncation of the attribute summary: drop whole trailing
/// attributes until the `", "`-joined remainder fits in `width`. Never
/// splits an individual attribute's text; if nothing fits the summary is
/// empty.
fn attr_summary(attrs: &[String], width: usize) -> String {
    for keep in (0..=attrs.len()).rev() {
        let label = attrs[..keep].join(", ");
        if display_width(&label) <= width {
            return label;
        }
    }
    String::new()
}

/// Assemble the four areas into a styled line.
///
/// The content area is clamped to `width - 17` cells and the gap absorbs
/// whatever the content leaves unused, so the total is exactly `width`.
/// The bracket is the terminal's default style and is never restyled;
/// everything else carries `style`.
fn assemble(bracket: &str, content: String, label: &str, width: usize, style: Style) -> Line<'static> {
    let budget = width.saturating_sub(BRACKET_CELLS + LABEL_CELLS);
    let content = if display_width(&content) > budget {
        truncate_to_width(&content, budget).to_string()
    } else {
        content
    };
    let gap = budget - display_width(&content);

    Line::from(vec![
        Span::raw(bracket.to_string()),
        Span::styled(content, style),
        Span::styled(" ".repeat(gap), style),
        Span::styled(pad_right(label, LABEL_CELLS), style),
    ])
}
