/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds and pinned chrome heights; no
/// magic numbers scattered in render code.

/// Rows taken by the pinned navigation bar (content row plus borders)
pub const NAV_HEIGHT: u16 = 3;

/// Rows taken by the pinned footer
pub const FOOTER_HEIGHT: u16 = 1;

/// Widest the reading column gets, regardless of terminal width
const MAX_CONTENT_WIDTH: u16 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: nav collapses to the mobile menu, single column cards
    Compact,
    /// 60-99 cols: inline nav, single column cards
    Normal,
    /// 100+ cols: inline nav with key hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Nav items are replaced by the menu toggle
    pub fn collapses_nav(&self) -> bool {
        *self == Breakpoint::Compact
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Width of the centered reading column for a terminal `width`
///
/// Leaves one column for the scrollbar and a small gutter on each side.
pub fn content_width(width: u16) -> u16 {
    let gutter = if Breakpoint::from_width(width).at_least(Breakpoint::Normal) {
        4
    } else {
        1
    };
    width
        .saturating_sub(1 + gutter * 2)
        .min(MAX_CONTENT_WIDTH)
        .max(1)
}
