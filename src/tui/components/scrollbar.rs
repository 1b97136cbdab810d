//! Scrollbar rendering helper
//!
//! One scrollbar for every page: it reads the page's `Viewport` and renders
//! nothing when the content fits.

use crate::page::viewport::Viewport;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a vertical scrollbar on the right edge of `area`
pub fn render_scrollbar(f: &mut Frame, area: Rect, viewport: &Viewport, style: Style) {
    if !viewport.needs_scrollbar() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(style);

    // ScrollbarState wants: content_length (how much can scroll) and position
    let content_length = viewport.max_offset();
    let mut scrollbar_state = ScrollbarState::new(content_length).position(viewport.offset());

    f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
