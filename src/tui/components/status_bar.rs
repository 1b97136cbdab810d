// Status bar component
//
// Pinned footer: the site footer text on the left, context-sensitive key
// hints on the right. Adapts to width by dropping the footer text first.

use crate::content::FOOTER;
use crate::page::router::Route;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::text::truncate;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let width = area.width as usize;

    let hints = hints(app);
    let relay = if app.relay_configured {
        String::new()
    } else {
        "relay off │ ".to_string()
    };
    let right = format!("{}{} ", relay, hints);

    let left = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        truncate(&format!(" {}", FOOTER), width.saturating_sub(right.width() + 1))
    } else {
        String::new()
    };
    let gap = width.saturating_sub(left.width() + right.width());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(theme.muted)),
        Span::raw(" ".repeat(gap)),
        Span::styled(truncate(&right, width), Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn hints(app: &App) -> &'static str {
    if app.modal.is_some() {
        "Esc close"
    } else if app.editing {
        "Tab field │ Ctrl-S send │ Esc done"
    } else if app.router.current() == Route::Resume {
        "b back │ t theme │ ? help │ q quit"
    } else {
        "1-6 nav │ i write │ y email │ ? help │ q quit"
    }
}
