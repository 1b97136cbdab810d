// Navigation bar component
//
// Pinned above the page. Brand on the left, one control per nav item on the
// right. Transparent over the hero, solid once the page has scrolled. On
// compact terminals the items collapse into a menu toggle.

use crate::content::BRAND;
use crate::page::nav::NavKind;
use crate::page::router::Route;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let nav = app.home.nav();
    let solid = nav.is_scrolled() || app.router.current() == Route::Resume;

    let block = if solid {
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.secondary))
            .style(Style::default().bg(theme.background))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    let brand = brand_spans(app);
    let brand_width: usize = brand.iter().map(|s| s.width()).sum();

    let controls = if is_collapsed(app, area.width) {
        let label = if nav.is_mobile_menu_open() {
            "✕ Close (m)"
        } else {
            "☰ Menu (m)"
        };
        vec![Span::styled(label, Style::default().fg(theme.foreground))]
    } else {
        item_spans(app)
    };

    let controls_width: usize = controls.iter().map(|s| s.width()).sum();
    let gap = (inner.width as usize).saturating_sub(brand_width + controls_width);

    let mut spans = brand;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(controls);
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Whether the items fold into the menu toggle at `width` columns
///
/// True on compact terminals, and whenever brand plus items overflow the bar.
pub fn is_collapsed(app: &App, width: u16) -> bool {
    if Breakpoint::from_width(width).collapses_nav() {
        return true;
    }
    let inner = (width as usize).saturating_sub(2);
    let brand: usize = brand_spans(app).iter().map(|s| s.width()).sum();
    let items: usize = item_spans(app).iter().map(|s| s.width()).sum();
    brand + items > inner
}

fn brand_spans(app: &App) -> Vec<Span<'static>> {
    vec![
        Span::styled("◆ ", Style::default().fg(app.theme.accent)),
        Span::styled(
            BRAND,
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]
}

/// Inline items with number shortcuts, active highlight and cursor
fn item_spans(app: &App) -> Vec<Span<'static>> {
    let theme = &app.theme;
    let nav = app.home.nav();
    let on_resume = app.router.current() == Route::Resume;

    let mut spans = Vec::new();
    for (i, item) in nav.items().iter().enumerate() {
        let active = match item.kind {
            NavKind::ScrollTarget(_) => !on_resume && item.is_active(app.home.active()),
            NavKind::ExternalRoute(path) => on_resume && path == Route::Resume.path(),
        };

        let style = if i == nav.cursor() && !app.editing {
            theme.focused()
        } else if active {
            theme.active()
        } else {
            Style::default().fg(theme.foreground)
        };

        spans.push(Span::styled(format!("{}", i + 1), Style::default().fg(theme.muted)));
        spans.push(Span::styled(format!(" {} ", item.label), style));
        spans.push(Span::raw(" "));
    }
    spans
}

