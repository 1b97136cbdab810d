// Mobile menu overlay
//
// Dropdown under the nav bar listing every nav item. Opening or closing it
// never touches the page underneath.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 22;

/// Render the open menu anchored to the top-right of `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let nav = app.home.nav();

    let height = (nav.items().len() as u16 + 2).min(area.height);
    let width = MENU_WIDTH.min(area.width);
    let menu = Rect::new(area.right().saturating_sub(width), area.y, width, height);

    // Borders plus the " N " prefix
    let label_width = (width as usize).saturating_sub(5);

    let lines: Vec<Line> = nav
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let active = item.is_active(app.home.active());
            let style = if i == nav.cursor() {
                theme.focused()
            } else if active {
                theme.active()
            } else {
                Style::default().fg(theme.foreground)
            };
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.muted)),
                Span::styled(format!("{:<pad$}", item.label, pad = label_width), style),
            ])
        })
        .collect();

    f.render_widget(Clear, menu);
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.secondary))
                    .title(" Menu "),
            ),
        menu,
    );
}
