// Modal overlay rendering
//
// Modals are rendered on top of the page:
// - Help modal: keyboard shortcuts and current theme
// - Logs modal: captured tracing output, newest at the bottom

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs { scroll_back } => render_logs(f, app, *scroll_back),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.accent);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Page", header_style)),
        kb("↑/↓, j/k", "Scroll"),
        kb("PgUp/PgDn", "Scroll a page"),
        kb("Home/End", "Top / bottom"),
        kb("←/→", "Move nav cursor"),
        kb("Enter", "Go to nav item"),
        kb("1-6", "Go to nav item N"),
        kb("g", "Back to top"),
        kb("c / w / a", "Contact / work / about"),
        kb("m", "Toggle menu"),
        Line::raw(""),
        Line::from(Span::styled("  Contact form", header_style)),
        kb("i", "Write a message"),
        kb("Tab", "Next field"),
        kb("Ctrl-S", "Send"),
        kb("Esc", "Stop editing"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("r / b", "Resume / back"),
        kb("t", "Cycle theme"),
        kb("y", "Copy email"),
        kb("L", "Logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.kind.name(), key_style),
        ]),
    ]);

    let area = centered_rect(40, 31, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_logs(f: &mut Frame, app: &App, scroll_back: usize) {
    let theme = &app.theme;

    let frame_area = f.area();
    let width = (frame_area.width * 90 / 100).max(40);
    let height = (frame_area.height * 80 / 100).max(10);
    let area = centered_rect(width, height, frame_area);
    let viewport = area.height.saturating_sub(2) as usize;

    let entries = app.log_buffer.snapshot();
    let back = scroll_back.min(entries.len().saturating_sub(viewport));
    let end = entries.len() - back;
    let start = end.saturating_sub(viewport);

    let lines: Vec<Line> = entries[start..end]
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => theme.destructive,
                LogLevel::Warn => theme.accent,
                LogLevel::Info => theme.success,
                LogLevel::Debug | LogLevel::Trace => theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    let position = if back > 0 {
        format!(" Logs ({} back) ", back)
    } else {
        format!(" Logs ({}) ", entries.len())
    };

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .border_type(theme.border_type)
                    .title(position)
                    .title_bottom(Line::from(" ↑/↓ scroll · End newest · Esc close ").centered()),
            ),
        area,
    );
}
