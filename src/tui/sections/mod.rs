//! Home page sections
//!
//! Each section is a unit struct implementing [`SectionView`]. The helpers
//! below keep every row within the column width and give hidden items the
//! same height as their revealed form, so reveal animations never move the
//! anchors.

mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

use crate::tui::text::{center_pad, truncate, wrap};
use crate::tui::theme::Theme;
use crate::tui::traits::SectionView;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Sections in page order
pub fn sections() -> [&'static dyn SectionView; 5] {
    [
        &HeroSection,
        &AboutSection,
        &ProjectsSection,
        &SkillsSection,
        &ContactSection,
    ]
}

pub(crate) fn blank() -> Line<'static> {
    Line::default()
}

/// Center pre-styled spans in `width` columns
pub(crate) fn center_spans(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let mut out = Vec::with_capacity(spans.len() + 1);
    out.push(Span::raw(" ".repeat(width.saturating_sub(used) / 2)));
    out.extend(spans);
    Line::from(out)
}

/// One centered row, truncated to fit
pub(crate) fn centered(text: &str, width: usize, style: Style) -> Line<'static> {
    let text = truncate(text, width);
    let pad = center_pad(&text, width);
    Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)])
}

/// Word-wrapped text, each row centered
pub(crate) fn centered_paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .iter()
        .map(|row| centered(row, width, style))
        .collect()
}

/// Word-wrapped text with a left indent
pub(crate) fn paragraph(text: &str, width: usize, indent: usize, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent.min(width.saturating_sub(1)));
    wrap(text, width.saturating_sub(pad.len()).max(1))
        .into_iter()
        .map(|row| Line::from(vec![Span::raw(pad.clone()), Span::styled(row, style)]))
        .collect()
}

/// Section title in the brand gradient over a short rule
pub(crate) fn heading(title: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let title = truncate(title, width);
    let count = title.chars().count();
    let spans = title
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(theme.gradient(i, count))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let rule = "━".repeat(title.width().min(width).min(12).max(1));
    vec![
        center_spans(spans, width),
        centered(&rule, width, Style::default().fg(theme.secondary)),
    ]
}

/// Keyboard-labelled button, e.g. `[ c Contact Me ]`
pub(crate) fn button(key: &str, label: &str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled("[ ", Style::default().fg(theme.border)),
        Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(label.to_string(), Style::default().fg(theme.foreground)),
        Span::styled(" ]", Style::default().fg(theme.border)),
    ]
}

/// Stack items, blanking those not yet revealed
///
/// A hidden item keeps its row count.
pub(crate) fn staggered(items: Vec<Vec<Line<'static>>>, visible: usize) -> Vec<Line<'static>> {
    items
        .into_iter()
        .enumerate()
        .flat_map(|(i, item)| {
            if i < visible {
                item
            } else {
                vec![blank(); item.len()]
            }
        })
        .collect()
}

/// Columns available inside a [`card`]
pub(crate) fn card_inner(width: usize) -> usize {
    width.saturating_sub(4).max(1)
}

/// Frame body rows in a rounded box `width` columns wide
///
/// Body rows must already fit [`card_inner`].
pub(crate) fn card(body: Vec<Line<'static>>, width: usize, border: Style) -> Vec<Line<'static>> {
    let inner = card_inner(width);
    let edge = "─".repeat(inner + 2);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(Span::styled(format!("╭{}╮", edge), border)));
    for row in body {
        let fill = inner.saturating_sub(row.width());
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(row.spans);
        spans.push(Span::raw(" ".repeat(fill)));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(format!("╰{}╯", edge), border)));
    lines
}

/// Lay chips out left to right, wrapping to new rows at `width`
pub(crate) fn chips(labels: &[&str], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for label in labels {
        let chip = truncate(&format!("‹{}›", label), width);
        let chip_width = chip.width();
        let gap = usize::from(used > 0);
        if used > 0 && used + gap + chip_width > width {
            rows.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.push(Span::styled(chip, style));
        used += chip_width;
    }
    if !current.is_empty() {
        rows.push(Line::from(current));
    }
    rows
}
