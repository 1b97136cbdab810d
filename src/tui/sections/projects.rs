use super::{blank, card, card_inner, centered_paragraph, chips, heading, staggered};
use crate::content::{Project, PROJECTS, PROJECTS_HEADING, PROJECTS_SUBTITLE};
use crate::page::reveal::Stagger;
use crate::page::section::SectionId;
use crate::tui::text::{truncate, wrap};
use crate::tui::theme::Theme;
use crate::tui::traits::{RenderContext, SectionView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub struct ProjectsSection;

impl SectionView for ProjectsSection {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let width = ctx.width;

        let mut intro = heading(PROJECTS_HEADING, width, theme);
        intro.extend(centered_paragraph(PROJECTS_SUBTITLE, width, theme.subtle()));

        let mut items = vec![intro];
        items.extend(PROJECTS.iter().map(|project| project_card(project, width, theme)));

        let mut lines = vec![blank()];
        lines.extend(staggered(items, ctx.visible_items(Stagger::SECTION)));
        lines.push(blank());
        lines
    }
}

fn project_card(project: &Project, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let inner = card_inner(width);

    let mut title = vec![Span::styled(
        truncate(project.title, inner),
        theme.heading(),
    )];
    if project.featured && project.title.width() + 11 <= inner {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            "★ Featured",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let mut body = vec![Line::from(title)];
    body.extend(
        wrap(project.description, inner)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(theme.foreground)))),
    );
    body.push(Line::default());
    body.extend(chips(
        project.technologies,
        inner,
        Style::default().fg(theme.primary),
    ));
    body.push(Line::from(vec![
        Span::styled("↗ Live Demo", Style::default().fg(theme.secondary)),
        Span::raw("  "),
        Span::styled("⌥ Code", Style::default().fg(theme.muted)),
    ]));

    let border = if project.featured {
        Style::default().fg(theme.secondary)
    } else {
        Style::default().fg(theme.border)
    };
    card(body, width, border)
}
