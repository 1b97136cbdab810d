use super::{blank, button, center_spans, centered, centered_paragraph, staggered};
use crate::content::HERO;
use crate::page::reveal::Stagger;
use crate::page::section::SectionId;
use crate::tui::traits::{RenderContext, SectionView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Full-height landing section
pub struct HeroSection;

impl SectionView for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let width = ctx.width;

        let count = HERO.title.chars().count();
        let title: Vec<Span<'static>> = HERO
            .title
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

        let mut tagline = Vec::new();
        for sentence in HERO.tagline {
            tagline.extend(centered_paragraph(sentence, width, theme.subtle()));
        }

        let contact = button("c", HERO.contact_label, theme);
        let work = button("w", HERO.work_label, theme);
        let row_width = |spans: &[Span]| spans.iter().map(|s| s.content.width()).sum::<usize>();
        let buttons = if row_width(&contact) + 3 + row_width(&work) <= width {
            let mut row = contact;
            row.push(Span::raw("   "));
            row.extend(work);
            vec![center_spans(row, width)]
        } else {
            vec![center_spans(contact, width), center_spans(work, width)]
        };

        let items = vec![
            vec![
                centered("⟨ ⟩", width, Style::default().fg(theme.secondary)),
                center_spans(title, width),
            ],
            tagline,
            buttons,
            vec![centered(
                &format!("⌄ {}", HERO.scroll_hint),
                width,
                Style::default().fg(theme.muted),
            )],
        ];

        let body = staggered(items, ctx.visible_items(Stagger::SECTION));

        // Center vertically in the viewport, with one row of air at minimum
        let spare = ctx.viewport_height.saturating_sub(body.len() + 2);
        let top = 1 + spare / 2;
        let bottom = 1 + spare - spare / 2;

        let mut lines = vec![blank(); top];
        lines.extend(body);
        lines.extend(vec![blank(); bottom]);
        lines
    }
}
