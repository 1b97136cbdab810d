use super::{blank, button, card, card_inner, center_spans, heading, paragraph, staggered};
use crate::content::ABOUT;
use crate::page::reveal::Stagger;
use crate::page::section::SectionId;
use crate::tui::text::wrap;
use crate::tui::traits::{RenderContext, SectionView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const FEATURE_ICONS: [&str; 3] = ["</>", "⚡", "♥"];

pub struct AboutSection;

impl SectionView for AboutSection {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let width = ctx.width;

        let mut items = vec![heading(ABOUT.heading, width, theme)];

        let mut story = paragraph(
            ABOUT.intro,
            width,
            0,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        );
        for text in ABOUT.paragraphs {
            story.push(blank());
            story.extend(paragraph(text, width, 0, theme.subtle()));
        }
        items.push(story);

        let border = Style::default().fg(theme.border);
        let inner = card_inner(width);
        for (feature, icon) in ABOUT.features.iter().zip(FEATURE_ICONS) {
            let mut body = vec![Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(theme.accent)),
                Span::styled(feature.title.to_string(), theme.heading()),
            ])];
            body.extend(
                wrap(feature.description, inner)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, theme.subtle()))),
            );
            items.push(card(body, width, border));
        }

        items.push(vec![center_spans(button("r", ABOUT.resume_label, theme), width)]);

        let mut lines = vec![blank()];
        lines.extend(staggered(items, ctx.visible_items(Stagger::SECTION)));
        lines.push(blank());
        lines
    }
}
