use super::{blank, heading, staggered};
use crate::content::{Skill, SKILLS_HEADING, SKILL_CATEGORIES};
use crate::page::reveal::Stagger;
use crate::page::section::SectionId;
use crate::tui::text::truncate;
use crate::tui::theme::Theme;
use crate::tui::traits::{RenderContext, SectionView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Indent of skill rows under their category
const INDENT: usize = 2;

pub struct SkillsSection;

impl SectionView for SkillsSection {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let width = ctx.width;
        let total: usize = SKILL_CATEGORIES.iter().map(|c| c.skills.len()).sum();

        let mut items = vec![heading(SKILLS_HEADING, width, theme)];
        let mut n = 0;
        for category in SKILL_CATEGORIES {
            items.push(vec![
                blank(),
                Line::from(Span::styled(
                    truncate(category.name, width),
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                )),
            ]);
            for skill in category.skills {
                items.push(skill_rows(skill, width, theme.gradient(n, total), theme));
                n += 1;
            }
        }

        let mut lines = vec![blank()];
        lines.extend(staggered(items, ctx.visible_items(Stagger::SKILLS)));
        lines.push(blank());
        lines
    }
}

/// Name and percentage on one row, the proficiency bar below
fn skill_rows(
    skill: &Skill,
    width: usize,
    color: ratatui::style::Color,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let indent = " ".repeat(INDENT.min(width));
    let usable = width.saturating_sub(INDENT);
    let level = usize::from(skill.level.min(100));

    let percent = format!("{}%", level);
    let name = truncate(skill.name, usable.saturating_sub(percent.len() + 1));
    let gap = usable.saturating_sub(name.width() + percent.len());

    let filled = level * usable / 100;
    vec![
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(name, Style::default().fg(theme.foreground)),
            Span::raw(" ".repeat(gap)),
            Span::styled(percent, theme.subtle()),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "░".repeat(usable - filled),
                Style::default().fg(theme.border),
            ),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_length_tracks_level() {
        let theme = Theme::default();
        let skill = Skill {
            name: "Git",
            level: 50,
        };
        let rows = skill_rows(&skill, 42, theme.primary, &theme);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].width(), 42);

        let bar: String = rows[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(bar.matches('█').count(), 20);
        assert_eq!(bar.matches('░').count(), 20);
    }
}
