// Resume page
//
// A single static document with its own viewport. Nothing on it affects the
// home page; leaving and coming back restores the home page as it was.

use crate::content::resume::RESUME;
use crate::page::viewport::Viewport;
use crate::tui::sections::{blank, button, center_spans, centered, heading, paragraph};
use crate::tui::text::truncate;
use crate::tui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Scroll state of the resume page
#[derive(Debug, Clone, Default)]
pub struct ResumePage {
    pub viewport: Viewport,
}

impl ResumePage {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lay out the resume at `width` columns
pub fn resume_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        blank(),
        centered(
            RESUME.name,
            width,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        centered(RESUME.headline, width, Style::default().fg(theme.secondary)),
        centered(&RESUME.contact.join(" • "), width, theme.subtle()),
        blank(),
        center_spans(button("d", RESUME.download_label, theme), width),
        blank(),
    ];

    lines.extend(heading("Professional Summary", width, theme));
    lines.extend(paragraph(RESUME.summary, width, 0, Style::default().fg(theme.foreground)));
    lines.push(blank());

    lines.extend(heading("Experience", width, theme));
    for job in RESUME.experience {
        lines.push(Line::from(Span::styled(truncate(job.role, width), theme.heading())));
        lines.push(Line::from(Span::styled(
            truncate(&format!("{} • {}", job.company, job.period), width),
            theme.subtle(),
        )));
        for highlight in job.highlights {
            lines.extend(bullet(highlight, width, theme));
        }
        lines.push(blank());
    }

    lines.extend(heading("Education", width, theme));
    for school in RESUME.education {
        lines.push(Line::from(Span::styled(
            truncate(school.degree, width),
            theme.heading(),
        )));
        lines.push(Line::from(Span::styled(
            truncate(&format!("{} • {}", school.school, school.period), width),
            theme.subtle(),
        )));
        lines.extend(paragraph(school.notes, width, 2, Style::default().fg(theme.foreground)));
        lines.push(blank());
    }

    lines.extend(heading("Skills", width, theme));
    for (category, skills) in RESUME.skills {
        let label = format!("{}: ", category);
        let indent = label.chars().count();
        let mut rows = paragraph(&skills.join(", "), width, indent, Style::default().fg(theme.foreground));
        if let Some(first) = rows.first_mut() {
            first.spans[0] = Span::styled(
                label,
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            );
        }
        lines.extend(rows);
    }

    lines.push(blank());
    lines.push(Line::from(vec![
        Span::styled("← ", Style::default().fg(theme.accent)),
        Span::styled("b", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(" Back to portfolio", theme.subtle()),
    ]));
    lines.push(blank());
    lines
}

fn bullet(text: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut rows = paragraph(text, width, 2, Style::default().fg(theme.foreground));
    if let Some(first) = rows.first_mut() {
        first.spans[0] = Span::styled("• ", Style::default().fg(theme.accent));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_resume_mentions_every_part() {
        let text = plain(&resume_lines(&Theme::default(), 80));
        assert!(text.contains("Professional Summary"));
        assert!(text.contains("Mayuri Tours And Travels"));
        assert!(text.contains("Agurchand manmull jain college"));
        assert!(text.contains("Frontend: "));
        assert!(text.contains("Back to portfolio"));
    }

    #[test]
    fn test_resume_fits_width() {
        for width in [32, 80] {
            for line in resume_lines(&Theme::default(), width) {
                assert!(line.width() <= width);
            }
        }
    }
}
