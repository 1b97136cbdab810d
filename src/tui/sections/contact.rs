use super::{blank, card, card_inner, centered_paragraph, heading, staggered};
use crate::content::{
    CONTACT_FORM_HEADING, CONTACT_HEADING, CONTACT_INFO, CONTACT_INFO_HEADING,
    CONTACT_SOCIAL_HEADING, CONTACT_SUBTITLE, SOCIAL_LINKS,
};
use crate::page::contact::FormField;
use crate::page::reveal::Stagger;
use crate::page::section::SectionId;
use crate::tui::text::{tail, truncate, wrap};
use crate::tui::theme::Theme;
use crate::tui::traits::{RenderContext, SectionView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Text rows inside the message box; the box never grows with its contents
pub const MESSAGE_ROWS: usize = 4;

const CURSOR: &str = "▏";

pub struct ContactSection;

impl SectionView for ContactSection {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let width = ctx.width;

        let mut intro = heading(CONTACT_HEADING, width, theme);
        intro.extend(centered_paragraph(CONTACT_SUBTITLE, width, theme.subtle()));

        let border = Style::default().fg(theme.border);
        let items = vec![
            intro,
            card(form_rows(ctx, card_inner(width)), width, border),
            card(info_rows(theme, card_inner(width)), width, border),
        ];

        let mut lines = vec![blank()];
        lines.extend(staggered(items, ctx.visible_items(Stagger::SECTION)));
        lines.push(blank());
        lines
    }
}

fn form_rows(ctx: &RenderContext, width: usize) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let form = ctx.form;

    let mut rows = vec![
        Line::from(Span::styled(
            truncate(CONTACT_FORM_HEADING, width),
            theme.heading(),
        )),
        blank(),
    ];

    for field in [FormField::Name, FormField::Email, FormField::Message] {
        let focused = ctx.editing && form.focus() == field;
        rows.push(Line::from(Span::styled(
            truncate(field.label(), width),
            Style::default().fg(theme.foreground),
        )));
        rows.extend(field_box(ctx, field, focused, width));
    }

    rows.push(blank());
    rows.push(send_button(ctx, width));
    rows.push(hint_row(ctx, width));
    rows
}

/// Bordered input; single-line fields show their tail, the message box its
/// last rows
fn field_box(
    ctx: &RenderContext,
    field: FormField,
    focused: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let inner = card_inner(width);
    let value = ctx.form.value(field);
    let cursor = if focused && ctx.cursor_visible() {
        CURSOR
    } else {
        " "
    };
    let text_style = Style::default().fg(theme.foreground);
    let rows_for = |text: String| Line::from(Span::styled(text, text_style));

    let body: Vec<Line<'static>> = if value.is_empty() && !focused {
        let mut body = vec![Line::from(Span::styled(
            truncate(field.placeholder(), inner),
            theme.subtle(),
        ))];
        if field == FormField::Message {
            body.resize(MESSAGE_ROWS, blank());
        }
        body
    } else if field == FormField::Message {
        let mut wrapped = wrap(value, inner);
        if let Some(last) = wrapped.last_mut() {
            if last.width() < inner {
                last.push_str(cursor);
            }
        }
        let skip = wrapped.len().saturating_sub(MESSAGE_ROWS);
        let mut body: Vec<Line<'static>> = wrapped.into_iter().skip(skip).map(rows_for).collect();
        body.resize(MESSAGE_ROWS, blank());
        body
    } else {
        let shown = tail(value, inner.saturating_sub(1));
        vec![rows_for(format!("{}{}", shown, cursor))]
    };

    let border = if focused {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    card(body, width, border)
}

fn send_button(ctx: &RenderContext, width: usize) -> Line<'static> {
    let theme = ctx.theme;
    let label = if ctx.form.is_submitting() {
        format!(" {} Sending... ", ctx.spinner_char())
    } else {
        " ➤ Send Message ".to_string()
    };

    let style = if ctx.form.is_submitting() {
        theme.subtle()
    } else if ctx.editing && ctx.form.focus() == FormField::Send {
        theme.focused()
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(truncate(&label, width), style))
}

/// Always exactly one row so validation hints never shift the layout
fn hint_row(ctx: &RenderContext, width: usize) -> Line<'static> {
    let theme = ctx.theme;
    let (text, style) = match ctx.form.hint() {
        Some(error) => (
            format!("⚠ {}", error),
            Style::default().fg(theme.destructive),
        ),
        None if ctx.editing => (
            "Tab next field · Ctrl-S send · Esc done".to_string(),
            theme.subtle(),
        ),
        None => ("Press i to write a message".to_string(), theme.subtle()),
    };
    Line::from(Span::styled(truncate(&text, width), style))
}

fn info_rows(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(theme.muted);
    let value_style = Style::default().fg(theme.foreground);

    let mut rows = vec![
        Line::from(Span::styled(
            truncate(CONTACT_INFO_HEADING, width),
            theme.heading(),
        )),
        blank(),
    ];
    for info in CONTACT_INFO {
        let icon = match info.label {
            "Email" => "✉",
            "Phone" => "☎",
            _ => "⌖",
        };
        let head = format!("{} {:<9}", icon, info.label);
        let value = truncate(info.value, width.saturating_sub(head.width()));
        rows.push(Line::from(vec![
            Span::styled(head, label_style),
            Span::styled(value, value_style),
        ]));
    }
    rows.push(Line::from(Span::styled(
        truncate("Press y to copy the email address", width),
        theme.subtle(),
    )));

    rows.push(blank());
    rows.push(Line::from(Span::styled(
        truncate(CONTACT_SOCIAL_HEADING, width),
        theme.heading(),
    )));
    for link in SOCIAL_LINKS {
        let head = format!("↗ {:<9}", link.name);
        let url = truncate(link.url, width.saturating_sub(head.width()));
        rows.push(Line::from(vec![
            Span::styled(head, Style::default().fg(theme.secondary)),
            Span::styled(url, label_style),
        ]));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::contact::ContactForm;
    use crate::tui::traits::Reveal;
    use std::time::Instant;

    fn render(form: &ContactForm, editing: bool) -> Vec<Line<'static>> {
        let theme = Theme::default();
        let ctx = RenderContext {
            theme: &theme,
            width: 60,
            viewport_height: 0,
            now: Instant::now(),
            reveal: Reveal::All,
            form,
            editing,
            animation_frame: 0,
        };
        ContactSection.lines(&ctx)
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_long_message_does_not_grow_section() {
        let empty = render(&ContactForm::new(), true);

        let mut form = ContactForm::new();
        form.message = "lorem ipsum dolor sit amet ".repeat(40);
        let full = render(&form, true);

        assert_eq!(empty.len(), full.len());
    }

    #[test]
    fn test_placeholder_and_hint() {
        let idle = text(&render(&ContactForm::new(), false));
        assert!(idle.contains("your.email@example.com"));
        assert!(idle.contains("Press i to write a message"));

        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        let invalid = render(&form, true);
        assert!(text(&invalid).contains("Please fill out this field."));
        assert_eq!(invalid.len(), render(&ContactForm::new(), true).len());
    }

    #[test]
    fn test_submitting_shows_progress() {
        let mut form = ContactForm::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Hello".to_string();
        assert!(form.begin_submit().is_ok());

        let rendered = text(&render(&form, true));
        assert!(rendered.contains("Sending..."));
        assert!(!rendered.contains("Send Message"));
    }
}
