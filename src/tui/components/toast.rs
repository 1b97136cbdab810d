//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders in the bottom-right corner, above the footer, on top of all other
//! content. Esc dismisses it early.

use crate::page::contact::{Notification, NotificationVariant};
use crate::tui::text::{truncate, wrap};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Widest a toast gets, borders included
const MAX_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Destructive,
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    /// Plain message, 2 seconds
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: message.into(),
            description: None,
            variant: ToastVariant::Info,
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    /// Form submit result, 4 seconds so the description can be read
    pub fn from_notification(notification: &Notification) -> Self {
        Self {
            title: notification.title.to_string(),
            description: Some(notification.description.to_string()),
            variant: match notification.variant {
                NotificationVariant::Success => ToastVariant::Success,
                NotificationVariant::Destructive => ToastVariant::Destructive,
            },
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let accent = match self.variant {
            ToastVariant::Info => theme.primary,
            ToastVariant::Success => theme.success,
            ToastVariant::Destructive => theme.destructive,
        };

        // 4 = border plus one column of padding on each side
        let longest = self
            .description
            .as_deref()
            .map_or(0, UnicodeWidthStr::width)
            .max(self.title.width());
        let width = (longest as u16 + 4)
            .min(MAX_WIDTH)
            .min(area.width.saturating_sub(2));
        let text_width = width.saturating_sub(4) as usize;

        let mut lines = vec![Line::from(Span::styled(
            truncate(&self.title, text_width),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))];
        if let Some(description) = &self.description {
            lines.extend(
                wrap(description, text_width)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, Style::default().fg(theme.foreground)))),
            );
        }

        let height = (lines.len() as u16 + 2).min(area.height);
        let x = area.right().saturating_sub(width + 1);
        let y = area.bottom().saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.background));

        f.render_widget(Clear, toast_area);
        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .style(Style::default().bg(theme.background)),
            toast_area,
        );
    }
}
