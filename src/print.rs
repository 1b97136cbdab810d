// Plain-text rendering
//
// Lays out a page exactly as the TUI would at a given width, with every
// section fully revealed, and strips the styling. Used by `folio print` and
// when the TUI is disabled.

use crate::content::{BRAND, FOOTER};
use crate::page::contact::ContactForm;
use crate::page::router::Route;
use crate::tui::theme::Theme;
use crate::tui::traits::{RenderContext, Reveal};
use crate::tui::views::{home, resume};
use anyhow::{Context, Result};
use ratatui::text::Line;
use std::io::Write;
use std::time::Instant;

/// Render `route` at `width` columns as plain text
pub fn render(route: Route, width: usize) -> String {
    let theme = Theme::default();

    let lines = match route {
        Route::Home => {
            let form = ContactForm::new();
            let ctx = RenderContext {
                theme: &theme,
                width,
                viewport_height: 0,
                now: Instant::now(),
                reveal: Reveal::All,
                form: &form,
                editing: false,
                animation_frame: 0,
            };
            home::compose(ctx, None).lines
        }
        Route::Resume => resume::resume_lines(&theme, width),
    };

    let mut out = String::new();
    out.push_str(BRAND);
    out.push('\n');
    for line in &lines {
        out.push_str(plain(line).trim_end());
        out.push('\n');
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}

fn plain(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Write a page to stdout
pub fn print_page(route: Route, width: usize) -> Result<()> {
    tracing::debug!(route = route.path(), width, "Printing page");
    let text = render(route, width);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}
