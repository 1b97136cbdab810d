// Views module - screen-level rendering logic
//
// Each route is a full-screen page between the pinned nav bar and footer:
// - Home: the scrolling portfolio, laid out fresh every frame
// - Resume: static resume document
//
// Drawing the home page also publishes its layout back to the page state,
// which is how the scroll tracker learns section geometry.

pub mod home;
mod modal;
pub mod resume;

use super::app::App;
use super::components::{self, background, mobile_menu, nav_bar, scrollbar};
use super::layout::{content_width, FOOTER_HEIGHT, NAV_HEIGHT};
use super::traits::{RenderContext, Reveal};
use crate::page::router::Route;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use std::time::Instant;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame
    f.render_widget(Block::default().style(app.theme.base()), f.area());

    let [nav, content, footer] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(f.area());

    app.nav_collapsed = nav_bar::is_collapsed(app, nav.width);

    if app.particles {
        background::render(f, content, &app.theme, app.animation_frame);
    }

    match app.router.current() {
        Route::Home => render_home(f, content, app),
        Route::Resume => render_resume(f, content, app),
    }

    components::render_nav(f, nav, app);
    components::render_status(f, footer, app);

    if app.router.current() == Route::Home
        && app.nav_collapsed
        && app.home.nav().is_mobile_menu_open()
    {
        mobile_menu::render(f, content, app);
    }

    if let Some(modal) = &app.modal {
        modal::render(f, modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, content, &app.theme);
    }
}

/// Centered reading column inside `area`, clear of the scrollbar
fn column(area: Rect) -> Rect {
    let width = content_width(area.width).min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_home(f: &mut Frame, area: Rect, app: &mut App) {
    let column = column(area);

    let ctx = RenderContext {
        theme: &app.theme,
        width: column.width as usize,
        viewport_height: area.height as usize,
        now: Instant::now(),
        reveal: Reveal::All,
        form: app.home.form(),
        editing: app.editing,
        animation_frame: app.animation_frame,
    };
    let doc = home::compose(ctx, Some(app.home.reveals()));

    app.home
        .set_layout(doc.anchors, doc.len(), area.height as usize);

    let (start, end) = app.home.viewport().visible_range();
    f.render_widget(Paragraph::new(doc.slice(start, end).to_vec()), column);
    scrollbar::render_scrollbar(
        f,
        area,
        app.home.viewport(),
        Style::default().fg(app.theme.secondary),
    );
}

fn render_resume(f: &mut Frame, area: Rect, app: &mut App) {
    let column = column(area);
    let lines = resume::resume_lines(&app.theme, column.width as usize);

    let viewport = &mut app.resume.viewport;
    viewport.update_dimensions(lines.len(), area.height as usize);
    let (start, end) = viewport.visible_range();

    f.render_widget(Paragraph::new(lines[start..end].to_vec()), column);
    scrollbar::render_scrollbar(
        f,
        area,
        &app.resume.viewport,
        Style::default().fg(app.theme.secondary),
    );
}
