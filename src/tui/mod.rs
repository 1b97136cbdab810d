// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, relay results)
// - Layered key dispatch
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod sections;
pub mod text;
pub mod theme;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::page::contact::FormField;
use crate::page::router::Route;
use crate::page::section::SectionId;
use crate::relay::EmailRelay;
use anyhow::{Context, Result};
use app::{App, RelayResult};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Frame interval; also the smooth-scroll step rate
const TICK: Duration = Duration::from_millis(50);

/// Lines per mouse wheel notch
const WHEEL_LINES: usize = 3;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, start: Route) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let relay = Arc::new(EmailRelay::new(&config.relay));
    let (relay_tx, mut relay_rx) = mpsc::channel::<RelayResult>(8);
    let mut app = App::new(&config, log_buffer, relay, relay_tx, start);

    if !app.relay_configured {
        tracing::info!("Message relay not configured; the contact form will not send");
    }

    let result = run_event_loop(&mut terminal, &mut app, &mut relay_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Three sources, whichever is ready first:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (animations, once-per-frame scroll resolution)
/// 3. Relay results from submitted contact messages
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    relay_rx: &mut mpsc::Receiver<RelayResult>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }

            Some(result) = relay_rx.recv() => {
                app.on_relay_result(result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Form → Mobile menu → Global → Page
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    if key_event.kind == KeyEventKind::Release {
        app.input.handle_key_release(key);
        return;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if let Some(modal) = app.modal.as_mut() {
        if modal.handle_input(key) == ModalAction::Close {
            app.modal = None;
            app.input.reset();
        }
        return;
    }

    // Layer 2: Form editing takes text input unfiltered so typing can repeat
    if app.editing && app.router.current() == Route::Home {
        handle_form_key(app, key_event);
        return;
    }

    // Everything below fires once per press or on the repeat schedule
    if !app.input.handle_key_press(key) {
        return;
    }

    // Layer 3: Open mobile menu, only while the nav is collapsed into it
    if app.router.current() == Route::Home
        && app.nav_collapsed
        && app.home.nav().is_mobile_menu_open()
        && handle_menu_key(app, key)
    {
        return;
    }

    // Layer 4: Global keys
    if handle_global_keys(app, key) {
        return;
    }

    // Layer 5: Page keys
    match app.router.current() {
        Route::Home => handle_home_key(app, key),
        Route::Resume => handle_resume_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key_event: KeyEvent) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let form = app.home.form_mut();

    match key_event.code {
        KeyCode::Esc => app.editing = false,
        KeyCode::Char('s') if ctrl => app.submit(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Enter => match form.focus() {
            FormField::Send => app.submit(),
            FormField::Message => form.newline(),
            FormField::Name | FormField::Email => form.focus_next(),
        },
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !ctrl => form.insert_char(c),
        _ => {}
    }
}

/// Keys for the open mobile menu; returns true if consumed
fn handle_menu_key(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.home.nav_mut().cursor_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.home.nav_mut().cursor_next(),
        KeyCode::Enter => {
            let index = app.home.nav().cursor();
            let outcome = app.home.activate_nav_from_menu(index);
            app.apply_nav(outcome);
        }
        KeyCode::Char(c @ '1'..='6') => {
            let outcome = app.home.activate_nav_from_menu(digit_index(c));
            app.apply_nav(outcome);
        }
        KeyCode::Esc | KeyCode::Char('m') => app.home.nav_mut().close_mobile_menu(),
        _ => return false,
    }
    true
}

/// Global keys (work on every page); returns true if consumed
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        KeyCode::Char('L') => app.modal = Some(Modal::logs()),
        KeyCode::Char('t') => app.next_theme(),
        KeyCode::Char('y') => app.copy_email(),
        KeyCode::Char('r') => app.navigate(Route::Resume.path()),
        KeyCode::Esc if app.toast.is_some() => app.toast = None,
        _ => return false,
    }
    true
}

fn handle_home_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.home.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.home.scroll_down(1),
        KeyCode::PageUp => app.home.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.home.page_down(),
        KeyCode::Home => app.home.scroll_to_top(),
        KeyCode::End => app.home.scroll_to_bottom(),
        KeyCode::Left | KeyCode::Char('h') => app.home.nav_mut().cursor_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.home.nav_mut().cursor_next(),
        KeyCode::Enter => {
            let index = app.home.nav().cursor();
            let outcome = app.home.activate_nav(index);
            app.apply_nav(outcome);
        }
        KeyCode::Char(c @ '1'..='6') => {
            let outcome = app.home.activate_nav(digit_index(c));
            app.apply_nav(outcome);
        }
        KeyCode::Char('m') if app.nav_collapsed => app.home.toggle_mobile_menu(),
        KeyCode::Char('g') => {
            app.home.scroll_to(SectionId::Hero);
        }
        KeyCode::Char('c') => {
            app.home.scroll_to(SectionId::Contact);
        }
        KeyCode::Char('w') => {
            app.home.scroll_to(SectionId::Projects);
        }
        KeyCode::Char('a') => {
            app.home.scroll_to(SectionId::About);
        }
        KeyCode::Char('i') => app.start_editing(),
        _ => {}
    }
}

fn handle_resume_key(app: &mut App, key: KeyCode) {
    let page = app.current_page_mut();
    match key {
        KeyCode::Up | KeyCode::Char('k') => page.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => page.scroll_down(1),
        KeyCode::PageUp => page.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => page.page_down(),
        KeyCode::Home => page.scroll_to_top(),
        KeyCode::End => page.scroll_to_bottom(),
        KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('d') => {
            app.toast = Some(components::toast::Toast::new(
                "Save a copy with: folio print --page resume",
            ));
        }
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.current_page_mut().scroll_up(WHEEL_LINES),
        MouseEventKind::ScrollDown => app.current_page_mut().scroll_down(WHEEL_LINES),
        _ => {}
    }
}

/// Nav index for a number key ('1' is the first item)
fn digit_index(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d.saturating_sub(1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::nav::NAV_ITEMS;
    use crate::page::section::SectionId;
    use ratatui::backend::TestBackend;

    fn app() -> (App, Terminal<TestBackend>) {
        app_sized(100)
    }

    fn app_sized(width: u16) -> (App, Terminal<TestBackend>) {
        let config = Config::default();
        let relay = Arc::new(EmailRelay::new(&config.relay));
        let (tx, _rx) = mpsc::channel(1);
        let mut app = App::new(&config, LogBuffer::new(), relay, tx, Route::Home);

        let mut terminal = Terminal::new(TestBackend::new(width, 30)).expect("terminal");
        terminal.draw(|f| views::draw(f, &mut app)).expect("draw");
        app.tick(Instant::now());
        (app, terminal)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        handle_key_event(
            app,
            KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release),
        );
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_key_scrolls_to_section() {
        let (mut app, _terminal) = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.home.active(), SectionId::Skills);
        assert!(app.home.viewport().is_animating());
    }

    #[test]
    fn test_resume_item_routes() {
        let (mut app, _terminal) = app();
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.router.current(), Route::Resume);
        assert_eq!(NAV_ITEMS[5].label, "Resume");

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.router.current(), Route::Home);
    }

    #[test]
    fn test_typing_goes_to_form_not_shortcuts() {
        let (mut app, _terminal) = app();
        press(&mut app, KeyCode::Char('i'));
        assert!(app.editing);

        type_text(&mut app, "quit");
        assert!(!app.should_quit);
        assert_eq!(app.home.form().name, "quit");

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "a@b.co");
        assert_eq!(app.home.form().email, "a@b.co");

        press(&mut app, KeyCode::Esc);
        assert!(!app.editing);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_menu_keys_consume_navigation() {
        let (mut app, _terminal) = app_sized(50);
        assert!(app.nav_collapsed);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.home.nav().is_mobile_menu_open());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.home.nav().is_mobile_menu_open());
        assert_eq!(app.home.active(), SectionId::About);
    }

    #[test]
    fn test_wide_terminal_has_no_menu() {
        let (mut app, _terminal) = app_sized(120);
        assert!(!app.nav_collapsed);

        press(&mut app, KeyCode::Char('m'));
        assert!(!app.home.nav().is_mobile_menu_open());

        press(&mut app, KeyCode::Down);
        assert_eq!(app.home.viewport().offset(), 1);
        assert_eq!(app.home.nav().cursor(), 0);
    }

    #[test]
    fn test_menu_left_open_is_hidden_after_widening() {
        let (mut app, mut terminal) = app_sized(50);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.home.nav().is_mobile_menu_open());

        terminal.backend_mut().resize(120, 30);
        terminal.draw(|f| views::draw(f, &mut app)).expect("draw");
        assert!(!app.nav_collapsed);

        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(!text.contains(" Menu "));

        // Page keys reach the page, the open flag is left alone
        press(&mut app, KeyCode::Down);
        assert_eq!(app.home.viewport().offset(), 1);
        assert!(app.home.nav().is_mobile_menu_open());
    }

    #[test]
    fn test_modal_captures_input() {
        let (mut app, _terminal) = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.home.active(), SectionId::Hero);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_digit_index() {
        assert_eq!(digit_index('1'), 0);
        assert_eq!(digit_index('6'), 5);
    }
}
