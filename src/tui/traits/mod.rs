//! Rendering contracts for page sections
//!
//! Sections render themselves to pre-wrapped lines: one `Line` is one
//! terminal row at the given width. The page composer stacks them and derives
//! anchor geometry from the line counts, so a section's height must not
//! depend on anything but the width and the form contents.
//!
//! ```text
//!   RenderContext ──▶ SectionView::lines ──▶ Vec<Line> ──▶ composer
//!   (theme, width,     (hero, about, ...)                  (lines + anchors)
//!    reveal, form)
//! ```

use crate::page::contact::ContactForm;
use crate::page::reveal::{RevealLatch, Stagger};
use crate::page::section::SectionId;
use crate::page::viewport::Viewport;
use crate::page::HomePage;
use crate::tui::theme::Theme;
use ratatui::text::Line;
use std::time::Instant;

/// How much of a section's entrance animation has played
#[derive(Debug, Clone, Copy)]
pub enum Reveal {
    /// Driven by the section's latch
    Latched(RevealLatch),
    /// Everything visible (print mode)
    All,
}

/// Read-only view of the state a section needs to render
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Column width the lines must fit
    pub width: usize,

    /// Rows visible below the nav bar; the hero fills at least this much
    pub viewport_height: usize,

    pub now: Instant,

    pub reveal: Reveal,

    pub form: &'a ContactForm,

    /// Keyboard input goes to the contact form
    pub editing: bool,

    /// Animation frame counter (spinners, blinking cursor)
    pub animation_frame: u64,
}

impl<'a> RenderContext<'a> {
    /// Number of staggered items visible now
    pub fn visible_items(&self, stagger: Stagger) -> usize {
        match self.reveal {
            Reveal::Latched(latch) => latch.visible_items(stagger, self.now),
            Reveal::All => usize::MAX,
        }
    }

    /// Same context with a different reveal state
    pub fn with_reveal(self, reveal: Reveal) -> Self {
        Self { reveal, ..self }
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[(self.animation_frame % SPINNER.len() as u64) as usize]
    }

    /// Text cursor blinks at roughly 2Hz on the 50ms tick
    pub fn cursor_visible(&self) -> bool {
        (self.animation_frame / 10) % 2 == 0
    }
}

/// A section of the home page
pub trait SectionView {
    fn id(&self) -> SectionId;

    /// Render to rows of exactly `ctx.width` columns or fewer
    fn lines(&self, ctx: &RenderContext) -> Vec<Line<'static>>;
}

/// Uniform scrolling for whatever page is on screen
pub trait Scrollable {
    fn scroll_up(&mut self, lines: usize);
    fn scroll_down(&mut self, lines: usize);
    fn page_up(&mut self);
    fn page_down(&mut self);
    fn scroll_to_top(&mut self);
    fn scroll_to_bottom(&mut self);
}

impl Scrollable for Viewport {
    fn scroll_up(&mut self, lines: usize) {
        Viewport::scroll_up(self, lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        Viewport::scroll_down(self, lines);
    }

    fn page_up(&mut self) {
        Viewport::page_up(self);
    }

    fn page_down(&mut self) {
        Viewport::page_down(self);
    }

    fn scroll_to_top(&mut self) {
        Viewport::scroll_to_top(self);
    }

    fn scroll_to_bottom(&mut self) {
        Viewport::scroll_to_bottom(self);
    }
}

// HomePage goes through its own methods so every scroll reaches the tracker
impl Scrollable for HomePage {
    fn scroll_up(&mut self, lines: usize) {
        HomePage::scroll_up(self, lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        HomePage::scroll_down(self, lines);
    }

    fn page_up(&mut self) {
        HomePage::page_up(self);
    }

    fn page_down(&mut self) {
        HomePage::page_down(self);
    }

    fn scroll_to_top(&mut self) {
        HomePage::scroll_to_top(self);
    }

    fn scroll_to_bottom(&mut self) {
        HomePage::scroll_to_bottom(self);
    }
}
