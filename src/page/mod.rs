//! Home page state
//!
//! `HomePage` owns everything the scrolling page needs between frames: the
//! active section, scroll tracker, anchor geometry, viewport, nav bar, contact
//! form and reveal latches. It is renderer-agnostic; the TUI feeds it layout
//! measurements and input, then reads it back when drawing.

pub mod anchor;
pub mod contact;
pub mod nav;
pub mod reveal;
pub mod router;
pub mod section;
pub mod tracker;
pub mod viewport;

use anchor::{scroll_to_anchor, AnchorMap};
use contact::ContactForm;
use nav::{NavBar, NavOutcome};
use reveal::RevealSet;
use section::SectionId;
use std::time::Instant;
use tracker::{ActiveSection, ScrollTracker};
use viewport::Viewport;

pub use anchor::{Anchor, AnchorGeometry};

/// Home page tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    /// Added to the scroll offset before resolving the active section
    pub fixed_offset: usize,
    /// Offset beyond which the nav bar renders solid
    pub scrolled_threshold: usize,
    /// Viewport shrink applied before reveal intersection tests
    pub reveal_margin: usize,
}

/// State of the scrolling home page
#[derive(Debug, Clone)]
pub struct HomePage {
    active: ActiveSection,
    tracker: ScrollTracker,
    anchors: AnchorMap,
    viewport: Viewport,
    nav: NavBar,
    form: ContactForm,
    reveals: RevealSet,
}

impl HomePage {
    pub fn new(settings: PageSettings) -> Self {
        Self {
            active: ActiveSection::new(),
            tracker: ScrollTracker::new(settings.fixed_offset),
            anchors: AnchorMap::new(),
            viewport: Viewport::new(),
            nav: NavBar::new(settings.scrolled_threshold),
            form: ContactForm::new(),
            reveals: RevealSet::new(settings.reveal_margin),
        }
    }

    pub fn active(&self) -> SectionId {
        self.active.get()
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavBar {
        &mut self.nav
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn reveals(&self) -> &RevealSet {
        &self.reveals
    }

    /// Publish fresh layout measurements
    ///
    /// New geometry (first layout, resize) counts as a scroll observation so
    /// the active section is resolved at mount.
    pub fn set_layout(&mut self, anchors: AnchorMap, total: usize, height: usize) {
        let moved = anchors != self.anchors;
        self.anchors = anchors;

        let before = self.viewport.offset();
        self.viewport.update_dimensions(total, height);
        if moved || self.viewport.offset() != before {
            self.tracker.observe(self.viewport.offset());
        }
    }

    /// Record the current offset after any scroll change
    fn on_scroll(&mut self) {
        let offset = self.viewport.offset();
        self.tracker.observe(offset);
        self.nav.observe_scroll(offset);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.viewport.scroll_up(lines);
        self.on_scroll();
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.viewport.scroll_down(lines);
        self.on_scroll();
    }

    pub fn page_up(&mut self) {
        self.viewport.page_up();
        self.on_scroll();
    }

    pub fn page_down(&mut self) {
        self.viewport.page_down();
        self.on_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to_top();
        self.on_scroll();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.viewport.scroll_to_bottom();
        self.on_scroll();
    }

    /// Advance a smooth scroll by one animation step
    pub fn tick(&mut self) -> bool {
        let moved = self.viewport.tick();
        if moved {
            self.on_scroll();
        }
        moved
    }

    /// Once-per-frame work: resolve the coalesced scroll and latch reveals
    ///
    /// Returns the newly resolved section if it changed.
    pub fn frame(&mut self, now: Instant) -> Option<SectionId> {
        let mut changed = None;
        let active = &mut self.active;
        self.tracker.flush(&self.anchors, |id| {
            if active.set(id) {
                changed = Some(id);
            }
        });

        if self.anchors.anchor(SectionId::Hero).is_some() {
            self.reveals.show(SectionId::Hero, now);
        }
        let (start, end) = self.viewport.visible_range();
        for id in self.reveals.observe(start, end, &self.anchors, now) {
            tracing::debug!(section = %id, "Section revealed");
        }

        if let Some(id) = changed {
            tracing::debug!(section = %id, "Active section changed");
        }
        changed
    }

    /// Scroll-to-anchor with optimistic active-section update
    pub fn scroll_to(&mut self, id: SectionId) -> bool {
        let active = &mut self.active;
        scroll_to_anchor(id, &self.anchors, &mut self.viewport, |id| {
            active.set(id);
        })
    }

    /// Activate nav item `index` from the bar
    pub fn activate_nav(&mut self, index: usize) -> Option<NavOutcome> {
        let active = &mut self.active;
        self.nav
            .activate(index, &self.anchors, &mut self.viewport, |id| {
                active.set(id);
            })
    }

    /// Activate nav item `index` from the mobile overlay
    pub fn activate_nav_from_menu(&mut self, index: usize) -> Option<NavOutcome> {
        let active = &mut self.active;
        self.nav
            .activate_from_menu(index, &self.anchors, &mut self.viewport, |id| {
                active.set(id);
            })
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.nav.toggle_mobile_menu();
    }
}
