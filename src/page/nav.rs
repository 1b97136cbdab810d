//! Navigation bar state
//!
//! The item list is static. The bar itself only owns presentation state:
//! the keyboard cursor, the mobile-menu toggle, and whether the page has
//! scrolled far enough to switch to the solid bar style. The active section
//! is not stored here; it is passed in for highlighting and written back
//! through a callback when an item is activated.

use super::anchor::{scroll_to_anchor, AnchorGeometry};
use super::section::SectionId;
use super::viewport::Viewport;

/// What activating a nav item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    /// Smooth-scroll to a section on this page
    ScrollTarget(SectionId),
    /// Leave for another page via the router
    ExternalRoute(&'static str),
}

/// One nav bar control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: NavKind,
}

/// The nav bar's controls, left to right
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        id: "hero",
        label: "Home",
        kind: NavKind::ScrollTarget(SectionId::Hero),
    },
    NavItem {
        id: "about",
        label: "About",
        kind: NavKind::ScrollTarget(SectionId::About),
    },
    NavItem {
        id: "projects",
        label: "Projects",
        kind: NavKind::ScrollTarget(SectionId::Projects),
    },
    NavItem {
        id: "skills",
        label: "Skills",
        kind: NavKind::ScrollTarget(SectionId::Skills),
    },
    NavItem {
        id: "contact",
        label: "Contact",
        kind: NavKind::ScrollTarget(SectionId::Contact),
    },
    NavItem {
        id: "/resume",
        label: "Resume",
        kind: NavKind::ExternalRoute("/resume"),
    },
];

impl NavItem {
    /// Whether this item should be drawn highlighted
    pub fn is_active(&self, active: SectionId) -> bool {
        self.kind == NavKind::ScrollTarget(active)
    }
}

/// Result of activating a nav item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Scroll started; active section updated optimistically
    Scrolled(SectionId),
    /// Section had no anchor; nothing happened
    MissingAnchor(SectionId),
    /// Hand this target to the router
    Route(&'static str),
}

/// Nav bar presentation state
#[derive(Debug, Clone)]
pub struct NavBar {
    cursor: usize,
    mobile_menu_open: bool,
    is_scrolled: bool,
    scrolled_threshold: usize,
}

impl NavBar {
    /// `scrolled_threshold`: offset beyond which the bar renders solid
    pub fn new(scrolled_threshold: usize) -> Self {
        Self {
            cursor: 0,
            mobile_menu_open: false,
            is_scrolled: false,
            scrolled_threshold,
        }
    }

    pub fn items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % NAV_ITEMS.len();
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = (self.cursor + NAV_ITEMS.len() - 1) % NAV_ITEMS.len();
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Track the scroll offset for the bar style
    pub fn observe_scroll(&mut self, offset: usize) {
        self.is_scrolled = offset > self.scrolled_threshold;
    }

    /// Activate the item at `index`
    ///
    /// Scroll targets start a smooth scroll and report the target section
    /// through `on_section_change` before the scroll completes. Routes are
    /// returned to the caller untouched. Out-of-range indices return `None`.
    pub fn activate(
        &mut self,
        index: usize,
        geometry: &impl AnchorGeometry,
        viewport: &mut Viewport,
        on_section_change: impl FnMut(SectionId),
    ) -> Option<NavOutcome> {
        let item = NAV_ITEMS.get(index)?;
        self.cursor = index;

        let outcome = match item.kind {
            NavKind::ScrollTarget(id) => {
                if scroll_to_anchor(id, geometry, viewport, on_section_change) {
                    NavOutcome::Scrolled(id)
                } else {
                    NavOutcome::MissingAnchor(id)
                }
            }
            NavKind::ExternalRoute(target) => NavOutcome::Route(target),
        };
        Some(outcome)
    }

    /// Activate from the mobile overlay, which closes it
    pub fn activate_from_menu(
        &mut self,
        index: usize,
        geometry: &impl AnchorGeometry,
        viewport: &mut Viewport,
        on_section_change: impl FnMut(SectionId),
    ) -> Option<NavOutcome> {
        let outcome = self.activate(index, geometry, viewport, on_section_change);
        self.close_mobile_menu();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::anchor::{Anchor, AnchorMap};
    use crate::page::tracker::ActiveSection;

    fn laid_out() -> (AnchorMap, Viewport) {
        let map: AnchorMap = SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, Anchor::new(i * 800, 800)))
            .collect();
        let mut viewport = Viewport::new();
        viewport.update_dimensions(4000, 700);
        (map, viewport)
    }

    #[test]
    fn test_items_cover_every_section_then_resume() {
        let targets: Vec<_> = NAV_ITEMS
            .iter()
            .filter_map(|item| match item.kind {
                NavKind::ScrollTarget(id) => Some(id),
                NavKind::ExternalRoute(_) => None,
            })
            .collect();
        assert_eq!(targets, SectionId::ALL.to_vec());
        assert_eq!(NAV_ITEMS[5].kind, NavKind::ExternalRoute("/resume"));

        for item in &NAV_ITEMS[..5] {
            if let NavKind::ScrollTarget(id) = item.kind {
                assert_eq!(item.id, id.as_str());
            }
        }
    }

    #[test]
    fn test_only_matching_scroll_target_is_active() {
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active(SectionId::Skills))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Skills"]);
    }

    #[test]
    fn test_click_updates_active_before_scroll_completes() {
        let (map, mut viewport) = laid_out();
        let mut nav = NavBar::new(2);
        let mut active = ActiveSection::new();

        let outcome = nav.activate(3, &map, &mut viewport, |id| {
            active.set(id);
        });

        assert_eq!(outcome, Some(NavOutcome::Scrolled(SectionId::Skills)));
        assert_eq!(active.get(), SectionId::Skills);
        assert_eq!(viewport.offset(), 0);
        assert!(viewport.is_animating());
    }

    #[test]
    fn test_route_item_leaves_active_section() {
        let (map, mut viewport) = laid_out();
        let mut nav = NavBar::new(2);
        let mut active = ActiveSection::new();
        active.set(SectionId::About);

        let outcome = nav.activate(5, &map, &mut viewport, |id| {
            active.set(id);
        });

        assert_eq!(outcome, Some(NavOutcome::Route("/resume")));
        assert_eq!(active.get(), SectionId::About);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_missing_anchor_click_is_noop() {
        let (mut map, mut viewport) = laid_out();
        map.remove(SectionId::Contact);
        let mut nav = NavBar::new(2);
        let mut active = ActiveSection::new();

        let outcome = nav.activate(4, &map, &mut viewport, |id| {
            active.set(id);
        });

        assert_eq!(outcome, Some(NavOutcome::MissingAnchor(SectionId::Contact)));
        assert_eq!(active.get(), SectionId::Hero);
    }

    #[test]
    fn test_out_of_range_index() {
        let (map, mut viewport) = laid_out();
        let mut nav = NavBar::new(2);
        assert_eq!(nav.activate(6, &map, &mut viewport, |_| {}), None);
    }

    #[test]
    fn test_mobile_menu_toggle_is_independent() {
        let (map, mut viewport) = laid_out();
        let mut nav = NavBar::new(2);
        viewport.scroll_down(120);
        nav.observe_scroll(viewport.offset());

        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open());

        assert_eq!(viewport.offset(), 120);
        assert!(nav.is_scrolled());
        assert!(map.anchor(SectionId::Hero).is_some());
    }

    #[test]
    fn test_menu_activation_closes_menu() {
        let (map, mut viewport) = laid_out();
        let mut nav = NavBar::new(2);
        nav.toggle_mobile_menu();

        let outcome = nav.activate_from_menu(1, &map, &mut viewport, |_| {});
        assert_eq!(outcome, Some(NavOutcome::Scrolled(SectionId::About)));
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut nav = NavBar::new(2);
        nav.cursor_prev();
        assert_eq!(nav.cursor(), NAV_ITEMS.len() - 1);
        nav.cursor_next();
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavBar::new(2);
        nav.observe_scroll(2);
        assert!(!nav.is_scrolled());
        nav.observe_scroll(3);
        assert!(nav.is_scrolled());
    }
}
