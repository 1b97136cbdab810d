//! Anchor geometry and the scroll-to-anchor action
//!
//! The composer measures each section after layout and publishes the result
//! as an `AnchorMap`. Everything downstream (tracker, nav bar, reveal latches)
//! reads geometry through `AnchorGeometry`, so a section that has not been
//! laid out yet simply has no anchor.

use super::section::SectionId;
use super::viewport::Viewport;

/// Vertical span of one section, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub top: usize,
    pub height: usize,
}

impl Anchor {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// First unit past the section
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < top + height`
    pub fn contains(&self, y: usize) -> bool {
        self.top <= y && y < self.bottom()
    }

    /// Whether the span overlaps `[start, end)`
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        self.top < end && self.bottom() > start
    }
}

/// Source of per-section geometry
pub trait AnchorGeometry {
    /// Geometry for `id`, or `None` if it is not laid out (yet)
    fn anchor(&self, id: SectionId) -> Option<Anchor>;
}

/// Geometry table indexed by section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorMap {
    anchors: [Option<Anchor>; 5],
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SectionId, anchor: Anchor) {
        self.anchors[id.index()] = Some(anchor);
    }

    pub fn remove(&mut self, id: SectionId) {
        self.anchors[id.index()] = None;
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.iter().all(Option::is_none)
    }
}

impl AnchorGeometry for AnchorMap {
    fn anchor(&self, id: SectionId) -> Option<Anchor> {
        self.anchors[id.index()]
    }
}

impl FromIterator<(SectionId, Anchor)> for AnchorMap {
    fn from_iter<T: IntoIterator<Item = (SectionId, Anchor)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (id, anchor) in iter {
            map.insert(id, anchor);
        }
        map
    }
}

/// Smooth-scroll to a section and report it as the new active section
///
/// Returns `false` (and touches nothing) when the section has no anchor.
pub fn scroll_to_anchor(
    id: SectionId,
    geometry: &impl AnchorGeometry,
    viewport: &mut Viewport,
    mut on_section_change: impl FnMut(SectionId),
) -> bool {
    let Some(anchor) = geometry.anchor(id) else {
        return false;
    };

    viewport.smooth_scroll_to(anchor.top);
    on_section_change(id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> AnchorMap {
        [
            (SectionId::Hero, Anchor::new(0, 800)),
            (SectionId::About, Anchor::new(800, 800)),
            (SectionId::Projects, Anchor::new(1600, 800)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_contains_is_half_open() {
        let anchor = Anchor::new(800, 800);
        assert!(!anchor.contains(799));
        assert!(anchor.contains(800));
        assert!(anchor.contains(1599));
        assert!(!anchor.contains(1600));
    }

    #[test]
    fn test_intersects() {
        let anchor = Anchor::new(10, 5);
        assert!(anchor.intersects(0, 11));
        assert!(anchor.intersects(14, 20));
        assert!(!anchor.intersects(15, 20));
        assert!(!anchor.intersects(0, 10));
    }

    #[test]
    fn test_scroll_to_existing_anchor() {
        let map = three_sections();
        let mut viewport = Viewport::new();
        viewport.update_dimensions(2400, 600);

        let mut reported = None;
        let scrolled = scroll_to_anchor(SectionId::About, &map, &mut viewport, |id| {
            reported = Some(id)
        });

        assert!(scrolled);
        assert_eq!(reported, Some(SectionId::About));
        assert_eq!(viewport.smooth_target(), Some(800));
    }

    #[test]
    fn test_scroll_to_missing_anchor_is_noop() {
        let map = three_sections();
        let mut viewport = Viewport::new();
        viewport.update_dimensions(2400, 600);

        let mut reported = None;
        let scrolled = scroll_to_anchor(SectionId::Contact, &map, &mut viewport, |id| {
            reported = Some(id)
        });

        assert!(!scrolled);
        assert_eq!(reported, None);
        assert_eq!(viewport.smooth_target(), None);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_empty_map_has_no_geometry() {
        let map = AnchorMap::new();
        assert!(map.is_empty());
        for id in SectionId::ALL {
            assert_eq!(map.anchor(id), None);
        }
    }
}
