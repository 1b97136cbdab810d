//! Scroll tracker / active-section resolver
//!
//! Turns a scroll offset into "which section is current". The offset is
//! shifted by a fixed amount to account for the pinned nav bar, then tested
//! against each section's anchor in page order. The first containing
//! section wins; if nothing contains the point the previous value stands.
//!
//! Scroll input can arrive many times per frame. `ScrollTracker` queues the
//! frame's offsets and resolves once when the frame is flushed, taking the
//! latest offset that lands in a section. Offsets that match nothing leave
//! the value alone, so this settles where resolving every event would.

use super::anchor::AnchorGeometry;
use super::section::SectionId;

/// Resolve the section containing `offset + fixed_offset`
///
/// Sections without geometry are skipped. Returns `None` when no section
/// contains the point.
pub fn resolve(
    offset: usize,
    fixed_offset: usize,
    geometry: &impl AnchorGeometry,
) -> Option<SectionId> {
    let effective_y = offset + fixed_offset;

    SectionId::ALL.into_iter().find(|&id| {
        geometry
            .anchor(id)
            .is_some_and(|anchor| anchor.contains(effective_y))
    })
}

/// The page's current section
///
/// Always holds one of the five ids; starts at the first section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSection(SectionId);

impl ActiveSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> SectionId {
        self.0
    }

    /// Store `id`. Returns false when it was already current.
    pub fn set(&mut self, id: SectionId) -> bool {
        if self.0 == id {
            return false;
        }
        self.0 = id;
        true
    }
}

/// Per-frame coalescing tracker
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    fixed_offset: usize,
    pending: Vec<usize>,
}

impl ScrollTracker {
    pub fn new(fixed_offset: usize) -> Self {
        Self {
            fixed_offset,
            pending: Vec::new(),
        }
    }

    pub fn fixed_offset(&self) -> usize {
        self.fixed_offset
    }

    /// Record a scroll observation for the next flush
    pub fn observe(&mut self, offset: usize) {
        // Repeats of the same offset resolve the same way
        if self.pending.last() != Some(&offset) {
            self.pending.push(offset);
        }
    }

    /// Whether an observation is waiting for the next flush
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Resolve this frame's observations, latest first
    ///
    /// Calls `on_section_change` with the section of the most recent offset
    /// that matches one. Nothing is called when there was no observation or
    /// none of them matched.
    pub fn flush(
        &mut self,
        geometry: &impl AnchorGeometry,
        mut on_section_change: impl FnMut(SectionId),
    ) -> Option<SectionId> {
        let fixed_offset = self.fixed_offset;
        let resolved = self
            .pending
            .drain(..)
            .rev()
            .find_map(|offset| resolve(offset, fixed_offset, geometry))?;
        on_section_change(resolved);
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::anchor::{Anchor, AnchorMap};

    const NAV_OFFSET: usize = 100;

    fn three_sections() -> AnchorMap {
        [
            (SectionId::Hero, Anchor::new(0, 800)),
            (SectionId::About, Anchor::new(800, 800)),
            (SectionId::Projects, Anchor::new(1600, 800)),
        ]
        .into_iter()
        .collect()
    }

    fn full_page() -> AnchorMap {
        SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, Anchor::new(i * 500, 500)))
            .collect()
    }

    #[test]
    fn test_reference_offsets() {
        let map = three_sections();
        assert_eq!(resolve(0, NAV_OFFSET, &map), Some(SectionId::Hero));
        // effective 850 falls in about's [800, 1600)
        assert_eq!(resolve(750, NAV_OFFSET, &map), Some(SectionId::About));
        assert_eq!(resolve(1550, NAV_OFFSET, &map), Some(SectionId::Projects));
    }

    #[test]
    fn test_boundary_belongs_to_next_section() {
        let map = three_sections();
        assert_eq!(resolve(699, NAV_OFFSET, &map), Some(SectionId::Hero));
        assert_eq!(resolve(700, NAV_OFFSET, &map), Some(SectionId::About));
    }

    #[test]
    fn test_every_offset_inside_a_span_resolves_to_it() {
        let map = full_page();
        for id in SectionId::ALL {
            let anchor = map.anchor(id).unwrap();
            // Points above the nav offset are unreachable by any scroll offset
            for y in anchor.top.max(NAV_OFFSET)..anchor.bottom() {
                let offset = y - NAV_OFFSET;
                assert_eq!(resolve(offset, NAV_OFFSET, &map), Some(id), "y = {}", y);
            }
        }
    }

    #[test]
    fn test_exactly_one_section_contains_any_point() {
        let map = full_page();
        for y in 0..2500 {
            let matches = SectionId::ALL
                .into_iter()
                .filter(|&id| map.anchor(id).is_some_and(|a| a.contains(y)))
                .count();
            assert_eq!(matches, 1, "y = {}", y);
        }
    }

    #[test]
    fn test_past_the_end_resolves_nothing() {
        let map = three_sections();
        assert_eq!(resolve(5000, NAV_OFFSET, &map), None);
    }

    #[test]
    fn test_missing_geometry_is_skipped() {
        let mut map = three_sections();
        map.remove(SectionId::About);

        assert_eq!(resolve(750, NAV_OFFSET, &map), None);
        assert_eq!(resolve(1550, NAV_OFFSET, &map), Some(SectionId::Projects));
        assert_eq!(resolve(0, NAV_OFFSET, &AnchorMap::new()), None);
    }

    #[test]
    fn test_active_section_set_is_idempotent() {
        let mut active = ActiveSection::new();
        assert_eq!(active.get(), SectionId::Hero);

        assert!(active.set(SectionId::Skills));
        assert!(!active.set(SectionId::Skills));
        assert_eq!(active.get(), SectionId::Skills);
    }

    #[test]
    fn test_flush_leaves_value_when_nothing_matches() {
        let map = three_sections();
        let mut tracker = ScrollTracker::new(NAV_OFFSET);
        let mut active = ActiveSection::new();
        active.set(SectionId::Projects);

        tracker.observe(9000);
        let resolved = tracker.flush(&map, |id| {
            active.set(id);
        });

        assert_eq!(resolved, None);
        assert_eq!(active.get(), SectionId::Projects);
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_flush_without_observation_does_nothing() {
        let map = three_sections();
        let mut tracker = ScrollTracker::new(NAV_OFFSET);
        let mut calls = 0;
        assert_eq!(tracker.flush(&map, |_| calls += 1), None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_coalesced_matches_per_event() {
        let map = three_sections();
        let offsets = [0, 120, 640, 910, 1300, 1720, 880, 760];

        let mut per_event = ActiveSection::new();
        for &offset in &offsets {
            if let Some(id) = resolve(offset, NAV_OFFSET, &map) {
                per_event.set(id);
            }
        }

        let mut coalesced = ActiveSection::new();
        let mut tracker = ScrollTracker::new(NAV_OFFSET);
        for &offset in &offsets {
            tracker.observe(offset);
        }
        tracker.flush(&map, |id| {
            coalesced.set(id);
        });

        assert_eq!(per_event, coalesced);
        assert_eq!(coalesced.get(), SectionId::About);
    }

    #[test]
    fn test_coalesced_skips_trailing_unmatched_offset() {
        let map = three_sections();
        let offsets = [750, 5000];

        let mut per_event = ActiveSection::new();
        for &offset in &offsets {
            if let Some(id) = resolve(offset, NAV_OFFSET, &map) {
                per_event.set(id);
            }
        }

        let mut coalesced = ActiveSection::new();
        let mut tracker = ScrollTracker::new(NAV_OFFSET);
        for &offset in &offsets {
            tracker.observe(offset);
        }
        let resolved = tracker.flush(&map, |id| {
            coalesced.set(id);
        });

        assert_eq!(resolved, Some(SectionId::About));
        assert_eq!(per_event, coalesced);
        assert!(!tracker.is_pending());
    }
}
