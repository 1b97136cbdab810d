//! One-shot entrance animations
//!
//! Each section owns a `RevealLatch` that flips the first time the section
//! scrolls into view and never flips back. Once latched, the section's items
//! appear one after another: nothing for an initial delay, then one more
//! item per stagger interval.

use super::anchor::AnchorGeometry;
use super::section::SectionId;
use std::time::{Duration, Instant};

/// Timing for a staggered entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    /// Wait before the first item appears
    pub delay: Duration,
    /// Gap between consecutive items
    pub interval: Duration,
}

impl Stagger {
    /// Section headings and cards
    pub const SECTION: Stagger = Stagger {
        delay: Duration::from_millis(300),
        interval: Duration::from_millis(200),
    };

    /// Skill bars stagger faster
    pub const SKILLS: Stagger = Stagger {
        delay: Duration::from_millis(300),
        interval: Duration::from_millis(100),
    };

    /// Number of items visible `elapsed` after the latch fired
    pub fn visible_at(&self, elapsed: Duration) -> usize {
        if elapsed < self.delay {
            return 0;
        }
        let since_first = elapsed - self.delay;
        let interval = self.interval.as_millis().max(1);
        1 + (since_first.as_millis() / interval) as usize
    }
}

/// Latch recording when a section was first seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    shown_at: Option<Instant>,
}

impl RevealLatch {
    /// Latch at `now`. Returns true only the first time.
    pub fn show(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() {
            return false;
        }
        self.shown_at = Some(now);
        true
    }

    pub fn is_shown(&self) -> bool {
        self.shown_at.is_some()
    }

    /// How many staggered items are visible at `now`
    pub fn visible_items(&self, stagger: Stagger, now: Instant) -> usize {
        match self.shown_at {
            Some(at) => stagger.visible_at(now.saturating_duration_since(at)),
            None => 0,
        }
    }
}

/// Latches for every section plus the visibility margin
#[derive(Debug, Clone)]
pub struct RevealSet {
    latches: [RevealLatch; 5],
    margin: usize,
}

impl RevealSet {
    /// `margin` shrinks the viewport on both edges before testing overlap
    pub fn new(margin: usize) -> Self {
        Self {
            latches: [RevealLatch::default(); 5],
            margin,
        }
    }

    pub fn latch(&self, id: SectionId) -> &RevealLatch {
        &self.latches[id.index()]
    }

    /// Latch a section directly (used for content visible at mount)
    pub fn show(&mut self, id: SectionId, now: Instant) -> bool {
        self.latches[id.index()].show(now)
    }

    /// Latch every section overlapping the visible range `[start, end)`
    ///
    /// Returns the sections that latched on this call.
    pub fn observe(
        &mut self,
        start: usize,
        end: usize,
        geometry: &impl AnchorGeometry,
        now: Instant,
    ) -> Vec<SectionId> {
        // A viewport too small for the margin still counts as visible
        let (start, end) = if end.saturating_sub(start) > self.margin * 2 {
            (start + self.margin, end - self.margin)
        } else {
            (start, end)
        };

        let mut latched = Vec::new();
        for id in SectionId::ALL {
            let Some(anchor) = geometry.anchor(id) else {
                continue;
            };
            if anchor.intersects(start, end) && self.latches[id.index()].show(now) {
                latched.push(id);
            }
        }
        latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::anchor::{Anchor, AnchorMap};

    fn stacked() -> AnchorMap {
        SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, Anchor::new(i * 40, 40)))
            .collect()
    }

    #[test]
    fn test_latch_never_reverts() {
        let t0 = Instant::now();
        let mut latch = RevealLatch::default();
        assert!(!latch.is_shown());

        assert!(latch.show(t0));
        assert!(!latch.show(t0 + Duration::from_secs(5)));
        assert!(latch.is_shown());
    }

    #[test]
    fn test_stagger_schedule() {
        let s = Stagger::SECTION;
        assert_eq!(s.visible_at(Duration::from_millis(0)), 0);
        assert_eq!(s.visible_at(Duration::from_millis(299)), 0);
        assert_eq!(s.visible_at(Duration::from_millis(300)), 1);
        assert_eq!(s.visible_at(Duration::from_millis(499)), 1);
        assert_eq!(s.visible_at(Duration::from_millis(500)), 2);
        assert_eq!(s.visible_at(Duration::from_millis(1100)), 5);
    }

    #[test]
    fn test_unshown_latch_shows_nothing() {
        let latch = RevealLatch::default();
        let later = Instant::now() + Duration::from_secs(10);
        assert_eq!(latch.visible_items(Stagger::SECTION, later), 0);
    }

    #[test]
    fn test_observe_respects_margin() {
        let t0 = Instant::now();
        let mut set = RevealSet::new(5);

        // Viewport [0, 44): about starts at 40, inside the 5-unit margin
        let latched = set.observe(0, 44, &stacked(), t0);
        assert_eq!(latched, vec![SectionId::Hero]);
        assert!(!set.latch(SectionId::About).is_shown());

        let latched = set.observe(10, 54, &stacked(), t0);
        assert_eq!(latched, vec![SectionId::About]);
    }

    #[test]
    fn test_observe_latches_once() {
        let t0 = Instant::now();
        let mut set = RevealSet::new(0);
        assert_eq!(set.observe(0, 10, &stacked(), t0).len(), 1);
        assert!(set.observe(0, 10, &stacked(), t0).is_empty());

        // Scrolling away keeps the latch
        set.observe(150, 160, &stacked(), t0);
        assert!(set.latch(SectionId::Hero).is_shown());
    }

    #[test]
    fn test_observe_skips_unmeasured_sections() {
        let mut set = RevealSet::new(0);
        let latched = set.observe(0, 1000, &AnchorMap::new(), Instant::now());
        assert!(latched.is_empty());
    }
}
