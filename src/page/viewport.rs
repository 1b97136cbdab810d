// Scrollable viewport over a laid-out page
//
// Owns the scroll position, content size and viewport size for one page.
// Manual scrolling is immediate; programmatic scrolling (nav clicks, hero
// buttons) animates toward a target one tick at a time and is cancelled by
// any manual input.

/// Smallest step a smooth scroll takes per tick
const MIN_SMOOTH_STEP: usize = 1;

/// Fraction of the remaining distance covered per tick (ease-out)
const SMOOTH_DIVISOR: usize = 4;

/// Scroll state for a single page
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// Current scroll offset (unit at the top of the viewport)
    offset: usize,

    /// Total content height
    total: usize,

    /// Visible height
    height: usize,

    /// Target of an in-flight smooth scroll
    smooth_target: Option<usize>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, height: usize) {
        self.total = total;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());

        if let Some(target) = self.smooth_target {
            self.smooth_target = Some(target.min(self.max_offset()));
        }
    }

    /// Scroll up by `lines`
    pub fn scroll_up(&mut self, lines: usize) {
        self.smooth_target = None;
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down by `lines`
    pub fn scroll_down(&mut self, lines: usize) {
        self.smooth_target = None;
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    /// Scroll up by a page
    pub fn page_up(&mut self) {
        self.scroll_up(self.height.max(1));
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) {
        self.scroll_down(self.height.max(1));
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.smooth_target = None;
        self.offset = 0;
    }

    /// Jump to bottom
    pub fn scroll_to_bottom(&mut self) {
        self.smooth_target = None;
        self.offset = self.max_offset();
    }

    /// Begin animating toward `top` (clamped to the scrollable range)
    pub fn smooth_scroll_to(&mut self, top: usize) {
        let target = top.min(self.max_offset());
        if target == self.offset {
            self.smooth_target = None;
        } else {
            self.smooth_target = Some(target);
        }
    }

    /// Advance an in-flight smooth scroll by one step
    ///
    /// Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.smooth_target else {
            return false;
        };

        let distance = target.abs_diff(self.offset);
        let step = (distance / SMOOTH_DIVISOR).max(MIN_SMOOTH_STEP).min(distance);

        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == target {
            self.smooth_target = None;
        }
        step > 0
    }

    /// Whether a smooth scroll is in flight
    pub fn is_animating(&self) -> bool {
        self.smooth_target.is_some()
    }

    /// Target of the in-flight smooth scroll
    pub fn smooth_target(&self) -> Option<usize> {
        self.smooth_target
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start, end)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.height).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.height
    }

    /// Maximum valid offset
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.height)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, height: usize) -> Viewport {
        let mut viewport = Viewport::new();
        viewport.update_dimensions(total, height);
        viewport
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut viewport = sized(20, 5);
        viewport.scroll_down(100);
        assert_eq!(viewport.offset(), 15);

        viewport.scroll_up(100);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut viewport = sized(100, 10);
        viewport.scroll_to_bottom();
        assert_eq!(viewport.offset(), 90);

        viewport.update_dimensions(50, 10);
        assert_eq!(viewport.offset(), 40);
    }

    #[test]
    fn test_visible_range() {
        let mut viewport = sized(100, 10);
        assert_eq!(viewport.visible_range(), (0, 10));

        viewport.scroll_to_bottom();
        assert_eq!(viewport.visible_range(), (90, 100));
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut viewport = sized(200, 20);
        viewport.smooth_scroll_to(100);
        assert!(viewport.is_animating());

        let mut ticks = 0;
        while viewport.tick() {
            ticks += 1;
            assert!(ticks < 100, "smooth scroll never settled");
        }

        assert_eq!(viewport.offset(), 100);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_smooth_scroll_eases_out() {
        let mut viewport = sized(200, 20);
        viewport.smooth_scroll_to(100);

        viewport.tick();
        let first = viewport.offset();
        viewport.tick();
        let second = viewport.offset() - first;

        assert_eq!(first, 25);
        assert!(second < first);
    }

    #[test]
    fn test_smooth_scroll_upwards() {
        let mut viewport = sized(200, 20);
        viewport.scroll_to_bottom();
        viewport.smooth_scroll_to(0);
        while viewport.tick() {}
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_smooth_target_clamped() {
        let mut viewport = sized(50, 20);
        viewport.smooth_scroll_to(45);
        assert_eq!(viewport.smooth_target(), Some(30));
    }

    #[test]
    fn test_manual_scroll_cancels_smooth() {
        let mut viewport = sized(200, 20);
        viewport.smooth_scroll_to(100);
        viewport.tick();
        viewport.scroll_up(1);

        assert!(!viewport.is_animating());
        assert!(!viewport.tick());
    }

    #[test]
    fn test_smooth_scroll_to_current_offset_is_noop() {
        let mut viewport = sized(200, 20);
        viewport.smooth_scroll_to(0);
        assert!(!viewport.is_animating());
    }
}
