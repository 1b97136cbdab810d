// Home page composer
//
// Stacks the sections in page order into one document and records where
// each one starts. The anchor map built here is the geometry the scroll
// tracker and scroll-to-anchor read on the next frame.

use crate::page::anchor::AnchorMap;
use crate::page::reveal::RevealSet;
use crate::page::Anchor;
use crate::tui::sections::sections;
use crate::tui::traits::{RenderContext, Reveal};
use ratatui::text::Line;

/// A laid-out page: one line per row plus section geometry
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub anchors: AnchorMap,
}

impl Document {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rows `start..end`, clamped to the document
    pub fn slice(&self, start: usize, end: usize) -> &[Line<'static>] {
        let end = end.min(self.lines.len());
        &self.lines[start.min(end)..end]
    }
}

/// Lay out every section; `reveals` of `None` shows everything
pub fn compose(base: RenderContext, reveals: Option<&RevealSet>) -> Document {
    let mut doc = Document::default();

    for section in sections() {
        let id = section.id();
        let reveal = match reveals {
            Some(set) => Reveal::Latched(*set.latch(id)),
            None => Reveal::All,
        };

        let lines = section.lines(&base.with_reveal(reveal));
        doc.anchors
            .insert(id, Anchor::new(doc.lines.len(), lines.len()));
        doc.lines.extend(lines);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::contact::ContactForm;
    use crate::page::section::SectionId;
    use crate::page::AnchorGeometry;
    use crate::tui::theme::Theme;
    use std::time::Instant;

    fn context<'a>(theme: &'a Theme, form: &'a ContactForm, width: usize) -> RenderContext<'a> {
        RenderContext {
            theme,
            width,
            viewport_height: 30,
            now: Instant::now(),
            reveal: Reveal::All,
            form,
            editing: false,
            animation_frame: 0,
        }
    }

    #[test]
    fn test_anchors_tile_the_document() {
        let theme = Theme::default();
        let form = ContactForm::new();
        let doc = compose(context(&theme, &form, 80), None);

        let mut expected_top = 0;
        for id in SectionId::ALL {
            let anchor = doc.anchors.anchor(id).expect("every section laid out");
            assert_eq!(anchor.top, expected_top, "{}", id);
            assert!(anchor.height > 0);
            expected_top = anchor.bottom();
        }
        assert_eq!(expected_top, doc.len());
    }

    #[test]
    fn test_reveal_state_does_not_move_anchors() {
        let theme = Theme::default();
        let form = ContactForm::new();
        let shown = compose(context(&theme, &form, 80), None);
        let hidden = compose(context(&theme, &form, 80), Some(&RevealSet::new(2)));
        assert_eq!(shown.anchors, hidden.anchors);
    }

    #[test]
    fn test_narrow_terminal_makes_taller_sections() {
        let theme = Theme::default();
        let form = ContactForm::new();
        let wide = compose(context(&theme, &form, 96), None);
        let narrow = compose(context(&theme, &form, 36), None);

        let about = |doc: &Document| doc.anchors.anchor(SectionId::About).map(|a| a.height);
        assert!(about(&narrow) > about(&wide));
    }

    #[test]
    fn test_slice_clamps() {
        let theme = Theme::default();
        let form = ContactForm::new();
        let doc = compose(context(&theme, &form, 80), None);
        assert!(doc.slice(doc.len() + 5, doc.len() + 10).is_empty());
        assert_eq!(doc.slice(0, 3).len(), 3);
    }
}
