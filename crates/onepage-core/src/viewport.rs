//! In-viewport detection.
//!
//! Pure geometry over section row ranges: no state, no side effects. The
//! detector is recomputed on every scroll tick and its result discarded.

use crate::document::Section;

/// The currently visible row range of the document pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible document row
    pub top: u16,
    /// Number of visible rows
    pub height: u16,
}

impl Viewport {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Whether a section counts as in view: its row range intersects the
/// viewport expanded by `threshold` rows on both ends.
pub fn in_view(section: &Section, view: Viewport, threshold: u16) -> bool {
    if section.height == 0 {
        return false;
    }
    let view_top = view.top.saturating_sub(threshold);
    let view_bottom = view.bottom().saturating_add(threshold);
    section.top < view_bottom && section.bottom() > view_top
}

/// First section in document order satisfying the in-view predicate, or
/// `None` when nothing qualifies (e.g. the viewport sits entirely in
/// preamble text owned by no section).
pub fn find_active_section(
    sections: &[Section],
    view: Viewport,
    threshold: u16,
) -> Option<&Section> {
    sections.iter().find(|s| in_view(s, view, threshold))
}
