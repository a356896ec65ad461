//! Document scrolling, navbar style threshold, and section reveal.

use super::document::{document_height, SectionId, WORK_ITEMS};

/// Offset above which the navbar switches to its "scrolled" style.
pub const NAVBAR_SCROLL_THRESHOLD: u16 = 50;

/// Fraction of a section that must be inside the viewport to reveal it.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;

/// Rows shaved off the bottom of the viewport for reveal purposes, so a
/// section only reveals once it is meaningfully inside the view.
pub const REVEAL_BOTTOM_MARGIN: u16 = 3;

/// Rows scrolled per page step.
pub const PAGE_SCROLL_STEP: u16 = 10;

/// Scroll position plus the one-way reveal latches derived from it.
#[derive(Debug)]
pub struct ScrollState {
    /// First visible document row.
    pub offset: u16,
    /// Content viewport height in rows (navbar and status bar excluded).
    viewport: u16,
    /// One-way reveal latch per section, indexed by [`SectionId::index`].
    sections_revealed: [bool; SectionId::ORDER.len()],
    /// One-way reveal latch per work item; latched with the Work section.
    work_items_revealed: [bool; WORK_ITEMS.len()],
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            viewport: 0,
            sections_revealed: [false; SectionId::ORDER.len()],
            work_items_revealed: [false; WORK_ITEMS.len()],
        }
    }

    /// Navbar style flag: strictly above the threshold.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.offset > NAVBAR_SCROLL_THRESHOLD
    }

    #[must_use]
    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    /// Largest reachable offset for the current viewport.
    #[must_use]
    pub fn max_offset(&self) -> u16 {
        document_height().saturating_sub(self.viewport)
    }

    /// Records the content viewport height (called by the main loop on
    /// every iteration, so terminal resizes are picked up immediately).
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport = rows;
        self.offset = self.offset.min(self.max_offset());
        self.update_reveal();
    }

    /// Scrolls by a signed number of rows, clamped to the document.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = i64::from(self.offset) + i64::from(delta);
        let clamped = target.clamp(0, i64::from(self.max_offset()));
        // max_offset fits in u16, so the clamp guarantees the cast.
        self.offset = u16::try_from(clamped).unwrap_or(0);
        self.update_reveal();
    }

    /// Jumps so `row` is the first visible document row.
    pub fn scroll_to(&mut self, row: u16) {
        self.offset = row.min(self.max_offset());
        self.update_reveal();
    }

    /// Jumps to the top of a section.
    pub fn scroll_to_section(&mut self, section: SectionId) {
        self.scroll_to(section.start());
    }

    #[must_use]
    pub fn section_revealed(&self, section: SectionId) -> bool {
        self.sections_revealed[section.index()]
    }

    #[must_use]
    pub fn work_item_revealed(&self, index: usize) -> bool {
        self.work_items_revealed.get(index).copied().unwrap_or(false)
    }

    /// Latches any section now sufficiently visible. Reveals never revert.
    fn update_reveal(&mut self) {
        let window_top = self.offset;
        let window_bottom =
            self.offset + self.viewport.saturating_sub(REVEAL_BOTTOM_MARGIN);

        for section in SectionId::ORDER {
            if self.sections_revealed[section.index()] {
                continue;
            }
            let start = section.start();
            let end = start + section.height();
            let visible = window_bottom.min(end).saturating_sub(window_top.max(start));
            let fraction = f32::from(visible) / f32::from(section.height());
            if fraction >= REVEAL_VISIBLE_FRACTION {
                self.sections_revealed[section.index()] = true;
                if section == SectionId::Work {
                    self.work_items_revealed = [true; WORK_ITEMS.len()];
                }
            }
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
