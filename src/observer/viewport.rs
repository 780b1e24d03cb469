//! Line-oriented viewport
//!
//! Rows `0..content_rows` hold records; the sentinel sits on row
//! `content_rows`, directly after the last record.

use super::IntersectionEntry;

/// A window of `height` rows scrolled to `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    height: usize,
    offset: usize,
}

impl Viewport {
    /// Create a viewport at the top; height is at least one row
    pub fn new(height: usize) -> Self {
        Self {
            height: height.max(1),
            offset: 0,
        }
    }

    /// Rows shown at once
    pub fn height(&self) -> usize {
        self.height
    }

    /// First visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible record rows
    pub fn visible_rows(&self, content_rows: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(content_rows);
        let end = (self.offset + self.height).min(content_rows);
        start..end
    }

    /// Scroll down by `rows`, stopping once the sentinel is on the last line
    pub fn scroll_down(&mut self, rows: usize, content_rows: usize) {
        let max_offset = (content_rows + 1).saturating_sub(self.height);
        self.offset = (self.offset + rows).min(max_offset.max(self.offset));
    }

    /// Scroll up by `rows`
    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Scroll down one screen
    pub fn page_down(&mut self, content_rows: usize) {
        self.scroll_down(self.height, content_rows);
    }

    /// Scroll up one screen
    pub fn page_up(&mut self) {
        self.scroll_up(self.height);
    }

    /// Visibility of the sentinel row
    pub fn sentinel(&self, content_rows: usize) -> IntersectionEntry {
        if content_rows >= self.offset && content_rows < self.offset + self.height {
            IntersectionEntry::visible()
        } else {
            IntersectionEntry::hidden()
        }
    }
}
