//! Carousel Index Math
//!
//! Wrap-around paging for the tip card and the multi-card tip strip.

/// Number of strip cards visible for a window width
pub fn visible_for_width(width: f64) -> usize {
    if width < 640.0 {
        1
    } else if width < 1024.0 {
        2
    } else {
        3
    }
}

/// Window of `visible` cards over `len` entries, paged one card at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    pub len: usize,
    pub visible: usize,
    pub index: usize,
}

impl Carousel {
    pub fn new(len: usize, visible: usize) -> Self {
        Self {
            len,
            visible: visible.clamp(1, len.max(1)),
            index: 0,
        }
    }

    /// Number of distinct start positions
    pub fn pages(&self) -> usize {
        if self.len == 0 {
            return 1;
        }
        self.len - self.visible + 1
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.pages(),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        let index = if self.index == 0 {
            self.pages() - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }

    /// Jump to a start position, clamped to the last page
    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.pages() - 1),
            ..self
        }
    }

    /// Keep the index in range after the visible count changes
    pub fn with_visible(self, visible: usize) -> Self {
        let resized = Self {
            index: self.index,
            ..Self::new(self.len, visible)
        };
        Self {
            index: resized.index.min(resized.pages() - 1),
            ..resized
        }
    }

    /// Indices of the cards currently shown
    pub fn window(&self) -> std::ops::Range<usize> {
        self.index..(self.index + self.visible).min(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_card_wraps() {
        let c = Carousel::new(6, 1);
        assert_eq!(c.next().index, 1);
        assert_eq!(c.prev().index, 5);
        let last = Carousel { index: 5, ..c };
        assert_eq!(last.next().index, 0);
    }

    #[test]
    fn test_strip_wraps_at_last_full_page() {
        // 10 tips, 3 visible: start positions 0..=7
        let c = Carousel::new(10, 3);
        assert_eq!(c.pages(), 8);
        assert_eq!(c.prev().index, 7);
        assert_eq!(Carousel { index: 7, ..c }.next().index, 0);
        assert_eq!(Carousel { index: 7, ..c }.window(), 7..10);
    }

    #[test]
    fn test_resize_clamps_index() {
        let c = Carousel { index: 9, ..Carousel::new(10, 1) };
        let wide = c.with_visible(3);
        assert_eq!(wide.visible, 3);
        assert_eq!(wide.index, 7);
    }

    #[test]
    fn test_go_to_clamps() {
        let c = Carousel::new(10, 3);
        assert_eq!(c.go_to(4).index, 4);
        assert_eq!(c.go_to(12).index, 7);
    }

    #[test]
    fn test_visible_for_width() {
        assert_eq!(visible_for_width(320.0), 1);
        assert_eq!(visible_for_width(800.0), 2);
        assert_eq!(visible_for_width(1280.0), 3);
    }

    #[test]
    fn test_empty_carousel() {
        let c = Carousel::new(0, 3);
        assert_eq!(c.next().index, 0);
        assert_eq!(c.prev().index, 0);
        assert_eq!(c.window(), 0..0);
    }
}
