// Image index cycling for the details modal.

use std::ops::Range;

/// The images of one mode and the one currently shown.
///
/// Built fresh for every modal open; nothing carries over between records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    current: usize,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Step back, wrapping from the first image to the last.
    pub fn prev(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = if self.current > 0 {
            self.current - 1
        } else {
            self.images.len() - 1
        };
    }

    /// Step forward, wrapping from the last image to the first.
    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = if self.current + 1 < self.images.len() {
            self.current + 1
        } else {
            0
        };
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Prev and next are shown together, and only when there is somewhere to go.
    pub fn controls_visible(&self) -> bool {
        self.images.len() > 1
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.images.is_empty() && index == self.current
    }

    /// Thumbnails that fit in `capacity` slots, centred on the active one
    /// where possible.
    pub fn thumb_window(&self, capacity: usize) -> Range<usize> {
        let len = self.images.len();
        if capacity == 0 || len == 0 {
            return 0..0;
        }
        if len <= capacity {
            return 0..len;
        }
        let start = self
            .current
            .saturating_sub(capacity / 2)
            .min(len - capacity);
        start..start + capacity
    }
}
