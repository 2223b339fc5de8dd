// Horizontal scroll state for the card strip: hover-edge auto-scroll, drag,
// and wraparound over a list rendered as two back-to-back copies.

use crate::config::CarouselConfig;

/// Constant-velocity scroll driven by the tick.
///
/// `tick` checks `running` before doing anything, so a `stop` issued between
/// two ticks takes effect on the very next one.
#[derive(Debug, Clone, Default)]
pub struct AutoScroll {
    running: bool,
    velocity: f64,
}

impl AutoScroll {
    pub fn start(&mut self, velocity: f64) {
        self.running = true;
        self.velocity = velocity;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.velocity = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the delta to apply this frame, or None when stopped.
    fn step(&self) -> Option<f64> {
        if !self.running {
            return None;
        }
        Some(self.velocity)
    }
}

/// Pointer column and offset captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub offset_at_start: f64,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    offset: f64,
    auto: AutoScroll,
    drag: Option<DragAnchor>,
    content_width: f64,
    viewport_width: f64,
    looping: bool,

    hover_speed: f64,
    drag_multiplier: f64,
    hot_zone: f64,
}

impl Carousel {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            offset: 0.0,
            auto: AutoScroll::default(),
            drag: None,
            content_width: 0.0,
            viewport_width: 0.0,
            looping: false,
            hover_speed: config.hover_speed,
            drag_multiplier: config.drag_multiplier,
            hot_zone: config.hot_zone,
        }
    }

    /// Start over with new content. `looping` is only valid when the content
    /// is exactly two copies of the same card list.
    pub fn reset(&mut self, content_width: f64, looping: bool) {
        self.offset = 0.0;
        self.auto.stop();
        self.drag = None;
        self.content_width = content_width.max(0.0);
        self.looping = looping;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width.max(0.0);
        self.correct();
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn velocity(&self) -> f64 {
        self.auto.velocity()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto.is_running()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag
    }

    /// Width of one copy of the card list.
    pub fn single_set_width(&self) -> f64 {
        if self.looping {
            self.content_width / 2.0
        } else {
            self.content_width
        }
    }

    /// Pointer moved to `pointer_x` (relative to the strip's left edge).
    /// The outer `hot_zone` fraction on each side scrolls; the middle stops.
    pub fn hover(&mut self, pointer_x: f64, viewport_width: f64) {
        if self.drag.is_some() {
            return;
        }
        let zone = viewport_width * self.hot_zone;
        if pointer_x < zone {
            self.auto.start(-self.hover_speed);
        } else if pointer_x > viewport_width - zone {
            self.auto.start(self.hover_speed);
        } else {
            self.auto.stop();
        }
    }

    /// Pointer left the strip.
    pub fn leave(&mut self) {
        self.auto.stop();
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        self.auto.stop();
        self.drag = Some(DragAnchor {
            pointer_x,
            offset_at_start: self.offset,
        });
    }

    pub fn drag_to(&mut self, pointer_x: f64) {
        let Some(anchor) = self.drag else {
            return;
        };
        let walk = (pointer_x - anchor.pointer_x) * self.drag_multiplier;
        self.offset = anchor.offset_at_start - walk;
        self.correct();
    }

    pub fn end_drag(&mut self) -> Option<DragAnchor> {
        self.drag.take()
    }

    /// Advance one frame. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(delta) = self.auto.step() else {
            return false;
        };
        self.offset += delta;
        self.correct();
        true
    }

    /// Scroll the minimum amount needed to show `[start, end)` in content
    /// coordinates.
    pub fn reveal(&mut self, start: f64, end: f64) {
        if start < self.offset {
            self.offset = start;
        } else if end > self.offset + self.viewport_width {
            self.offset = end - self.viewport_width;
        }
        self.correct();
    }

    fn correct(&mut self) {
        if self.looping {
            self.offset = wrap_offset(self.offset, self.single_set_width());
        } else {
            let max = (self.content_width - self.viewport_width).max(0.0);
            self.offset = self.offset.clamp(0.0, max);
        }
    }
}

/// Fold `offset` back into `[0, width)` by whole set widths, so the visible
/// content never jumps.
pub fn wrap_offset(offset: f64, width: f64) -> f64 {
    if width <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    let wrapped = offset.rem_euclid(width);
    // rem_euclid can round up to `width` for tiny negative inputs.
    if wrapped >= width {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_subtracts_set_width_at_upper_bound() {
        assert_eq!(wrap_offset(100.0, 100.0), 0.0);
        assert_eq!(wrap_offset(100.5, 100.0), 0.5);
    }

    #[test]
    fn wrap_adds_set_width_below_zero() {
        assert_eq!(wrap_offset(-0.5, 100.0), 99.5);
    }

    #[test]
    fn wrap_handles_multiple_set_widths() {
        assert_eq!(wrap_offset(350.0, 100.0), 50.0);
        assert_eq!(wrap_offset(-250.0, 100.0), 50.0);
    }

    #[test]
    fn wrap_with_tiny_negative_stays_in_range() {
        let w = wrap_offset(-1e-18, 100.0);
        assert!((0.0..100.0).contains(&w));
    }

    #[test]
    fn wrap_of_empty_width_is_zero() {
        assert_eq!(wrap_offset(12.0, 0.0), 0.0);
    }
}
