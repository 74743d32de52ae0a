//! Reveal-on-view for animated sections.
//!
//! A section starts hidden (faded out, shifted down) and reveals the first
//! time it intersects the viewport shrunk by [`REVEAL_MARGIN_PX`] on each edge.
//! Once revealed it stays revealed, even when scrolled back out of view.

use crate::scroll::LayerStyle;

/// Viewport inset applied before testing intersection.
pub const REVEAL_MARGIN_PX: f64 = 100.0;

/// Vertical offset of a section before it reveals.
pub const HIDDEN_OFFSET_PX: f64 = 50.0;

/// CSS transition used when a section reveals.
pub const REVEAL_TRANSITION: &str = "transition: opacity 0.6s ease-out, transform 0.6s ease-out;";

/// Whether an element's box intersects the viewport shrunk by `margin_px`.
pub fn is_in_view(rect_top: f64, rect_bottom: f64, viewport_height: f64, margin_px: f64) -> bool {
    let top_edge = margin_px;
    let bottom_edge = viewport_height - margin_px;
    if bottom_edge <= top_edge {
        return false;
    }
    rect_top < bottom_edge && rect_bottom > top_edge
}

/// One-way latch behind an animated section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the element's current bounding box. Returns the latched state.
    pub fn observe(&mut self, rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
        if !self.revealed && is_in_view(rect_top, rect_bottom, viewport_height, REVEAL_MARGIN_PX) {
            self.revealed = true;
        }
        self.revealed
    }

    pub fn style(&self) -> LayerStyle {
        if self.revealed {
            LayerStyle::IDENTITY
        } else {
            LayerStyle {
                translate_y: HIDDEN_OFFSET_PX,
                opacity: 0.0,
                scale: 1.0,
            }
        }
    }

    /// Inline CSS including the transition.
    pub fn css(&self) -> String {
        format!("{}{}", self.style().to_css(), REVEAL_TRANSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_shrinks_viewport() {
        // 1000px viewport, visible band is 100..900
        assert!(!is_in_view(950.0, 1200.0, 1000.0, 100.0));
        assert!(!is_in_view(900.0, 1200.0, 1000.0, 100.0));
        assert!(is_in_view(899.0, 1200.0, 1000.0, 100.0));
        assert!(!is_in_view(-300.0, 100.0, 1000.0, 100.0));
        assert!(is_in_view(-300.0, 101.0, 1000.0, 100.0));
    }

    #[test]
    fn tiny_viewport_never_intersects() {
        assert!(!is_in_view(0.0, 10.0, 150.0, 100.0));
    }

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert_eq!(latch.style().opacity, 0.0);
        assert_eq!(latch.style().translate_y, HIDDEN_OFFSET_PX);
    }

    #[test]
    fn reveals_once_and_stays() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(1500.0, 1800.0, 1000.0));
        assert!(latch.observe(500.0, 800.0, 1000.0));
        // scrolled far past it
        assert!(latch.observe(-2000.0, -1700.0, 1000.0));
        assert_eq!(latch.style(), LayerStyle::IDENTITY);
    }

    #[test]
    fn taller_viewport_reveals_without_scrolling() {
        let mut latch = RevealLatch::default();
        // same box, window resized from 800px to 1200px tall
        assert!(!latch.observe(750.0, 1000.0, 800.0));
        assert!(latch.observe(750.0, 1000.0, 1200.0));
        // shrinking back keeps it revealed
        assert!(latch.observe(750.0, 1000.0, 800.0));
    }

    #[test]
    fn css_carries_transition() {
        let mut latch = RevealLatch::default();
        assert!(latch.css().contains("opacity:0.0000;"));
        latch.observe(0.0, 500.0, 1000.0);
        assert_eq!(latch.css(), REVEAL_TRANSITION);
    }
}
