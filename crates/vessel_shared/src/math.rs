//! # Viewport Math
//!
//! Letterboxing of the fixed 16:9 logical surface into an arbitrary client
//! rectangle.

use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Aspect numerator the surface is locked to.
const ASPECT_W: u32 = (SURFACE_WIDTH / gcd(SURFACE_WIDTH, SURFACE_HEIGHT)) as u32;
/// Aspect denominator the surface is locked to.
const ASPECT_H: u32 = (SURFACE_HEIGHT / gcd(SURFACE_WIDTH, SURFACE_HEIGHT)) as u32;

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// A pixel rectangle inside the window's client area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge in pixels.
    pub x: u32,
    /// Bottom/top edge in pixels (presenter's convention).
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// True when the rectangle has zero area and rendering should be skipped.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Computes the largest centered viewport with the surface's aspect ratio
/// that fits the client area at an integer multiple of 16x9.
///
/// A minimized window (zero client area) or one too small to fit even one
/// 16x9 cell yields an empty viewport, which the scheduler treats as "skip
/// rendering this iteration".
#[must_use]
pub fn letterbox(client_width: u32, client_height: u32) -> Viewport {
    let m = (client_width / ASPECT_W).min(client_height / ASPECT_H);
    let width = m * ASPECT_W;
    let height = m * ASPECT_H;
    Viewport {
        x: (client_width - width) / 2,
        y: (client_height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_has_no_bars() {
        let vp = letterbox(1280, 720);
        assert_eq!(
            vp,
            Viewport {
                x: 0,
                y: 0,
                width: 1280,
                height: 720
            }
        );
    }

    #[test]
    fn test_tall_window_gets_vertical_bars() {
        let vp = letterbox(1920, 1200);
        assert_eq!(vp.width, 1920);
        assert_eq!(vp.height, 1080);
        assert_eq!(vp.x, 0);
        assert_eq!(vp.y, 60);
    }

    #[test]
    fn test_wide_window_gets_horizontal_bars() {
        let vp = letterbox(2000, 720);
        assert_eq!(vp.height, 720);
        assert_eq!(vp.width, 1280);
        assert_eq!(vp.x, 360);
        assert_eq!(vp.y, 0);
    }

    #[test]
    fn test_minimized_window_is_empty() {
        assert!(letterbox(0, 0).is_empty());
        assert!(letterbox(1280, 0).is_empty());
        assert!(letterbox(0, 720).is_empty());
    }

    #[test]
    fn test_tiny_window_is_empty() {
        // Smaller than one 16x9 cell in either dimension.
        assert!(letterbox(15, 9).is_empty());
        assert!(letterbox(16, 8).is_empty());
        assert!(!letterbox(16, 9).is_empty());
    }

    #[test]
    fn test_viewport_fits_client_area() {
        for (w, h) in [(17, 10), (100, 100), (3440, 1440), (640, 480)] {
            let vp = letterbox(w, h);
            assert!(vp.x + vp.width <= w);
            assert!(vp.y + vp.height <= h);
            if !vp.is_empty() {
                assert_eq!(vp.width % 16, 0);
                assert_eq!(vp.height % 9, 0);
                assert_eq!(vp.width / 16, vp.height / 9);
            }
        }
    }
}
