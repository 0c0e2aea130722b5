//! Horizontal travel range and resting height for the paddle
//!
//! Pure functions of the current viewport, paddle half-width, and configured
//! offsets. Nothing here is cached: the window can be resized and the paddle
//! width can change between frames, so callers recompute every tick.

use serde::{Deserialize, Serialize};

/// Snapshot of the rendering surface, polled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Surface width in pixels
    pub width: f32,
    /// Surface height in pixels
    pub height: f32,
    /// Half of the world-space camera height (orthographic half extent)
    pub vertical_half_extent: f32,
}

impl ViewportMetrics {
    pub fn new(width: f32, height: f32, vertical_half_extent: f32) -> Self {
        Self {
            width,
            height,
            vertical_half_extent,
        }
    }

    /// World-space camera width derived from the aspect ratio
    #[inline]
    pub fn camera_width(&self) -> f32 {
        self.vertical_half_extent * 2.0 * (self.width / self.height)
    }
}

/// Source of viewport metrics (the rendering surface, injected)
pub trait ViewportSource {
    fn metrics(&self) -> ViewportMetrics;
}

/// Viewport that never changes, for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub ViewportMetrics);

impl ViewportSource for FixedViewport {
    fn metrics(&self) -> ViewportMetrics {
        self.0
    }
}

/// Valid interval for the paddle's center x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRange {
    pub min_x: f32,
    pub max_x: f32,
}

impl BoundaryRange {
    /// Clamp a center position into the range
    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min_x, self.max_x)
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max_x - self.min_x
    }
}

/// Boundary output for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleBounds {
    pub range: BoundaryRange,
    /// Resting height for the paddle center
    pub vertical_y: f32,
    /// The configured offsets and width left no room to travel; the range
    /// was collapsed to a zero-width interval at the midpoint
    pub degenerate: bool,
}

/// Derive the paddle's travel range and resting height
///
/// `min_x`/`max_x` keep the whole paddle (plus the edge offset) on screen.
/// When the paddle plus offsets is wider than the camera the raw interval
/// inverts; it is collapsed to zero width at the midpoint so no inverted
/// bounds ever reach `clamp`/`lerp`. A zero-height viewport is treated the
/// same way.
pub fn compute_bounds(
    viewport: ViewportMetrics,
    half_width: f32,
    vertical_offset: f32,
    horizontal_edge_offset: f32,
) -> PaddleBounds {
    let vertical_y = -viewport.vertical_half_extent + vertical_offset;

    let camera_width = viewport.camera_width();
    let min_x = -camera_width / 2.0 + half_width + horizontal_edge_offset;
    let max_x = camera_width / 2.0 - half_width - horizontal_edge_offset;

    if !min_x.is_finite() || !max_x.is_finite() || min_x > max_x {
        let midpoint = if min_x.is_finite() && max_x.is_finite() {
            (min_x + max_x) / 2.0
        } else {
            0.0
        };
        return PaddleBounds {
            range: BoundaryRange {
                min_x: midpoint,
                max_x: midpoint,
            },
            vertical_y,
            degenerate: true,
        };
    }

    PaddleBounds {
        range: BoundaryRange { min_x, max_x },
        vertical_y,
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widescreen() -> ViewportMetrics {
        ViewportMetrics::new(1920.0, 1080.0, 5.0)
    }

    #[test]
    fn test_widescreen_bounds() {
        // 16:9 at half extent 5: camera width 17.78, range ±7.79
        let bounds = compute_bounds(widescreen(), 1.0, 0.5, 0.1);
        assert!(!bounds.degenerate);
        assert!((widescreen().camera_width() - 17.78).abs() < 0.01);
        assert!((bounds.range.min_x - (-7.79)).abs() < 0.01);
        assert!((bounds.range.max_x - 7.79).abs() < 0.01);
    }

    #[test]
    fn test_vertical_resting_position() {
        let bounds = compute_bounds(widescreen(), 1.0, 0.5, 0.1);
        assert!((bounds.vertical_y - (-4.5)).abs() < 1e-6);
    }

    #[test]
    fn test_oversized_paddle_collapses_range() {
        // Paddle wider than the whole camera
        let bounds = compute_bounds(widescreen(), 20.0, 0.5, 0.1);
        assert!(bounds.degenerate);
        assert_eq!(bounds.range.min_x, bounds.range.max_x);
        assert!((bounds.range.min_x - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_height_viewport_collapses_range() {
        let viewport = ViewportMetrics::new(1920.0, 0.0, 5.0);
        let bounds = compute_bounds(viewport, 1.0, 0.5, 0.1);
        assert!(bounds.degenerate);
        assert_eq!(bounds.range.min_x, 0.0);
        assert_eq!(bounds.range.max_x, 0.0);
    }

    #[test]
    fn test_wider_paddle_narrows_range() {
        let narrow = compute_bounds(widescreen(), 1.0, 0.5, 0.1);
        let wide = compute_bounds(widescreen(), 2.0, 0.5, 0.1);
        assert!(wide.range.min_x > narrow.range.min_x);
        assert!(wide.range.max_x < narrow.range.max_x);
    }

    proptest! {
        #[test]
        fn prop_range_ordered_when_paddle_fits(
            width in 100.0_f32..4000.0,
            height in 100.0_f32..4000.0,
            half_extent in 1.0_f32..50.0,
            half_width in 0.01_f32..10.0,
            edge in 0.0_f32..2.0,
        ) {
            let viewport = ViewportMetrics::new(width, height, half_extent);
            prop_assume!(2.0 * (half_width + edge) <= viewport.camera_width());
            let bounds = compute_bounds(viewport, half_width, 0.5, edge);
            prop_assert!(!bounds.degenerate);
            prop_assert!(bounds.range.min_x <= bounds.range.max_x);
        }

        #[test]
        fn prop_clamp_never_leaves_range(
            x in -100.0_f32..100.0,
            half_width in 0.01_f32..10.0,
        ) {
            let bounds = compute_bounds(widescreen(), half_width, 0.5, 0.1);
            let clamped = bounds.range.clamp(x);
            prop_assert!(clamped >= bounds.range.min_x);
            prop_assert!(clamped <= bounds.range.max_x);
        }
    }
}
