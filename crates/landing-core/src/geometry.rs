//! Viewport-relative rectangles, as reported by `getBoundingClientRect`.

/// Element box in viewport coordinates (CSS pixels, y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the whole rectangle lies inside the viewport.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= self.height && rect.right <= self.width
    }

    /// Fraction of the rectangle's area inside the viewport after shrinking
    /// the viewport's bottom edge by `bottom_margin`.
    ///
    /// Degenerate (zero-area) rectangles count as fully visible when they touch
    /// the zone, and invisible otherwise.
    pub fn visible_ratio(&self, rect: &Rect, bottom_margin: f64) -> f64 {
        let zone_bottom = (self.height - bottom_margin).max(0.0);
        let vis_h = rect.bottom.min(zone_bottom) - rect.top.max(0.0);
        let vis_w = rect.right.min(self.width) - rect.left.max(0.0);
        if vis_h < 0.0 || vis_w < 0.0 {
            return 0.0;
        }
        let (h, w) = (rect.height(), rect.width());
        if h <= 0.0 || w <= 0.0 {
            return 1.0;
        }
        ((vis_h / h) * (vis_w / w)).clamp(0.0, 1.0)
    }
}
