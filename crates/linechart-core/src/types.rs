// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (viewport, margins, plot rectangle).

/// Default viewport width in pixels.
pub const WIDTH: f64 = 800.0;
/// Default viewport height in pixels.
pub const HEIGHT: f64 = 480.0;

/// Fixed chart margins: top 20, right 20, bottom 30, left 50.
pub const MARGINS: Insets = Insets::new(50, 20, 20, 30);

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        MARGINS
    }
}

/// Host-provided drawing area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Plotting rectangle left after subtracting `insets`.
    ///
    /// Width/height may come out zero or negative for small viewports; callers
    /// get the degenerate rectangle rather than an error.
    pub fn plot_rect(&self, insets: &Insets) -> PlotRect {
        PlotRect {
            left: insets.left as f64,
            top: insets.top as f64,
            width: self.width - insets.hsum() as f64,
            height: self.height - insets.vsum() as f64,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Plotting rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }
    /// True when either side is zero or negative.
    pub fn is_degenerate(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_subtracts_margins() {
        let plot = Viewport::new(400.0, 300.0).plot_rect(&MARGINS);
        assert_eq!(plot.left, 50.0);
        assert_eq!(plot.top, 20.0);
        assert_eq!(plot.width, 330.0);
        assert_eq!(plot.height, 250.0);
        assert!(!plot.is_degenerate());
    }

    #[test]
    fn tiny_viewport_goes_negative() {
        let plot = Viewport::new(10.0, 10.0).plot_rect(&MARGINS);
        assert_eq!(plot.width, -60.0);
        assert_eq!(plot.height, -40.0);
        assert!(plot.is_degenerate());
    }
}
