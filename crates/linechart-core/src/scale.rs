// File: crates/linechart-core/src/scale.rs
// Summary: Category (band) and value (linear) scale transforms.

/// Default inner/outer band padding, as a fraction of the band step.
pub const BAND_PADDING: f64 = 0.1;

/// Horizontal band scale over an ordered category sequence.
///
/// Bands are addressed by position, so duplicate labels get their own band.
/// Padding is applied inner and outer, with the bands centered in the range.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
    padding: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
    reverse: bool,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self::with_padding(count, range, BAND_PADDING)
    }

    pub fn with_padding(count: usize, range: (f64, f64), padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let (r0, r1) = range;
        let reverse = r1 < r0;
        let (lo, hi) = if reverse { (r1, r0) } else { (r0, r1) };
        let n = count as f64;
        let step = (hi - lo) / (n - padding + padding * 2.0).max(1.0);
        // center the bands (align 0.5)
        let start = lo + (hi - lo - step * (n - padding)) * 0.5;
        Self { count, range, padding, start, step, bandwidth: step * (1.0 - padding), reverse }
    }

    pub fn count(&self) -> usize { self.count }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn padding(&self) -> f64 { self.padding }
    pub fn step(&self) -> f64 { self.step }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    /// Left edge of band `index`; `None` past the end.
    pub fn to_px(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        let slot = if self.reverse { self.count - 1 - index } else { index };
        Some(self.start + self.step * slot as f64)
    }

    /// Center of band `index`.
    pub fn center_px(&self, index: usize) -> Option<f64> {
        self.to_px(index).map(|x| x + self.bandwidth * 0.5)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[bottom_px, top_px]`.
///
/// A collapsed domain maps every value onto the middle of the range instead of
/// dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmin, vmax }
    }

    pub fn domain(&self) -> (f64, f64) { (self.vmin, self.vmax) }
    pub fn range(&self) -> (f64, f64) { (self.bottom_px, self.top_px) }

    pub fn is_degenerate(&self) -> bool {
        self.vmax == self.vmin
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        let span = self.vmax - self.vmin;
        let t = if span == 0.0 { 0.5 } else { (y - self.vmin) / span };
        self.bottom_px + t * (self.top_px - self.bottom_px)
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        let span_px = self.top_px - self.bottom_px;
        if span_px == 0.0 {
            return self.vmin;
        }
        self.vmin + (py - self.bottom_px) / span_px * (self.vmax - self.vmin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn band_two_categories_over_330px() {
        // step = 330 / (2 - 0.1 + 0.2) = 157.142857...
        let band = BandScale::new(2, (0.0, 330.0));
        let step = 330.0 / 2.1;
        assert!(close(band.step(), step));
        assert!(close(band.bandwidth(), step * 0.9));
        assert!(close(band.to_px(0).unwrap(), step * 0.1));
        assert!(close(band.to_px(1).unwrap(), step * 1.1));
        assert!(band.to_px(2).is_none());
        // symmetric outer padding
        let right_gap = 330.0 - (band.to_px(1).unwrap() + band.bandwidth());
        assert!(close(right_gap, band.to_px(0).unwrap()));
    }

    #[test]
    fn band_single_category_is_centered() {
        let band = BandScale::new(1, (0.0, 100.0));
        let center = band.center_px(0).unwrap();
        assert!(close(center, 50.0));
    }

    #[test]
    fn band_empty_domain_has_no_positions() {
        let band = BandScale::new(0, (0.0, 100.0));
        assert_eq!(band.count(), 0);
        assert!(band.to_px(0).is_none());
    }

    #[test]
    fn band_negative_range_reverses_order() {
        let band = BandScale::new(3, (0.0, -30.0));
        let a = band.to_px(0).unwrap();
        let c = band.to_px(2).unwrap();
        assert!(a > c);
        assert!(band.step() > 0.0);
    }

    #[test]
    fn value_scale_is_inverted() {
        let s = ValueScale::new_linear(0.0, 250.0, 0.0, 20.0);
        assert!(close(s.to_px(0.0), 250.0));
        assert!(close(s.to_px(20.0), 0.0));
        assert!(close(s.to_px(10.0), 125.0));
        assert!(close(s.from_px(125.0), 10.0));
    }

    #[test]
    fn collapsed_domain_maps_to_middle() {
        let s = ValueScale::new_linear(0.0, 200.0, 0.0, 0.0);
        assert!(s.is_degenerate());
        assert!(close(s.to_px(0.0), 100.0));
        assert!(close(s.to_px(-5.0), 100.0));
    }
}
