// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel scale with inverted-range support.

/// Linear interpolation from a data domain onto a pixel range.
/// The range may be inverted (r0 > r1) for screen-Y orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    /// Build a scale over `domain` mapping onto `range`.
    /// A degenerate domain is widened by 1.0 so interpolation stays finite.
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f32 {
        self.r0 + (((v - self.d0) / (self.d1 - self.d0)) as f32) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        self.d0 + (((px - self.r0) / (self.r1 - self.r0)) as f64) * (self.d1 - self.d0)
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f32, f32) { (self.r0, self.r1) }
}

/// Min/max over an iterator of values; `None` when empty or all non-finite.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if !v.is_finite() { continue; }
        lo = lo.min(v);
        hi = hi.max(v);
        any = true;
    }
    if any { Some((lo, hi)) } else { None }
}
