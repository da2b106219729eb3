/// Invertible linear mapping between a data domain and a pixel range.
///
/// The y scale uses an inverted range (`[height - margin, 0]`) so prices
/// grow upward on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn set_domain(&mut self, domain: [f64; 2]) {
        self.domain = domain;
    }

    pub fn set_range(&mut self, range: [f64; 2]) {
        self.range = range;
    }

    /// Domain value to pixel.
    pub fn scale(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) * (r1 - r0) / (d1 - d0)
    }

    /// Pixel back to domain value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (pixel - r0) * (d1 - d0) / (r1 - r0)
    }
}

/// Affine transform applied on top of an origin scale.
///
/// The zoom controller forces `k` to 1 and only carries the gesture's
/// translation; the seam stays so a continuous zoom could supply a real
/// scale factor later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ZoomTransform {
    pub fn identity() -> Self {
        Self { k: 1.0, x: 0.0, y: 0.0 }
    }

    pub fn translated(x: f64, y: f64) -> Self {
        Self { k: 1.0, x, y }
    }

    /// Derive a current x scale from an origin scale: the origin range is
    /// pulled back through the transform and re-inverted, so the returned
    /// scale keeps the origin's range with a shifted/stretched domain.
    pub fn rescale_x(&self, origin: &LinearScale) -> LinearScale {
        let [r0, r1] = origin.range();
        let d0 = origin.invert((r0 - self.x) / self.k);
        let d1 = origin.invert((r1 - self.x) / self.k);
        LinearScale::new([d0, d1], [r0, r1])
    }
}

/// The four live scales. Origin holds the canonical domain for the active
/// level/window; current is what drawing consults and gets swapped
/// wholesale on zoom or domain changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSet {
    x_origin: LinearScale,
    x_current: LinearScale,
    y_origin: LinearScale,
    y_current: LinearScale,
}

impl ScaleSet {
    /// Seed all four scales from the viewport size, the initial visible
    /// duration and the configured y domain.
    pub fn init(width: f64, height: f64, display_duration: f64, y_domain: [f64; 2], axis_margin: f64) -> Self {
        let x = LinearScale::new([0.0, display_duration], [0.0, width]);
        let y = LinearScale::new(y_domain, [height - axis_margin, 0.0]);
        Self { x_current: x.clone(), y_current: y.clone(), x_origin: x, y_origin: y }
    }

    pub fn x_origin(&self) -> &LinearScale {
        &self.x_origin
    }

    pub fn x_current(&self) -> &LinearScale {
        &self.x_current
    }

    pub fn y_origin(&self) -> &LinearScale {
        &self.y_origin
    }

    pub fn y_current(&self) -> &LinearScale {
        &self.y_current
    }

    pub fn x_origin_mut(&mut self) -> &mut LinearScale {
        &mut self.x_origin
    }

    pub fn y_origin_mut(&mut self) -> &mut LinearScale {
        &mut self.y_origin
    }

    pub fn set_x_origin(&mut self, scale: LinearScale) {
        self.x_origin = scale;
    }

    pub fn set_x_current(&mut self, scale: LinearScale) {
        self.x_current = scale;
    }

    pub fn set_y_origin(&mut self, scale: LinearScale) {
        self.y_origin = scale;
    }

    pub fn set_y_current(&mut self, scale: LinearScale) {
        self.y_current = scale;
    }
}

/// X ticks aligned to multiples of `interval` rather than to the domain
/// start, so grid lines stay put while the domain slides.
pub fn aligned_ticks(domain: [f64; 2], interval: f64) -> Vec<f64> {
    let [start, end] = domain;
    if interval <= 0.0 || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let adjusted_start = (start / interval).floor() * interval;
    let mut ticks = Vec::new();
    let mut i = adjusted_start;
    while i <= end {
        ticks.push(i);
        i += interval;
    }
    ticks
}

/// "Nice" tick values over `[start, stop]` targeting roughly `count`
/// steps, snapped to 1/2/5 x 10^n increments.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start >= stop {
        return Vec::new();
    }
    let step = tick_increment(start, stop, count);
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let lo = (start / step).ceil();
    let hi = (stop / step).floor();
    let mut ticks = Vec::with_capacity((hi - lo) as usize + 1);
    let mut i = lo;
    while i <= hi {
        ticks.push(i * step);
        i += 1.0;
    }
    ticks
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}
