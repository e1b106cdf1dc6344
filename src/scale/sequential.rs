use crate::color::{Ramp, Rgb};

/// Continuous value to color mapping over a two-point domain.
///
/// The domain may be given high-to-low; `t` is measured from the first
/// endpoint, so the first endpoint always maps to the start of the ramp.
#[derive(Debug, Clone)]
pub struct SequentialScale {
    domain: (f64, f64),
    ramp: Ramp,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), ramp: Ramp) -> Self {
        Self { domain, ramp }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Position of `value` along the ramp. A collapsed domain maps to the middle.
    pub fn t(&self, value: f64) -> f64 {
        let (x0, x1) = self.domain;
        if x0 == x1 {
            0.5
        } else {
            (value - x0) / (x1 - x0)
        }
    }

    pub fn map(&self, value: f64) -> Rgb {
        self.ramp.at(self.t(value))
    }

    /// Round tick values across the domain, in domain order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn js_round(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (i1, i2, inc) = if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        let mut i1 = js_round(start * scale);
        let mut i2 = js_round(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        (i1, i2, -scale)
    } else {
        let scale = 10f64.powf(power) * factor;
        let mut i1 = js_round(start / scale);
        let mut i2 = js_round(stop / scale);
        if i1 * scale < start {
            i1 += 1.0;
        }
        if i2 * scale > stop {
            i2 -= 1.0;
        }
        (i1, i2, scale)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice ticks at 1, 2 or 5 times a power of ten; descending when `stop < start`.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let k = if reverse { i2 - i as f64 } else { i1 + i as f64 };
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect()
}
