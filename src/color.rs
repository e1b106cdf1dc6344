//! Diverging red-yellow-blue color ramp.
//!
//! The ramp is the 11-class RdYlBu scheme run through a uniform cubic
//! B-spline per RGB channel, which is how the browser charting stack builds
//! its continuous `interpolateRdYlBu`. `t = 0` is deep red, `t = 1` deep blue.

use std::fmt;

const RD_YL_BU: &str = "a50026d73027f46d43fdae61fee090ffffbfe0f3f8abd9e974add14575b4313695";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok().map(f64::from);
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    fn clamp_channel(v: f64) -> u8 {
        if v.is_nan() {
            return 0;
        }
        // Browser rounding: half toward positive infinity.
        (v + 0.5).floor().clamp(0.0, 255.0) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {})",
            Self::clamp_channel(self.r),
            Self::clamp_channel(self.g),
            Self::clamp_channel(self.b)
        )
    }
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Evaluate a B-spline through `values` at `t` in `[0, 1]`.
fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (i, t) = if t <= 0.0 {
        (0, 0.0)
    } else if t >= 1.0 {
        (n - 1, 1.0)
    } else {
        ((t * n as f64).floor() as usize, t)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

/// Continuous interpolator over a list of control colors.
#[derive(Debug, Clone)]
pub struct Ramp {
    r: Vec<f64>,
    g: Vec<f64>,
    b: Vec<f64>,
}

impl Ramp {
    /// Needs at least two control colors.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        if scheme.len() % 6 != 0 || scheme.len() < 12 {
            return None;
        }
        let mut ramp = Ramp { r: Vec::new(), g: Vec::new(), b: Vec::new() };
        for i in (0..scheme.len()).step_by(6) {
            let c = Rgb::from_hex(scheme.get(i..i + 6)?)?;
            ramp.r.push(c.r);
            ramp.g.push(c.g);
            ramp.b.push(c.b);
        }
        Some(ramp)
    }

    pub fn rd_yl_bu() -> Self {
        Self::from_scheme(RD_YL_BU).unwrap_or_else(|| unreachable!("RdYlBu scheme is well formed"))
    }

    pub fn at(&self, t: f64) -> Rgb {
        Rgb {
            r: basis_spline(&self.r, t),
            g: basis_spline(&self.g, t),
            b: basis_spline(&self.b, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse() {
        let c = Rgb::from_hex("a50026").unwrap();
        assert_eq!((c.r, c.g, c.b), (165.0, 0.0, 38.0));
        assert!(Rgb::from_hex("zz0000").is_none());
        assert!(Rgb::from_hex("abc").is_none());
    }

    #[test]
    fn test_ramp_endpoints_and_middle() {
        let ramp = Ramp::rd_yl_bu();
        // End knots of a clamped uniform B-spline land on the first/last control.
        assert_eq!(ramp.at(0.0).to_string(), "rgb(165, 0, 38)");
        assert_eq!(ramp.at(1.0).to_string(), "rgb(49, 54, 149)");
        // Interior knot at t = 0.5: (v0 + 4 v1 + v2) / 6 around ffffbf.
        assert_eq!(ramp.at(0.5).to_string(), "rgb(250, 248, 193)");
    }

    #[test]
    fn test_ramp_clamps_outside_unit_interval() {
        let ramp = Ramp::rd_yl_bu();
        assert_eq!(ramp.at(-3.0), ramp.at(0.0));
        assert_eq!(ramp.at(7.0), ramp.at(1.0));
    }

    #[test]
    fn test_display_rounds_and_clamps() {
        let c = Rgb { r: 254.5, g: -3.0, b: 300.0 };
        assert_eq!(c.to_string(), "rgb(255, 0, 255)");
    }
}
