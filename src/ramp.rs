//! Perceptual colour ramp.
//!
//! A fifth-order polynomial fit of the Turbo colormap, evaluated per channel.
//! Cheap enough to run for every point on every pointer move.

/// Per-channel coefficients for `[1, t, t^2, t^3]` and `[t^4, t^5]`.
const RED: ([f64; 4], [f64; 2]) = (
    [0.13572138, 4.6153926, -42.66032258, 132.13108234],
    [-152.94239396, 59.28637943],
);
const GREEN: ([f64; 4], [f64; 2]) = (
    [0.09140261, 2.19418839, 4.84296658, -14.18503333],
    [4.27729857, 2.82956604],
);
const BLUE: ([f64; 4], [f64; 2]) = (
    [0.1066733, 12.64194608, -60.58204836, 110.36276771],
    [-89.90310912, 27.34824973],
);

/// Weights of the linear and logarithmic distance terms.
const LINEAR_WEIGHT: f64 = 0.4;
const LOG_WEIGHT: f64 = 0.6;

/// RGB colour with channels in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255.0,
        g: 255.0,
        b: 255.0,
    };

    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", channel(self.r), channel(self.g), channel(self.b))
    }

    pub fn to_css_alpha(&self, alpha: f64) -> String {
        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            alpha
        )
    }
}

fn channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

fn saturate(t: f64) -> f64 {
    if t.is_nan() {
        1.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

fn dot4(a: [f64; 4], b: [f64; 4]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

fn dot2(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

/// Map `t` in `[0, 1]` to a colour. Out-of-range input saturates.
pub fn ramp_color(t: f64) -> Rgb {
    let t = saturate(t);
    let v4 = [1.0, t, t * t, t * t * t];
    let v2 = [v4[2] * v4[2], v4[3] * v4[2]];
    let eval = |(c4, c2): ([f64; 4], [f64; 2])| {
        ((dot4(v4, c4) + dot2(v2, c2)) * 255.0).clamp(0.0, 255.0)
    };
    Rgb {
        r: eval(RED),
        g: eval(GREEN),
        b: eval(BLUE),
    }
}

/// Blend of linear and logarithmic cursor distance, always in `[0, 1]`.
///
/// The log term is undefined or inverted below one pixel, so anything closer
/// than that maps straight to 1.
pub fn colormap_ratio(dist: f64, max_dist: f64) -> f64 {
    if dist.is_nan() {
        return 1.0;
    }
    if dist < 1.0 {
        return 1.0;
    }
    let linear = if max_dist > 0.0 { dist / max_dist } else { 0.0 };
    let log = 1.0 - 1.0 / dist.log10();
    saturate(LINEAR_WEIGHT * linear + LOG_WEIGHT * log)
}
