//! Easing curves
//!
//! Maps normalized progress `t in [0, 1]` to an eased value. Power and circ
//! families follow the usual Penner shapes; [`Easing::CubicBezier`] matches
//! CSS `cubic-bezier(x1, y1, x2, y2)` and is the escape hatch for hand-drawn
//! curves (anticipation dips, overshoots).

use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// `t^(n+1)`: PowerIn(1) is the classic quadratic ease-in.
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
    CircIn,
    CircOut,
    /// Exponentially decaying oscillation toward 1.
    ElasticOut { amplitude: f32, period: f32 },
    /// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
    /// `x1` and `x2` must lie in [0, 1]; y values are unconstrained.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    #[must_use]
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Evaluates the curve at `t`. Input is clamped to [0, 1]; output is 0
    /// at 0 and 1 at 1 for every curve, but may leave [0, 1] in between
    /// (elastic, bezier).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::PowerIn(n) => t.powi(i32::from(n) + 1),
            Self::PowerOut(n) => 1.0 - (1.0 - t).powi(i32::from(n) + 1),
            Self::PowerInOut(n) => {
                let p = i32::from(n) + 1;
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(p)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powi(p)
                }
            }
            Self::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Self::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            Self::ElasticOut { amplitude, period } => {
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                let a = amplitude.max(1.0);
                let p = period.max(1e-3);
                let s = p / TAU * (1.0 / a).asin();
                a * 2.0_f32.powf(-10.0 * t) * ((t - s) * TAU / p).sin() + 1.0
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                let s = solve_bezier_parameter(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }
}

/// One-dimensional cubic bezier through 0, c1, c2, 1.
fn bezier_component(s: f32, c1: f32, c2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * c1 + 3.0 * inv * s * s * c2 + s * s * s
}

fn bezier_derivative(s: f32, c1: f32, c2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * c1 + 6.0 * inv * s * (c2 - c1) + 3.0 * s * s * (1.0 - c2)
}

/// Finds the curve parameter `s` with `x(s) == x`.
///
/// Newton-Raphson with a bisection fallback when the derivative degenerates.
/// `x1`/`x2` in [0, 1] guarantee `x(s)` is monotonic, so the bisection
/// always converges.
fn solve_bezier_parameter(x: f32, x1: f32, x2: f32) -> f32 {
    // 1. Newton-Raphson, seeded with the target value
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(s, x1, x2) - x;
        if err.abs() < 1e-6 {
            return s;
        }
        let d = bezier_derivative(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    // 2. Bisection fallback
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if bezier_component(mid, x1, x2) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        let curves = [
            Easing::Linear,
            Easing::PowerIn(1),
            Easing::PowerOut(1),
            Easing::PowerInOut(2),
            Easing::CircIn,
            Easing::CircOut,
            Easing::ElasticOut {
                amplitude: 1.0,
                period: 0.3,
            },
            Easing::cubic_bezier(0.35, -0.6, 0.3, 1.25),
        ];
        for curve in curves {
            assert!(curve.apply(0.0).abs() < 1e-4, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-4, "{curve:?} at 1");
        }
    }

    #[test]
    fn bezier_matches_linear_when_degenerate() {
        // Control points on the diagonal produce the identity curve
        let curve = Easing::cubic_bezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((curve.apply(t) - t).abs() < 1e-3, "t={t}");
        }
    }
}
