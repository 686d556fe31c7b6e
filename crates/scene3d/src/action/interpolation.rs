//! Easing curves for timed actions
//!
//! Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0`; values in between may
//! overshoot for the elastic curve.

use crate::foundation::math::constants::{HALF_PI, PI};

/// Interpolation applied to a timed action's progress
#[derive(Debug, Clone, Copy, Default)]
pub enum Interpolation {
    /// Constant speed
    #[default]
    Linear,
    /// Hermite smoothstep
    Smooth,
    /// Quintic smootherstep
    Smoother,
    /// Same curve as [`Interpolation::Smoother`]
    Fade,
    /// Quadratic ease in and out
    Pow2,
    /// Quadratic ease in
    Pow2In,
    /// Quadratic ease out
    Pow2Out,
    /// Cubic ease in
    Pow3In,
    /// Cubic ease out
    Pow3Out,
    /// Sine ease in and out
    Sine,
    /// Sine ease in
    SineIn,
    /// Sine ease out
    SineOut,
    /// Exponential (base 2, power 5) ease in and out
    Exp5,
    /// Circular ease in and out
    Circle,
    /// Elastic ease in and out
    Elastic,
    /// Bouncing ease out
    BounceOut,
    /// Caller-supplied curve
    Custom(fn(f32) -> f32),
}

impl Interpolation {
    /// Map linear progress `alpha` in `[0, 1]` through the curve
    pub fn apply(&self, alpha: f32) -> f32 {
        let a = alpha;
        match self {
            Self::Linear => a,
            Self::Smooth => a * a * (3.0 - 2.0 * a),
            Self::Smoother | Self::Fade => a * a * a * (a * (a * 6.0 - 15.0) + 10.0),
            Self::Pow2 => {
                if a <= 0.5 {
                    (a * 2.0).powi(2) / 2.0
                } else {
                    ((a - 1.0) * 2.0).powi(2) / -2.0 + 1.0
                }
            }
            Self::Pow2In => a * a,
            Self::Pow2Out => 1.0 - (a - 1.0).powi(2),
            Self::Pow3In => a * a * a,
            Self::Pow3Out => (a - 1.0).powi(3) + 1.0,
            Self::Sine => (1.0 - (a * PI).cos()) / 2.0,
            Self::SineIn => 1.0 - (a * HALF_PI).cos(),
            Self::SineOut => (a * HALF_PI).sin(),
            Self::Exp5 => exp(a, 2.0, 5.0),
            Self::Circle => {
                if a <= 0.5 {
                    let a = a * 2.0;
                    (1.0 - (1.0 - a * a).sqrt()) / 2.0
                } else {
                    let a = (a - 1.0) * 2.0;
                    ((1.0 - a * a).sqrt() + 1.0) / 2.0
                }
            }
            Self::Elastic => elastic(a, 2.0, 10.0, 7),
            Self::BounceOut => bounce_out(a),
            Self::Custom(curve) => curve(a),
        }
    }
}

fn exp(a: f32, value: f32, power: f32) -> f32 {
    let min = value.powf(-power);
    let scale = 1.0 / (1.0 - min);
    if a <= 0.5 {
        (value.powf(power * (a * 2.0 - 1.0)) - min) * scale / 2.0
    } else {
        (2.0 - (value.powf(-power * (a * 2.0 - 1.0)) - min) * scale) / 2.0
    }
}

fn elastic(a: f32, value: f32, power: f32, bounces: u32) -> f32 {
    let sign = if bounces % 2 == 0 { 1.0 } else { -1.0 };
    let bounces = bounces as f32 * PI * sign;
    if a <= 0.5 {
        let a = a * 2.0;
        value.powf(power * (a - 1.0)) * (a * bounces).sin() / 2.0
    } else {
        let a = (1.0 - a) * 2.0;
        1.0 - value.powf(power * (a - 1.0)) * (a * bounces).sin() / 2.0
    }
}

fn bounce_out(a: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if a < 1.0 / D {
        N * a * a
    } else if a < 2.0 / D {
        let a = a - 1.5 / D;
        N * a * a + 0.75
    } else if a < 2.5 / D {
        let a = a - 2.25 / D;
        N * a * a + 0.9375
    } else {
        let a = a - 2.625 / D;
        N * a * a + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [Interpolation; 16] = [
        Interpolation::Linear,
        Interpolation::Smooth,
        Interpolation::Smoother,
        Interpolation::Fade,
        Interpolation::Pow2,
        Interpolation::Pow2In,
        Interpolation::Pow2Out,
        Interpolation::Pow3In,
        Interpolation::Pow3Out,
        Interpolation::Sine,
        Interpolation::SineIn,
        Interpolation::SineOut,
        Interpolation::Exp5,
        Interpolation::Circle,
        Interpolation::Elastic,
        Interpolation::BounceOut,
    ];

    #[test]
    fn test_curves_hit_endpoints() {
        for curve in ALL {
            assert_relative_eq!(curve.apply(0.0), 0.0, epsilon = 1e-5);
            assert_relative_eq!(curve.apply(1.0), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_symmetric_curves_pass_through_half() {
        for curve in [Interpolation::Smooth, Interpolation::Pow2, Interpolation::Sine, Interpolation::Circle] {
            assert_relative_eq!(curve.apply(0.5), 0.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_custom_curve() {
        let step = Interpolation::Custom(|a| if a < 1.0 { 0.0 } else { 1.0 });
        assert_eq!(step.apply(0.99), 0.0);
        assert_eq!(step.apply(1.0), 1.0);
    }
}
