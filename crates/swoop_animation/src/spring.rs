//! Spring timing curves
//!
//! Closed-form damped-spring response over a fixed duration. Unlike a
//! physical spring simulation, a timing curve is guaranteed to settle exactly
//! when its animation's duration elapses, which is what lets two tracks with
//! different durations be re-timed to finish in the same instant.

/// How far the decay envelope must fall before the curve counts as settled.
const SETTLE_EPSILON: f32 = 1e-3;

/// A unit spring response: 0 at t=0, settled at 1 by t=1.
///
/// Parameterized by damping ratio alone. Ratios below 1.0 are underdamped
/// and overshoot their target slightly before settling; 1.0 and above are
/// treated as critically damped (no overshoot). The natural frequency is
/// derived so the envelope decays within the unit interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    damping_ratio: f32,
}

impl SpringCurve {
    /// Create a curve with the given damping ratio.
    ///
    /// The ratio is clamped to a small positive minimum; zero damping would
    /// never settle.
    pub fn new(damping_ratio: f32) -> Self {
        Self {
            damping_ratio: damping_ratio.max(0.05),
        }
    }

    /// Linear "curve" stand-in for tracks that are only ever scrubbed.
    pub fn scrubbing() -> Self {
        Self::new(1.0)
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio < 1.0
    }

    /// Evaluate the curve at normalized time `t`.
    ///
    /// Input is clamped to `[0, 1]`; the output is exactly 0.0 at t=0 and
    /// exactly 1.0 at t>=1. Underdamped curves may exceed 1.0 in between.
    pub fn eval(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping_ratio;
        // Pick the natural frequency so the decay envelope e^(-zeta*w0*t)
        // reaches SETTLE_EPSILON at t=1.
        let omega0 = -SETTLE_EPSILON.ln() / zeta.min(1.0);

        if zeta < 1.0 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let phase = omega_d * t;
            1.0 - envelope * (phase.cos() + (zeta * omega0 / omega_d) * phase.sin())
        } else {
            // Critically damped
            let envelope = (-omega0 * t).exp();
            1.0 - envelope * (1.0 + omega0 * t)
        }
    }
}

/// Timing curve driving one animation track.
///
/// Most tracks run on a spring; the modal dismissal accelerates offscreen on
/// a plain ease-in with no bounce at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingCurve {
    Spring(SpringCurve),
    /// Quadratic ease-in: starts at rest and accelerates into the endpoint
    EaseIn,
}

impl TimingCurve {
    /// Evaluate the curve at normalized time `t`, clamped to `[0, 1]`.
    pub fn eval(&self, t: f32) -> f32 {
        match self {
            TimingCurve::Spring(spring) => spring.eval(t),
            TimingCurve::EaseIn => {
                let t = t.clamp(0.0, 1.0);
                t * t
            }
        }
    }
}

impl From<SpringCurve> for TimingCurve {
    fn from(curve: SpringCurve) -> Self {
        TimingCurve::Spring(curve)
    }
}
