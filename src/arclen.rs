//! Closed-form arc length for quadratic segments, and its inversion.
//!
//! The squared speed of a quadratic Bézier is itself a quadratic in the
//! curve parameter, so the arc-length integral `∫ sqrt(a·u² + b·u + c) du`
//! has a closed-form antiderivative. Inverting length back to a parameter
//! (for constant-speed traversal) is done with Newton's method, using the
//! speed as the derivative.

use glam::Vec3;

/// Below this leading coefficient the segment is treated as degenerate
/// (collinear or collapsed control points) and the closed form is refused.
const DEGENERATE_A: f32 = 1e-6;

/// Convergence threshold for the Newton step, and the speed below which
/// iteration is abandoned.
const NEWTON_EPSILON: f32 = 1e-4;

/// Hard cap on Newton iterations so pathological coefficients cannot hang
/// the caller.
const MAX_NEWTON_ITERS: usize = 50;

/// The quadratic-speed coefficients of one quadratic Bézier segment.
///
/// The segment's squared parametric speed is `a·t² + b·t + c`. All three
/// arc-length operations work off these coefficients, so a caller doing
/// repeated lookups on one segment derives them once.
#[derive(Clone, Copy, Debug)]
pub struct SpeedCoeffs {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SpeedCoeffs {
    /// Derive the speed coefficients of the quadratic segment `p0, p1, p2`.
    pub fn from_quadratic(p0: Vec3, p1: Vec3, p2: Vec3) -> SpeedCoeffs {
        // B'(t) = 2[(p1 - p0) + t (p0 - 2 p1 + p2)]
        let curl = p0 - 2.0 * p1 + p2;
        let arm = p1 - p0;
        SpeedCoeffs {
            a: 4.0 * curl.length_squared(),
            b: 8.0 * arm.dot(curl),
            c: 4.0 * arm.length_squared(),
        }
    }

    /// The instantaneous parametric speed `sqrt(a·t² + b·t + c)`.
    pub fn speed(&self, t: f32) -> f32 {
        (self.a * t * t + self.b * t + self.c).max(0.0).sqrt()
    }

    /// Arc length of the segment over `[0, t]`, in closed form.
    ///
    /// Returns `None` when the leading coefficient is (near) zero, which
    /// means a degenerate segment with constant or undefined speed. Callers
    /// wanting constant-speed traversal fall back to uniform `t` there.
    pub fn length(&self, t: f32) -> Option<f32> {
        if self.a < DEGENERATE_A {
            return None;
        }
        Some(self.antiderivative(t) - self.antiderivative(0.0))
    }

    // F(u) such that F'(u) = sqrt(a·u² + b·u + c), valid for a > 0.
    fn antiderivative(&self, u: f32) -> f32 {
        let SpeedCoeffs { a, b, c } = *self;
        let s = (a * u * u + b * u + c).max(0.0).sqrt();
        let sqrt_a = a.sqrt();
        // The log argument touches zero only when the handles fold back
        // through the start point; clamp rather than produce -inf.
        let log_arg = (2.0 * sqrt_a * s + 2.0 * a * u + b).max(1e-12);
        (2.0 * a * u + b) * s / (4.0 * a) + (4.0 * a * c - b * b) / (8.0 * a * sqrt_a) * log_arg.ln()
    }

    /// Solve for the parameter whose arc length equals `target`, starting
    /// the Newton iteration at `t0`.
    ///
    /// Iterates `t ← t - (length(t) - target) / speed(t)` until the step
    /// shrinks below `1e-4`, giving up after 50 iterations or as soon as
    /// the speed vanishes or a value goes non-finite; in those cases the
    /// last finite estimate is returned. Callers that need a convergence
    /// guarantee should check the residual against [`length`].
    ///
    /// [`length`]: SpeedCoeffs::length
    pub fn invert_length(&self, t0: f32, target: f32) -> f32 {
        let mut t = t0;
        for _ in 0..MAX_NEWTON_ITERS {
            let len = match self.length(t) {
                Some(len) if len.is_finite() => len,
                _ => return t,
            };
            let speed = self.speed(t);
            if speed < NEWTON_EPSILON {
                return t;
            }
            let next = t - (len - target) / speed;
            if !next.is_finite() {
                return t;
            }
            if (next - t).abs() < NEWTON_EPSILON {
                return next;
            }
            t = next;
        }
        t
    }
}
