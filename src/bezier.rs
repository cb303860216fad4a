//! Stateless evaluation of a single Bézier segment.
//!
//! These functions operate on bare control points and know nothing about
//! how segments are stitched into a spline. [`eval`] handles any degree
//! through the Bernstein form; the quadratic and cubic specializations
//! are cheaper closed forms used on the hot query path.

use glam::Vec3;

/// Evaluate a Bézier curve of arbitrary degree at parameter `t`.
///
/// The degree is `points.len() - 1`, so three points describe a
/// quadratic and four a cubic. The curve is the Bernstein-weighted sum
/// `Σ C(n,i) (1-t)^(n-i) t^i points[i]`, with the binomial coefficients
/// built up iteratively so that degrees in the tens don't overflow the
/// way a factorial formulation would.
///
/// `t` outside `[0, 1]` is clamped, matching the other evaluators.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn eval(points: &[Vec3], t: f32) -> Vec3 {
    assert!(!points.is_empty(), "a bezier segment needs at least one point");
    let t = clamp01(t);
    let n = points.len() - 1;
    let mut result = Vec3::ZERO;
    // C(n, i), updated multiplicatively from one term to the next.
    let mut binomial = 1.0f32;
    for (i, p) in points.iter().enumerate() {
        let basis = binomial * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32);
        result += basis * *p;
        binomial = binomial * (n - i) as f32 / (i + 1) as f32;
    }
    result
}

/// Point on a quadratic Bézier segment at parameter `t` (clamped to `[0, 1]`).
///
/// Equivalent to [`eval`] with three points, but branch-free.
pub fn quadratic_point(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let t = clamp01(t);
    let mt = 1.0 - t;
    mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
}

/// Point on a cubic Bézier segment at parameter `t` (clamped to `[0, 1]`).
///
/// Equivalent to [`eval`] with four points, but branch-free.
pub fn cubic_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = clamp01(t);
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

/// First derivative of a quadratic Bézier segment at parameter `t`.
///
/// The result is a velocity vector, not unit length; normalize it if a
/// direction is wanted.
pub fn quadratic_derivative(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let t = clamp01(t);
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// First derivative of a cubic Bézier segment at parameter `t`.
///
/// The result is a velocity vector, not unit length; normalize it if a
/// direction is wanted.
pub fn cubic_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = clamp01(t);
    let mt = 1.0 - t;
    3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

fn clamp01(t: f32) -> f32 {
    t.max(0.0).min(1.0)
}
