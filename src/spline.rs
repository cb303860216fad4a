//! An editable piecewise Bézier spline with per-joint continuity modes.

use glam::Vec3;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::bezier;

/// The polynomial order of every segment in a spline.
///
/// The degree is fixed per spline; changing it only makes sense together
/// with resetting the control-point sequence, so there is no setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub enum Degree {
    Quadratic,
    Cubic,
}

impl Degree {
    /// Control points forming one segment (3 for quadratic, 4 for cubic).
    pub fn points_per_segment(self) -> usize {
        match self {
            Degree::Quadratic => 3,
            Degree::Cubic => 4,
        }
    }

    /// Points advanced per segment, excluding the shared joint.
    pub fn stride(self) -> usize {
        self.points_per_segment() - 1
    }
}

/// The continuity constraint at one joint between two segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub enum JoinMode {
    /// No constraint; the flanking handles move independently.
    Free,
    /// The flanking handles are kept collinear through the joint, each
    /// keeping its own length.
    Aligned,
    /// One flanking handle is the point reflection of the other through
    /// the joint: collinear and equal length.
    Mirrored,
}

/// A sequence of connected Bézier segments sharing endpoints.
///
/// The spline owns an ordered control-point sequence and one [`JoinMode`]
/// per segment boundary (including the two open ends). Segments are
/// derived views: segment `i` is the `points_per_segment` consecutive
/// points starting at `i * stride`. Every point index that is a multiple
/// of the stride is a joint shared by two segments; the points between
/// joints are handles.
///
/// Mutations re-enforce the joint constraints before returning, so a
/// non-`Free` joint is collinear (and, for `Mirrored`, symmetric) at all
/// times. All coordinates are in the spline's local space; mapping into
/// world space is the caller's concern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct BezierSpline {
    degree: Degree,
    points: Vec<Vec3>,
    modes: Vec<JoinMode>,
    looped: bool,
}

impl BezierSpline {
    /// Create the minimal one-segment default spline of the given degree.
    pub fn new(degree: Degree) -> BezierSpline {
        let mut spline = BezierSpline {
            degree,
            points: Vec::new(),
            modes: Vec::new(),
            looped: false,
        };
        spline.reset();
        spline
    }

    /// Restore the default one-segment spline in place.
    ///
    /// The default runs along the x axis with `Free` ends. Both sequences
    /// are replaced together; a reset spline is never looped.
    pub fn reset(&mut self) {
        self.looped = false;
        self.points.clear();
        for i in 1..=self.degree.points_per_segment() {
            self.points.push(Vec3::new(i as f32, 0.0, 0.0));
        }
        self.modes.clear();
        self.modes.push(JoinMode::Free);
        self.modes.push(JoinMode::Free);
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of Bézier segments in the spline.
    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / self.degree.stride()
    }

    /// The raw control-point sequence, for rendering or hit testing.
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn is_loop(&self) -> bool {
        self.looped
    }

    /// Open or close the spline.
    ///
    /// Closing identifies the first and last joint: their modes are
    /// unified and the start point is re-asserted so the wrap-around
    /// constraints take effect immediately.
    pub fn set_loop(&mut self, looped: bool) {
        self.looped = looped;
        if looped {
            let last = self.modes.len() - 1;
            self.modes[last] = self.modes[0];
            self.set_control_point(0, self.points[0]);
        }
    }

    /// The position of one control point.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn control_point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    /// Move one control point.
    ///
    /// Moving a joint drags its flanking handles along by the same delta
    /// (wrapping across the seam when looped), so the curve shape around
    /// the joint is preserved. Moving a handle repositions only that
    /// handle. Either way the joint's mode is re-enforced before
    /// returning.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_control_point(&mut self, index: usize, point: Vec3) {
        let stride = self.degree.stride();
        if index % stride == 0 {
            let delta = point - self.points[index];
            let last = self.points.len() - 1;
            if self.looped {
                if index == 0 {
                    self.points[1] += delta;
                    self.points[last - 1] += delta;
                    self.points[last] = point;
                } else if index == last {
                    self.points[0] = point;
                    self.points[1] += delta;
                    self.points[index - 1] += delta;
                } else {
                    self.points[index - 1] += delta;
                    self.points[index + 1] += delta;
                }
            } else {
                if index > 0 {
                    self.points[index - 1] += delta;
                }
                if index < last {
                    self.points[index + 1] += delta;
                }
            }
        }
        self.points[index] = point;
        self.enforce_mode(index);
    }

    /// The continuity mode governing the joint nearest to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn control_point_mode(&self, index: usize) -> JoinMode {
        self.modes[self.nearest_joint(index)]
    }

    /// Set the continuity mode of the joint nearest to `index` and
    /// re-enforce it.
    ///
    /// On a looped spline the first and last joint are the same joint, so
    /// setting either end mirrors the mode to the other.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_control_point_mode(&mut self, index: usize, mode: JoinMode) {
        let joint = self.nearest_joint(index);
        self.modes[joint] = mode;
        if self.looped {
            let last = self.modes.len() - 1;
            if joint == 0 {
                self.modes[last] = mode;
            } else if joint == last {
                self.modes[0] = mode;
            }
        }
        self.enforce_mode(index);
    }

    /// The joint a control point belongs to, for mode lookup.
    ///
    /// A joint owns itself and the handles flanking it, so the handle
    /// just before a joint and the handle just after it both map to that
    /// joint. Joint `j` sits at point index `j * stride`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn nearest_joint(&self, index: usize) -> usize {
        assert!(
            index < self.points.len(),
            "control point index {} out of range ({} points)",
            index,
            self.points.len()
        );
        (index + 1) / self.degree.stride()
    }

    /// Re-establish the constraint at the joint nearest to `index`.
    ///
    /// The handle on the side of `index` is held fixed and the opposite
    /// handle is moved: reflected through the joint for `Mirrored`, or
    /// re-aimed along the reflection while keeping its own length for
    /// `Aligned`. Open ends and `Free` joints have nothing to enforce.
    fn enforce_mode(&mut self, index: usize) {
        let joint = self.nearest_joint(index);
        let mode = self.modes[joint];
        let last_joint = self.modes.len() - 1;
        if mode == JoinMode::Free || !self.looped && (joint == 0 || joint == last_joint) {
            return;
        }

        let middle = joint * self.degree.stride();
        let count = self.points.len();
        let (fixed, enforced) = if index <= middle {
            (
                if middle == 0 { count - 2 } else { middle - 1 },
                if middle + 1 >= count { 1 } else { middle + 1 },
            )
        } else {
            (
                if middle + 1 >= count { 1 } else { middle + 1 },
                if middle == 0 { count - 2 } else { middle - 1 },
            )
        };

        let middle_point = self.points[middle];
        let mut tangent = middle_point - self.points[fixed];
        if mode == JoinMode::Aligned {
            // Keep the enforced handle's length, fix only its direction.
            // A zero tangent collapses the handle onto the joint instead
            // of producing NaN.
            tangent = tangent.normalize_or_zero() * middle_point.distance(self.points[enforced]);
        }
        self.points[enforced] = middle_point + tangent;
    }

    /// Append one segment, extending the spline past its current end.
    ///
    /// The new points step +1 along x from the previous endpoint and the
    /// new end joint inherits the previous end's mode. On a looped spline
    /// the appended endpoint is snapped back onto the start, closing the
    /// loop through the new segment.
    pub fn add_segment(&mut self) {
        let mut point = self.points[self.points.len() - 1];
        for _ in 0..self.degree.stride() {
            point.x += 1.0;
            self.points.push(point);
        }
        let inherited = self.modes[self.modes.len() - 1];
        self.modes.push(inherited);
        self.enforce_mode(self.points.len() - self.degree.points_per_segment());

        if self.looped {
            let last = self.points.len() - 1;
            self.points[last] = self.points[0];
            let last_mode = self.modes.len() - 1;
            self.modes[last_mode] = self.modes[0];
            self.enforce_mode(0);
        }
    }

    /// Map a global parameter to the owning segment's first point index
    /// and the local parameter within that segment.
    ///
    /// `t` of 1 (or anything above) selects the end of the final segment
    /// rather than running off the sequence.
    fn locate(&self, t: f32) -> (usize, f32) {
        if t >= 1.0 {
            (self.points.len() - self.degree.points_per_segment(), 1.0)
        } else {
            let scaled = t.max(0.0) * self.curve_count() as f32;
            let segment = scaled as usize;
            (segment * self.degree.stride(), scaled - segment as f32)
        }
    }

    /// The point on the spline at global parameter `t` in `[0, 1]`.
    ///
    /// `t` outside the range is clamped.
    pub fn point(&self, t: f32) -> Vec3 {
        let (i, t) = self.locate(t);
        let p = &self.points;
        match self.degree {
            Degree::Quadratic => bezier::quadratic_point(p[i], p[i + 1], p[i + 2], t),
            Degree::Cubic => bezier::cubic_point(p[i], p[i + 1], p[i + 2], p[i + 3], t),
        }
    }

    /// The velocity (first derivative) at global parameter `t`.
    ///
    /// The result is a local-space vector, not unit length; a caller
    /// mapping it into world space applies its transform without the
    /// translation part.
    pub fn velocity(&self, t: f32) -> Vec3 {
        let (i, t) = self.locate(t);
        let p = &self.points;
        match self.degree {
            Degree::Quadratic => bezier::quadratic_derivative(p[i], p[i + 1], p[i + 2], t),
            Degree::Cubic => bezier::cubic_derivative(p[i], p[i + 1], p[i + 2], p[i + 3], t),
        }
    }

    /// The unit tangent at global parameter `t`, or the zero vector where
    /// the velocity is degenerate.
    pub fn direction(&self, t: f32) -> Vec3 {
        self.velocity(t).normalize_or_zero()
    }
}
