//! An editable piecewise Bézier spline for interactive curve design.
//!
//! This crate supplies a sequence of connected quadratic or cubic Bézier
//! segments sharing endpoints, the kind of curve an editor lets a user
//! shape by dragging control points. Joints between segments carry a
//! continuity mode ([`JoinMode`]) that keeps the flanking handles aligned
//! or mirrored through the joint, and the spline can be closed into a
//! loop.
//!
//! The segment-level math lives in [`bezier`]; [`SpeedCoeffs`] adds
//! closed-form arc length and its Newton inversion for constant-speed
//! traversal of quadratic segments. Everything is in the spline's local
//! space, with `glam` vectors; applying a scene transform is left to the
//! caller.

pub mod bezier;

mod arclen;
mod spline;

pub use arclen::SpeedCoeffs;
pub use spline::{BezierSpline, Degree, JoinMode};
