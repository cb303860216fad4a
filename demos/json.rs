//! Serialize a spline to JSON and read it back.
//!
//! Run with `cargo run --example json --features serde`.

use glam::Vec3;

use bezspline::{BezierSpline, Degree, JoinMode};

fn main() {
    let mut spline = BezierSpline::new(Degree::Cubic);
    spline.add_segment();
    spline.set_control_point(3, Vec3::new(4.0, 1.5, -0.5));
    spline.set_control_point_mode(3, JoinMode::Mirrored);
    spline.set_loop(true);

    let json = serde_json::to_string_pretty(&spline).unwrap();
    println!("{}", json);

    let back: BezierSpline = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spline);
    eprintln!(
        "round-tripped {} control points, {} curves",
        back.control_point_count(),
        back.curve_count()
    );
}
