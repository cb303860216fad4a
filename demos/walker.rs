//! A headless spline walker.
//!
//! Advances a progress value in fixed steps, the way a per-frame path
//! follower would, and samples the spline's point and direction. The
//! second half re-walks a quadratic spline at constant speed by
//! inverting arc length per segment.

use glam::Vec3;

use bezspline::{BezierSpline, Degree, SpeedCoeffs};

#[derive(Clone, Copy, Debug)]
enum WalkMode {
    Once,
    Loop,
    PingPong,
}

struct Walker {
    mode: WalkMode,
    progress: f32,
    going_forward: bool,
}

impl Walker {
    fn new(mode: WalkMode) -> Walker {
        Walker {
            mode,
            progress: 0.0,
            going_forward: true,
        }
    }

    fn advance(&mut self, dt: f32) -> f32 {
        if self.going_forward {
            self.progress += dt;
            if self.progress > 1.0 {
                match self.mode {
                    WalkMode::Once => self.progress = 1.0,
                    WalkMode::Loop => self.progress -= 1.0,
                    WalkMode::PingPong => {
                        self.progress = 2.0 - self.progress;
                        self.going_forward = false;
                    }
                }
            }
        } else {
            self.progress -= dt;
            if self.progress < 0.0 {
                self.progress = -self.progress;
                self.going_forward = true;
            }
        }
        self.progress
    }
}

fn main() {
    let mut spline = BezierSpline::new(Degree::Cubic);
    spline.add_segment();
    spline.set_control_point(3, Vec3::new(4.0, 2.0, 0.0));

    for &mode in &[WalkMode::Once, WalkMode::Loop, WalkMode::PingPong] {
        println!("-- {:?} --", mode);
        let mut walker = Walker::new(mode);
        for frame in 0..12 {
            let t = walker.advance(0.125);
            let p = spline.point(t);
            let d = spline.direction(t);
            println!(
                "frame {:2}  t={:.3}  p=({:6.3}, {:6.3}, {:6.3})  dir=({:5.2}, {:5.2}, {:5.2})",
                frame, t, p.x, p.y, p.z, d.x, d.y, d.z
            );
        }
    }

    // Constant-speed traversal of one quadratic segment: invert arc
    // length so equal length steps land at unequal parameter steps.
    let p0 = Vec3::new(0.0, 0.0, 0.0);
    let p1 = Vec3::new(4.0, 3.0, 0.0);
    let p2 = Vec3::new(5.0, 0.0, 0.0);
    let coeffs = SpeedCoeffs::from_quadratic(p0, p1, p2);
    match coeffs.length(1.0) {
        Some(total) => {
            println!("-- constant speed (total length {:.3}) --", total);
            let steps = 8;
            let mut t = 0.0;
            for i in 0..=steps {
                let target = total * i as f32 / steps as f32;
                t = coeffs.invert_length(t, target);
                let p = bezspline::bezier::quadratic_point(p0, p1, p2, t);
                println!("s={:6.3}  t={:.3}  p=({:6.3}, {:6.3})", target, t, p.x, p.y);
            }
        }
        None => {
            // Degenerate segment; a real walker would fall back to
            // uniform t here.
            eprintln!("segment is degenerate, skipping constant-speed walk");
        }
    }
}
