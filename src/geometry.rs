// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint angle geometry.

use ndarray::ArrayView2;

/// Angle returned when a limb vector collapses to a point.
pub const DEGENERATE_ANGLE: f32 = 0.0;

const MIN_MAGNITUDE: f64 = 1e-6;

/// Interior angle at vertex `b` formed by `a` and `c`, in degrees.
///
/// Computed from the dot product of the unit vectors along `b→a` and `b→c`,
/// so large coordinates cannot overflow the product. If either vector is
/// shorter than `1e-6` the angle is undefined and [`DEGENERATE_ANGLE`] is
/// returned.
///
/// # Arguments
///
/// * `a` - First outer point (x, y).
/// * `b` - Vertex joint (x, y).
/// * `c` - Second outer point (x, y).
///
/// # Returns
///
/// * Angle in `[0, 180]`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn joint_angle(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    let Some(u) = unit(a, b) else {
        return DEGENERATE_ANGLE;
    };
    let Some(v) = unit(c, b) else {
        return DEGENERATE_ANGLE;
    };

    let cos = u[0].mul_add(v[0], u[1] * v[1]);
    cos.clamp(-1.0, 1.0).acos().to_degrees() as f32
}

/// Unit vector from `origin` towards `to`, or `None` if it is too short.
///
/// Differences of finite `f32` coordinates always fit in `f64`, so the
/// magnitude never overflows.
fn unit(to: [f32; 2], origin: [f32; 2]) -> Option<[f64; 2]> {
    let dx = f64::from(to[0]) - f64::from(origin[0]);
    let dy = f64::from(to[1]) - f64::from(origin[1]);
    let mag = dx.hypot(dy);
    if !mag.is_finite() || mag < MIN_MAGNITUDE {
        return None;
    }
    Some([dx / mag, dy / mag])
}

/// Pick the (x, y) coordinates of three landmarks from a `(K, 2|3)` keypoint view.
///
/// # Returns
///
/// * `None` if any index is out of range, the view has fewer than two
///   columns, or any coordinate is not finite.
#[must_use]
pub fn landmark_points(kpts: &ArrayView2<'_, f32>, indices: [usize; 3]) -> Option<[[f32; 2]; 3]> {
    if kpts.ncols() < 2 {
        return None;
    }
    let mut points = [[0.0; 2]; 3];
    for (point, &idx) in points.iter_mut().zip(indices.iter()) {
        if idx >= kpts.nrows() {
            return None;
        }
        let (x, y) = (kpts[[idx, 0]], kpts[[idx, 1]]);
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        *point = [x, y];
    }
    Some(points)
}
