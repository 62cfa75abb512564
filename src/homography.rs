//! Planar homography helpers: four-point estimation and point mapping.
use nalgebra::{Matrix3, SMatrix, SVector, Vector3};

const EPS: f64 = 1e-12;

/// Solve the homography mapping the four `src` points onto the four `dst`
/// points, normalised so that `H[(2, 2)] == 1`.
///
/// Both point sets are first moved to their centroid and scaled to a mean
/// distance of `√2`, so the singularity test below does not depend on the
/// pixel scale of the input. Each correspondence `(x, y) -> (u, v)` then
/// contributes two rows of the 8×8 direct linear system in `h11..h32`.
/// Returns `None` when three or more points are collinear.
pub fn homography_from_quad(src: &[[f64; 2]; 4], dst: &[[f64; 2]; 4]) -> Option<Matrix3<f64>> {
    let (t_src, src_n) = normalize_points(src)?;
    let (t_dst, dst_n) = normalize_points(dst)?;

    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();
    for (i, (s, d)) in src_n.iter().zip(&dst_n).enumerate() {
        let (x, y) = (s[0], s[1]);
        let (u, v) = (d[0], d[1]);
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -u * x;
        a[(r, 7)] = -u * y;
        b[r] = u;

        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -v * x;
        a[(r + 1, 7)] = -v * y;
        b[r + 1] = v;
    }
    let lu = a.lu();
    if !lu.is_invertible() || lu.determinant().abs() <= EPS {
        return None;
    }
    let h = lu.solve(&b)?;
    let hn = Matrix3::new(h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0);
    // Three collinear points still give a solvable system, but a rank-deficient map.
    if hn.iter().any(|v| !v.is_finite()) || hn.determinant().abs() <= EPS {
        return None;
    }
    let t_dst_inv = t_dst.try_inverse()?;
    let full = t_dst_inv * hn * t_src;
    let w = full[(2, 2)];
    if !w.is_finite() || w.abs() <= EPS {
        return None;
    }
    Some(full / w)
}

/// Similarity moving `pts` to zero centroid and `√2` mean distance, together
/// with the transformed points. `None` if all points coincide.
fn normalize_points(pts: &[[f64; 2]; 4]) -> Option<(Matrix3<f64>, [[f64; 2]; 4])> {
    let cx = pts.iter().map(|p| p[0]).sum::<f64>() / 4.0;
    let cy = pts.iter().map(|p| p[1]).sum::<f64>() / 4.0;
    let mean_dist = pts
        .iter()
        .map(|p| (p[0] - cx).hypot(p[1] - cy))
        .sum::<f64>()
        / 4.0;
    if !mean_dist.is_finite() || mean_dist <= f64::EPSILON {
        return None;
    }
    let s = std::f64::consts::SQRT_2 / mean_dist;
    let t = Matrix3::new(s, 0.0, -s * cx, 0.0, s, -s * cy, 0.0, 0.0, 1.0);
    Some((t, (*pts).map(|[x, y]| [s * (x - cx), s * (y - cy)])))
}

/// Invert a homography and renormalise it so the bottom-right entry is one.
pub fn invert_homography(h: &Matrix3<f64>) -> Option<Matrix3<f64>> {
    let inv = h.try_inverse()?;
    let w = inv[(2, 2)];
    if !w.is_finite() || w.abs() <= EPS {
        return None;
    }
    Some(inv / w)
}

#[inline]
pub fn apply_homography_point(h: &Matrix3<f64>, p: [f64; 2]) -> Option<[f64; 2]> {
    let v = h * Vector3::new(p[0], p[1], 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some([v[0] / w, v[1] / w])
}

pub fn apply_homography_points(h: &Matrix3<f64>, pts: &[[f64; 2]]) -> Option<Vec<[f64; 2]>> {
    pts.iter().map(|&p| apply_homography_point(h, p)).collect()
}
