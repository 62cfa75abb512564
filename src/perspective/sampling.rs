//! Bilinear sampling with a constant zero border.

/// Interpolate an `N`-channel value at the sub-pixel position `(x, y)`.
///
/// Neighbours outside `[0, width) × [0, height)` contribute zero, so samples
/// that fall entirely outside the source image come back as zeros.
#[inline]
pub(crate) fn bilinear<const N: usize>(
    x: f64,
    y: f64,
    width: usize,
    height: usize,
    fetch: impl Fn(usize, usize) -> [f32; N],
) -> [f32; N] {
    let mut acc = [0.0f32; N];
    if !x.is_finite() || !y.is_finite() {
        return acc;
    }
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = (x - x0) as f32;
    let fy = (y - y0) as f32;
    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1.0, y0, fx * (1.0 - fy)),
        (x0, y0 + 1.0, (1.0 - fx) * fy),
        (x0 + 1.0, y0 + 1.0, fx * fy),
    ];
    for (tx, ty, weight) in taps {
        if weight <= 0.0 || tx < 0.0 || ty < 0.0 || tx >= width as f64 || ty >= height as f64 {
            continue;
        }
        let v = fetch(tx as usize, ty as usize);
        for (a, c) in acc.iter_mut().zip(v) {
            *a += weight * c;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(x: usize, _y: usize) -> [f32; 1] {
        [x as f32]
    }

    #[test]
    fn interpolates_between_columns() {
        let v = bilinear(1.25, 0.0, 4, 1, ramp);
        assert!((v[0] - 1.25).abs() < 1e-6);
    }

    #[test]
    fn outside_samples_fade_to_zero() {
        assert_eq!(bilinear(-3.0, 0.0, 4, 1, ramp), [0.0]);
        assert_eq!(bilinear(1.0, 5.0, 4, 1, ramp), [0.0]);
        // Half a pixel past the last column blends with the zero border.
        let v = bilinear(3.5, 0.0, 4, 1, ramp);
        assert!((v[0] - 1.5).abs() < 1e-6);
    }
}
