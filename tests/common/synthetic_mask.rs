use lane_tracker::image::BinaryMask;
use lane_tracker::LanePolynomial;

pub const FRAME_W: usize = 1280;
pub const FRAME_H: usize = 720;

/// Bird's-eye mask with full-height vertical markings, one per `(x, half_width)`.
pub fn vertical_lines(width: usize, height: usize, lines: &[(usize, usize)]) -> BinaryMask {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    BinaryMask::from_fn(width, height, |x, _| {
        lines.iter().any(|&(cx, hw)| x.abs_diff(cx) <= hw)
    })
}

/// Bird's-eye mask with one marking per polynomial; the column of each row is
/// the polynomial value rounded to the nearest pixel.
pub fn curved_lines(width: usize, height: usize, curves: &[LanePolynomial], half_width: usize) -> BinaryMask {
    let mut mask = BinaryMask::new(width, height);
    for y in 0..height {
        for poly in curves {
            let center = poly.eval(y as f64).round() as i64;
            for x in center - half_width as i64..=center + half_width as i64 {
                if x >= 0 && (x as usize) < width {
                    mask.set(x as usize, y, true);
                }
            }
        }
    }
    mask
}

/// Camera-view mask of a straight road under the default perspective setup.
///
/// The two markings follow the source trapezoid edges, so they land on the
/// columns 400 and 960 of the bird's-eye view. Rows above `440` are left
/// empty, as they would be above the horizon of a real frame.
pub fn camera_lane_mask() -> BinaryMask {
    let left = |y: f64| 340.0 + (670.0 - y) * 170.0 / 145.0;
    let right = |y: f64| 1080.0 - (670.0 - y) * 250.0 / 145.0;
    BinaryMask::from_fn(FRAME_W, FRAME_H, |x, y| {
        if y < 440 {
            return false;
        }
        let (xf, yf) = (x as f64, y as f64);
        (xf - left(yf)).abs() <= 4.0 || (xf - right(yf)).abs() <= 4.0
    })
}
