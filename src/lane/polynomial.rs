//! Second-order lane boundary model `x = a·y² + b·y + c`.
//!
//! Boundaries are near-vertical in the bird's-eye view, so `y` (row) is the
//! independent variable and `x` (column) the dependent one.
use crate::types::PixelCoord;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanePolynomial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LanePolynomial {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Vertical line `x = c`.
    pub const fn vertical(c: f64) -> Self {
        Self::new(0.0, 0.0, c)
    }

    pub fn coefficients(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn eval(&self, y: f64) -> f64 {
        (self.a * y + self.b) * y + self.c
    }

    /// Least-squares fit over pixel samples.
    ///
    /// Rows are scaled to `[0, 1]` before accumulating the 3×3 normal
    /// equations, which keeps the system well conditioned for full-height
    /// frames; the solution is mapped back to pixel units afterwards.
    /// Returns `None` for fewer than three distinct rows.
    pub fn fit(samples: &[PixelCoord]) -> Option<Self> {
        if distinct_rows(samples) < 3 {
            return None;
        }
        let scale = samples.iter().map(|&(_, y)| y).max().unwrap_or(0).max(1) as f64;
        let mut ata = Matrix3::<f64>::zeros();
        let mut atb = Vector3::<f64>::zeros();
        for &(x, y) in samples {
            let t = y as f64 / scale;
            let row = Vector3::new(t * t, t, 1.0);
            ata += row * row.transpose();
            atb += row * x as f64;
        }
        let sol = ata.cholesky()?.solve(&atb);
        if sol.iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(Self::new(sol[0] / (scale * scale), sol[1] / scale, sol[2]))
    }
}

fn distinct_rows(samples: &[PixelCoord]) -> usize {
    let mut rows: Vec<usize> = samples.iter().map(|&(_, y)| y).collect();
    rows.sort_unstable();
    rows.dedup();
    rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_vertical_line_exactly() {
        let pts: Vec<PixelCoord> = (0..720).map(|y| (400, y)).collect();
        let fit = LanePolynomial::fit(&pts).unwrap();
        assert!(fit.a.abs() < 1e-9 && fit.b.abs() < 1e-6, "{fit:?}");
        assert!((fit.c - 400.0).abs() < 1e-6, "{fit:?}");
    }

    #[test]
    fn recovers_integer_quadratic() {
        // x = (y² - 20y) / 4 + 300 is integral for even y.
        let truth = LanePolynomial::new(0.25, -5.0, 300.0);
        let pts: Vec<PixelCoord> = (0..100)
            .step_by(2)
            .map(|y| (truth.eval(y as f64) as usize, y))
            .collect();
        let fit = LanePolynomial::fit(&pts).unwrap();
        for (got, want) in fit.coefficients().iter().zip(truth.coefficients()) {
            assert!((got - want).abs() < 1e-6, "{fit:?}");
        }
    }

    #[test]
    fn rejects_too_few_rows() {
        assert!(LanePolynomial::fit(&[]).is_none());
        let two_rows = [(10, 5), (11, 5), (12, 6), (13, 6)];
        assert!(LanePolynomial::fit(&two_rows).is_none());
    }

    #[test]
    fn eval_agrees_with_coefficients() {
        let p = LanePolynomial::new(1e-3, -0.5, 100.0);
        assert!((p.eval(10.0) - (0.1 - 5.0 + 100.0)).abs() < 1e-12);
    }
}
