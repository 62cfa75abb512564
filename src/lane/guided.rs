use super::model::LaneModel;
use super::options::GuidedSearchOptions;
use crate::error::LaneError;
use crate::image::BinaryMask;
use crate::types::PixelCoord;

/// Refit both boundaries from the mask pixels lying within `margin_px` of the
/// prior model's curves.
///
/// A pixel close to both curves feeds both fits. The search has no state of
/// its own: identical inputs give identical models.
pub fn guided_search(
    mask: &BinaryMask,
    prior: &LaneModel,
    opts: &GuidedSearchOptions,
) -> Result<LaneModel, LaneError> {
    let margin = opts.margin_px;
    let mut left: Vec<PixelCoord> = Vec::new();
    let mut right: Vec<PixelCoord> = Vec::new();
    for (x, y) in mask.nonzero() {
        let (xf, yf) = (x as f64, y as f64);
        if (xf - prior.left.eval(yf)).abs() < margin {
            left.push((x, y));
        }
        if (xf - prior.right.eval(yf)).abs() < margin {
            right.push((x, y));
        }
    }
    LaneModel::fit(&left, &right, mask.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::LanePolynomial;
    use crate::lane::PlotRange;
    use crate::types::Boundary;

    fn prior(left: f64, right: f64) -> LaneModel {
        LaneModel {
            left: LanePolynomial::vertical(left),
            right: LanePolynomial::vertical(right),
            ploty: PlotRange::for_height(100),
            support: [0, 0],
        }
    }

    #[test]
    fn margin_is_exclusive() {
        let mask = BinaryMask::from_fn(200, 100, |x, _| x == 50 || x == 150);
        let opts = GuidedSearchOptions { margin_px: 50.0 };
        // Right line sits exactly one margin away from the prior.
        let err = guided_search(&mask, &prior(50.0, 100.0), &opts).unwrap_err();
        assert!(matches!(
            err,
            LaneError::DegenerateSampleSet {
                side: Boundary::Right,
                ..
            }
        ));
        let model = guided_search(&mask, &prior(40.0, 140.0), &opts).unwrap();
        assert_eq!(model.support, [100, 100]);
        assert!((model.right.eval(99.0) - 150.0).abs() < 1e-6);
    }
}
