use crate::image::{BinaryMask, ImageView};
use serde::Serialize;

/// Column-wise count of mask pixels at or below a start row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnHistogram {
    pub counts: Vec<u32>,
}

impl ColumnHistogram {
    /// Accumulate rows `start_row..h`; a start past the last row yields zeros.
    pub fn from_mask(mask: &BinaryMask, start_row: usize) -> Self {
        let height = mask.height();
        let mut counts = vec![0u32; mask.width()];
        for y in start_row.min(height)..height {
            for (c, &v) in counts.iter_mut().zip(mask.row(y)) {
                *c += u32::from(v != 0);
            }
        }
        Self { counts }
    }

    pub fn midpoint(&self) -> usize {
        self.counts.len() / 2
    }

    /// Column of the first maximum within `[start, end)`, or `start` when the
    /// range holds no pixels at all.
    pub fn peak(&self, start: usize, end: usize) -> usize {
        let end = end.min(self.counts.len());
        let mut best = start;
        let mut best_count = 0u32;
        for x in start..end {
            if self.counts[x] > best_count {
                best_count = self.counts[x];
                best = x;
            }
        }
        best
    }

    /// Initial `(left, right)` boundary columns: the peaks of both halves.
    pub fn lane_bases(&self) -> (usize, usize) {
        let mid = self.midpoint();
        (self.peak(0, mid), self.peak(mid, self.counts.len()))
    }
}
