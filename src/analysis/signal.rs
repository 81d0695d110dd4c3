use std::fmt;
use log::debug;
use ndarray::{s, Array2};
use crate::analysis::error::AnalysisError;
/// Rectangular patch of a frame, in pixel row/column coordinates.
///
/// Rows `top..bottom` and columns `left..right`, half-open as in slicing.
/// Fields are signed so out-of-range values coming from the command line
/// survive long enough to be rejected by [`RegionOfInterest::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionOfInterest {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}
impl RegionOfInterest {
    pub fn new(top: i64, bottom: i64, left: i64, right: i64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
    /// Checks that the region is non-empty and lies strictly inside a frame
    /// of the given size.
    pub fn validate(&self, frame_height: usize, frame_width: usize) -> Result<(), AnalysisError> {
        let inside = self.top >= 0
            && self.left >= 0
            && self.bottom < frame_height as i64
            && self.right < frame_width as i64;
        let non_empty = self.top < self.bottom && self.left < self.right;
        if !inside || !non_empty {
            return Err(AnalysisError::InvalidRoi {
                roi: *self,
                height: frame_height,
                width: frame_width,
            });
        }
        Ok(())
    }
}
impl fmt::Display for RegionOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(top={}, bottom={}, left={}, right={})",
            self.top, self.bottom, self.left, self.right
        )
    }
}
/// Collapses each frame's region of interest to its mean intensity, then
/// subtracts the series mean so the DC component carries no energy.
pub fn extract(
    frames: &[Array2<u8>],
    roi: RegionOfInterest,
    frame_height: usize,
    frame_width: usize,
) -> Result<Vec<f64>, AnalysisError> {
    if frames.is_empty() {
        return Err(AnalysisError::EmptyFrameList);
    }
    roi.validate(frame_height, frame_width)?;
    for (index, frame) in frames.iter().enumerate() {
        let (height, width) = frame.dim();
        if (height, width) != (frame_height, frame_width) {
            return Err(AnalysisError::FrameShapeMismatch {
                index,
                expected_height: frame_height,
                expected_width: frame_width,
                actual_height: height,
                actual_width: width,
            });
        }
    }
    let raw: Vec<f64> = frames.iter().map(|frame| region_mean(frame, roi)).collect();
    let baseline = raw.iter().sum::<f64>() / raw.len() as f64;
    debug!("extracted {} samples, baseline {:.3}", raw.len(), baseline);
    Ok(raw.into_iter().map(|sample| sample - baseline).collect())
}
fn region_mean(frame: &Array2<u8>, roi: RegionOfInterest) -> f64 {
    let view = frame.slice(s![
        roi.top as usize..roi.bottom as usize,
        roi.left as usize..roi.right as usize
    ]);
    let sum: f64 = view.iter().map(|&pixel| f64::from(pixel)).sum();
    sum / view.len() as f64
}
