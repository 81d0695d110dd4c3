use thiserror::Error;
use crate::analysis::signal::RegionOfInterest;
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("signal length {len} is not a power of two")]
    LengthNotPowerOfTwo { len: usize },
    #[error("frame list is empty; nothing to extract a signal from")]
    EmptyFrameList,
    #[error("video has no frames")]
    EmptyVideo,
    #[error("invalid region of interest {roi} for a {height}x{width} frame")]
    InvalidRoi {
        roi: RegionOfInterest,
        height: usize,
        width: usize,
    },
    #[error("invalid channel '{0}'; expected R, G or B")]
    InvalidChannel(String),
    #[error("invalid frequency band: min {min} exceeds max {max}")]
    InvalidFrequencyRange { min: f64, max: f64 },
    #[error("filter changed the signal length: expected {expected}, got {actual}")]
    FilterShapeMismatch { expected: usize, actual: usize },
    #[error("channel frame counts differ: r={r}, g={g}, b={b}")]
    ChannelCountMismatch { r: usize, g: usize, b: usize },
    #[error("frame {index} is {actual_height}x{actual_width}, expected {expected_height}x{expected_width}")]
    FrameShapeMismatch {
        index: usize,
        expected_height: usize,
        expected_width: usize,
        actual_height: usize,
        actual_width: usize,
    },
    #[error("frame rate must be greater than zero, got {0}")]
    InvalidFps(f64),
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for AnalysisError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for AnalysisError {
    fn from(value: image::ImageError) -> Self {
        AnalysisError::Plot(value.to_string())
    }
}
