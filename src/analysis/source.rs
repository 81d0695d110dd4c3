use std::fmt;
use std::str::FromStr;
use ndarray::Array2;
use crate::analysis::error::AnalysisError;
/// Color channel of a decoded frame.
///
/// Green is the default: hemoglobin absorbs green light most strongly, so
/// the pulse modulates that channel the most.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Channel {
    R,
    #[default]
    G,
    B,
}
impl FromStr for Channel {
    type Err = AnalysisError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(Channel::R),
            "G" => Ok(Channel::G),
            "B" => Ok(Channel::B),
            _ => Err(AnalysisError::InvalidChannel(s.to_string())),
        }
    }
}
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::R => write!(f, "R"),
            Channel::G => write!(f, "G"),
            Channel::B => write!(f, "B"),
        }
    }
}
/// A decoded video held in memory as per-channel intensity planes.
///
/// One `height x width` plane per frame per channel. Construction checks
/// that the channels agree on frame count and that every frame has the same
/// shape, so downstream code can slice without further bounds checks.
#[derive(Clone, Debug)]
pub struct Video {
    fps: f64,
    width: usize,
    height: usize,
    r: Vec<Array2<u8>>,
    g: Vec<Array2<u8>>,
    b: Vec<Array2<u8>>,
}
impl Video {
    pub fn new(
        fps: f64,
        r: Vec<Array2<u8>>,
        g: Vec<Array2<u8>>,
        b: Vec<Array2<u8>>,
    ) -> Result<Self, AnalysisError> {
        if fps <= 0.0 {
            return Err(AnalysisError::InvalidFps(fps));
        }
        if r.len() != g.len() || g.len() != b.len() {
            return Err(AnalysisError::ChannelCountMismatch {
                r: r.len(),
                g: g.len(),
                b: b.len(),
            });
        }
        let (height, width) = r.first().map(|frame| frame.dim()).unwrap_or((0, 0));
        for plane in [&r, &g, &b] {
            for (index, frame) in plane.iter().enumerate() {
                let (frame_height, frame_width) = frame.dim();
                if (frame_height, frame_width) != (height, width) {
                    return Err(AnalysisError::FrameShapeMismatch {
                        index,
                        expected_height: height,
                        expected_width: width,
                        actual_height: frame_height,
                        actual_width: frame_width,
                    });
                }
            }
        }
        Ok(Self {
            fps,
            width,
            height,
            r,
            g,
            b,
        })
    }
    pub fn frame_count(&self) -> usize {
        self.r.len()
    }
    pub fn frame_width(&self) -> usize {
        self.width
    }
    pub fn frame_height(&self) -> usize {
        self.height
    }
    pub fn fps(&self) -> f64 {
        self.fps
    }
    /// Frame planes for one color channel, in frame order.
    pub fn channel(&self, channel: Channel) -> &[Array2<u8>] {
        match channel {
            Channel::R => &self.r,
            Channel::G => &self.g,
            Channel::B => &self.b,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn plane(value: u8) -> Array2<u8> {
        Array2::from_elem((2, 3), value)
    }
    #[test]
    fn channel_parses_case_insensitively() {
        assert_eq!("R".parse::<Channel>().unwrap(), Channel::R);
        assert_eq!("g".parse::<Channel>().unwrap(), Channel::G);
        assert_eq!(" b ".parse::<Channel>().unwrap(), Channel::B);
        assert_eq!(Channel::default(), Channel::G);
    }
    #[test]
    fn unknown_channel_is_rejected() {
        let err = "yellow".parse::<Channel>().unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidChannel(name) if name == "yellow"));
    }
    #[test]
    fn channel_accessor_routes_to_the_right_planes() {
        let video = Video::new(24.0, vec![plane(1)], vec![plane(2)], vec![plane(3)]).unwrap();
        assert_eq!(video.channel(Channel::R)[0][[0, 0]], 1);
        assert_eq!(video.channel(Channel::G)[0][[0, 0]], 2);
        assert_eq!(video.channel(Channel::B)[0][[1, 2]], 3);
        assert_eq!(video.frame_height(), 2);
        assert_eq!(video.frame_width(), 3);
    }
    #[test]
    fn non_positive_fps_is_rejected() {
        let err = Video::new(0.0, vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidFps(fps) if fps == 0.0));
    }
    #[test]
    fn unbalanced_channels_are_rejected() {
        let err = Video::new(30.0, vec![plane(0)], vec![plane(0), plane(0)], vec![plane(0)])
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::ChannelCountMismatch { r: 1, g: 2, b: 1 }
        ));
    }
    #[test]
    fn mismatched_frame_shapes_are_rejected() {
        let odd = Array2::from_elem((3, 3), 0u8);
        let err = Video::new(30.0, vec![plane(0)], vec![odd], vec![plane(0)]).unwrap_err();
        assert!(matches!(err, AnalysisError::FrameShapeMismatch { .. }));
    }
    #[test]
    fn frameless_video_is_allowed() {
        let video = Video::new(30.0, vec![], vec![], vec![]).unwrap();
        assert_eq!(video.frame_count(), 0);
        assert_eq!(video.frame_height(), 0);
    }
}
